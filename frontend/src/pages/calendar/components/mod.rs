pub mod day_details;
pub mod grid;
