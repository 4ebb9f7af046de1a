pub mod filter;
pub mod form;
pub mod list;
pub mod status_badge;
