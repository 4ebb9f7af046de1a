mod auth;
pub mod client;
pub mod types;
mod users;
mod vacations;

pub use client::*;
pub use types::*;
