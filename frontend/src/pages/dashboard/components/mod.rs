pub mod admin_panel;
pub mod balance;
pub mod quick_actions;
