//! Page components, one per route.

pub mod admin_home;
pub mod login;
pub mod user_home;
