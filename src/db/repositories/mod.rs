pub mod admin;
pub mod events;
