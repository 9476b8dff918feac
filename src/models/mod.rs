pub mod admin;

pub use admin::{ActionEvent, AdminSummary, Administrator};
