pub mod analyze;
pub mod catalog;
pub mod health;
pub mod hospitals;
