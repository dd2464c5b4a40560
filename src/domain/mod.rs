pub mod access;
pub mod models;
pub mod reports;
pub mod search;
pub mod stats;
