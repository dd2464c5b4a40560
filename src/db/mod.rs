pub mod complaints;
pub mod connection;
pub mod news;
pub mod payments;
pub mod properties;
pub mod users;
