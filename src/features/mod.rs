pub mod chat;
pub mod complaints;
pub mod offices;
pub mod schedule;
