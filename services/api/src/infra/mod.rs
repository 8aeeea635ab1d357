pub mod db;
pub mod discord;
pub mod steam;
pub mod uploads;
