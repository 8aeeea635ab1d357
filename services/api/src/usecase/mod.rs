pub mod account;
pub mod admin;
pub mod badge;
pub mod oauth;
pub mod profile;
pub mod public;
