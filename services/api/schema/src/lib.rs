//! sea-orm entities for the Vanta API service.

pub mod badges;
pub mod connections;
pub mod links;
pub mod media_items;
pub mod users;
