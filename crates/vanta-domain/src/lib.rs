//! Domain types shared across the Vanta workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod badge;
pub mod entry_ref;
pub mod ident;
pub mod link;
pub mod media;
pub mod profile;
pub mod user;
