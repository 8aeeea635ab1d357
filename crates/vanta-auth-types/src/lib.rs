//! Bearer-token types shared between token issuance and the extractors.

pub mod identity;
pub mod token;
