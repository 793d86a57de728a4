//! SeaORM entities for the two persisted tables.

pub mod post;
pub mod user;
