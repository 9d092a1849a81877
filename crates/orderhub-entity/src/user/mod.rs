//! User directory entity.

pub mod model;
pub mod role;

pub use model::{UpsertUser, User};
pub use role::UserRole;
