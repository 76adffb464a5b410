//! User (admin account) entity.

pub mod model;

pub use model::User;
