//! Blog post entity.

pub mod model;

pub use model::{BlogPost, CreatePost, PostSummary};
