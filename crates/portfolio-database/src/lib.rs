//! # portfolio-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! repository implementations for the portfolio entities.

pub mod connection;
pub mod migration;
pub mod repositories;
