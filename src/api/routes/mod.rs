//! API Routes
//!
//! Route handlers organized by functionality.

pub mod articles;
pub mod health;
pub mod resources;
pub mod site;
