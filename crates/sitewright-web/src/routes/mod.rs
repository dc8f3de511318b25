//! # Route Modules
//!
//! Each module defines an Axum Router for one surface area. Routers are
//! assembled in [`crate::app`].

pub mod content;
pub mod pages;
pub mod robots;
