//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the resource controllers,
//! one submodule per externally addressable collection, excluding the
//! authorization gate which is handled separately.

pub mod dining_commons_menu_item;
pub mod menu_item_review;
pub mod recommendation;
