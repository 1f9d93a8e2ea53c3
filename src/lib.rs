//! classpoints - a classroom points tracker in the terminal
//!
//! A roster of students rendered as cards in a grid, with point scoring,
//! live search, and modal edits. State persists as a flat JSON array under
//! the user's home directory. The binary entry point is in main.rs.

pub mod app;
pub mod avatar;
pub mod config;
pub mod input;
pub mod roster;
pub mod store;
pub mod theme;
pub mod ui;
