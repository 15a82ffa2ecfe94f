//! CLI front end
//!
//! The interactive numbered menu that drives the contact service.

pub mod menu;

pub use menu::{Menu, MenuOptions, MENU_ITEMS};
