//! UI components for agriconnect.
//!
//! This module contains:
//! - layout: Page rendering
//! - input: Keyboard input handling
//! - widgets: Form widgets and overlays

pub mod input;
pub mod layout;
pub mod widgets;
