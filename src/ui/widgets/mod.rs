//! Reusable UI widgets for agriconnect.

pub mod farmer_form;
pub mod help;
pub mod number_input;
pub mod text_input;
