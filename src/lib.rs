//! agriconnect: Terminal form for farmers to list their crops
//!
//! Renders the AgriConnect landing page and its farmer section: crop name,
//! quantity, expected price and location, with a submit button that
//! acknowledges the submission.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
