//! Domain entities for agriconnect.
//!
//! This module contains:
//! - page: The static copy of the landing page
//! - crop: Form fields and the crop submission snapshot

mod crop;
pub mod page;

pub use crop::{CropSubmission, FormField, MIN_PRICE_PER_KG, MIN_QUANTITY_KG};
