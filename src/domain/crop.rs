//! Crop form fields and the submission snapshot.

use std::fmt;

/// Smallest quantity the form accepts, in kilograms
pub const MIN_QUANTITY_KG: u32 = 1;

/// Smallest expected price the form accepts, in rupees per kilogram
pub const MIN_PRICE_PER_KG: u32 = 1;

/// Focusable elements of the farmer section, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    CropName,
    Quantity,
    Price,
    Location,
    Submit,
}

impl FormField {
    /// All focusable elements in tab order
    pub const ALL: [FormField; 5] = [
        FormField::CropName,
        FormField::Quantity,
        FormField::Price,
        FormField::Location,
        FormField::Submit,
    ];

    /// Label shown on the widget
    pub fn label(&self) -> &'static str {
        match self {
            FormField::CropName => "Crop Name",
            FormField::Quantity => "Quantity (kg)",
            FormField::Price => "Expected Price (₹ per kg)",
            FormField::Location => "Location",
            FormField::Submit => crate::domain::page::SUBMIT_LABEL,
        }
    }

    /// Next element, wrapping to the first
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous element, wrapping to the last
    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Snapshot of the form taken when the submit button is activated.
///
/// Only logged; never stored or sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropSubmission {
    pub crop_name: String,
    pub quantity_kg: u32,
    pub price_per_kg: u32,
    pub location: String,
}

impl CropSubmission {
    /// Total asking value of the lot in rupees
    pub fn total_value(&self) -> u64 {
        u64::from(self.quantity_kg) * u64::from(self.price_per_kg)
    }
}

impl fmt::Display for CropSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.crop_name.is_empty() {
            "(unnamed crop)"
        } else {
            &self.crop_name
        };
        write!(
            f,
            "{} - {} kg @ ₹{}/kg",
            name, self.quantity_kg, self.price_per_kg
        )?;
        if !self.location.is_empty() {
            write!(f, " from {}", self.location)?;
        }
        Ok(())
    }
}
