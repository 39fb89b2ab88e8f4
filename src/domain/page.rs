//! Static copy of the AgriConnect page.

pub const SUBTITLE: &str = "Connecting Farmers Directly to Buyers";

pub const INTRO: &str = "AgriConnect is a digital platform that helps farmers:";

pub const BENEFITS: &[&str] = &[
    "Upload crop details",
    "Sell directly to buyers",
    "Avoid middlemen",
    "Use voice & local language support",
];

pub const FARMER_SECTION: &str = "🚜 Farmer Section";

pub const SUBMIT_LABEL: &str = "Submit Crop Details";

pub const SUCCESS_MESSAGE: &str = "✅ Crop details submitted successfully!";
