//! UI Components

pub mod bill;
pub mod error_banner;
pub mod header;
pub mod stepper;

pub use bill::BillSummaryCard;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use stepper::QuantityStepper;
