//! Shared types for the Sadeepa Photography platform
//!
//! Common types used by both the booking client flow and the studio
//! server: domain models, the unified error type, invoice numbering
//! and the pure formatter utilities.

pub mod error;
pub mod format;
pub mod invoice;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult};
pub use invoice::{Clock, InvoiceNumber, SystemClock};
pub use models::{
    Booking, BookingCreate, BookingStatus, BookingStatusUpdate, GalleryCategory, GalleryImage,
    GalleryImageCreate, GeoPoint, Package, PackageCreate, PackageUpdate, SelectedLocation,
};
