//! Data models
//!
//! Shared between studio-server and the booking client flow (via API).
//! Entity structs mirror the persisted tables; Create/Update structs
//! carry the request payloads.

pub mod booking;
pub mod gallery_image;
pub mod location;
pub mod package;

// Re-exports
pub use booking::*;
pub use gallery_image::*;
pub use location::*;
pub use package::*;
