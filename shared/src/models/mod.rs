//! View models
//!
//! Client-side projections of backend entities. They are fetched fresh on
//! every load and never cached; IDs are opaque backend strings.

pub mod common;
pub mod discount;
pub mod gallery;
pub mod media;
pub mod offer;
pub mod outlet;
pub mod product;
pub mod promo_video;
pub mod qr_payment;
pub mod social_media;
pub mod team;
pub mod variant;

// Re-exports
pub use common::*;
pub use discount::*;
pub use gallery::*;
pub use media::*;
pub use offer::*;
pub use outlet::*;
pub use product::*;
pub use promo_video::*;
pub use qr_payment::*;
pub use social_media::*;
pub use team::*;
pub use variant::*;
