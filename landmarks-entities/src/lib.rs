#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # landmarks-entities
//!
//! Reusable, agnostic domain entities for geotagged landmarks.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic.

pub mod geo;
pub mod id;
pub mod image;
pub mod landmark;

#[cfg(feature = "url")]
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
