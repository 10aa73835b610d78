//! # landmarks-core
//!
//! Client-side synchronization of landmarks with a remote store
//! and the derived map and list projections.

pub mod entities {
    pub use landmarks_entities::{geo::*, id::*, image::*, landmark::*, url::Url};
}

pub mod gateways;
pub mod projection;
pub mod store;
pub mod usecases;
pub mod util;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
