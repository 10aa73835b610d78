//! # landmarks-application
//!
//! Orchestrates mutations of landmarks and drives the
//! map, list and entry screens.

#[macro_use]
extern crate log;

mod coordinator;
mod entry;
mod overview;
mod records;

pub mod error;
pub mod view;

pub mod prelude {
    pub use super::{coordinator::*, entry::*, overview::*, records::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use landmarks_core::{entities::*, projection::*, store::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
