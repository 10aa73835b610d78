//! Adapters of the core gateways to the outside world.

pub mod http;
pub mod image_file;
pub mod location;
