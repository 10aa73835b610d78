// Capabilities of the outside world the core depends on.
//
// All of them run on the single logical sequence that owns the
// landmark store, so their futures are not required to be `Send`.

pub mod image_source;
pub mod landmark_service;
pub mod location;
