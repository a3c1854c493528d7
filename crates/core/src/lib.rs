//! Core traits shared by the zeolite adsorption crates.
//!
//! - [`Model`]: a deterministic map from a typed input to a typed output
//! - [`Observer`]: receives simulation events and optionally returns a control action

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
