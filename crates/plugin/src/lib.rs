//! Host-side capabilities the facet extractors read from.
//!
//! The host build tool owns its object model; an adapter per host shape
//! exposes it through these narrow traits. A missing capability is modelled as
//! an absent lookup, never as an error.

pub mod cap;
pub mod error;
pub mod property;

pub use cap::*;
pub use error::{PropertyError, ResolutionError};
pub use property::{PropertyHolder, PropertyLookup, PropertyValue};
