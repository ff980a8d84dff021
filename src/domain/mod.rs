//! Domain layer: request/metadata entities, resolution outcomes and the
//! index repository seam.

pub mod entities;
pub mod outcome;
pub mod repositories;

pub use outcome::{REDIRECT_CACHE_CONTROL, ResolutionOutcome};
