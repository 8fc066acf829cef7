//! Cosmetic per-frame state
//!
//! Nothing here feeds back into gameplay.

pub mod reticle;
pub mod starfield;
pub mod terrain;

pub use reticle::Reticle;
pub use starfield::Starfield;
pub use terrain::Terrain;
