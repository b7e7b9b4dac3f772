//! Dominion Starmap -- procedural star-map generation for the Dominion
//! turn-based strategy engine.
//!
//! This crate produces the static [`sector::Sector`] a game is played on:
//! a square 2-D field populated with star systems placed by a weighted
//! noise maximum-search with a minimum-spacing exclusion rule.
//!
//! # Generation Pipeline
//!
//! One call to [`sector::Sector::generate`] runs:
//!
//! 1. **Weight field** -- a uniform weight map at `size x precision`
//!    resolution per axis (every cell weight 1).
//! 2. **Noise field** -- 2-D gradient noise sampled per cell at a random
//!    per-generation offset, gated cell-wise by the weight field.
//! 3. **Placement** -- repeated row-major scans for the field maximum;
//!    each chosen cell becomes a system and a square neighborhood around
//!    it is zeroed so no later system lands too close.
//! 4. **Attributes** -- spectral class, size, and mineral endowment are
//!    rolled uniformly; the name is drawn from a pre-shuffled finite pool.
//!
//! Output is a pure function of the config, the PRNG seed, and the name
//! list, which is what makes generation reproducible in tests.
//!
//! # Key Types
//!
//! - [`sector::Sector`] / [`sector::SectorConfig`] -- the generated map
//!   and its generation parameters.
//! - [`system::StarSystem`] -- one placed system with generated
//!   attributes.
//! - [`rng::SimRng`] -- deterministic SplitMix64 PRNG, the injectable
//!   random source for all generation.
//! - [`noise::Perlin`] -- seeded 2-D gradient noise.
//! - [`names::NamePool`] -- finite shuffled name pool; exhaustion is a
//!   hard error, never a silent unnamed system.

pub mod names;
pub mod noise;
pub mod rng;
pub mod sector;
pub mod system;

pub use names::{NamePool, NamePoolExhausted};
pub use noise::Perlin;
pub use rng::SimRng;
pub use sector::{Sector, SectorConfig};
pub use system::{Position, StarSystem, StellarClass};
