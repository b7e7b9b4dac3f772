//! Star-system data types: spectral class, position, and the placed
//! system record itself. All are plain data, immutable after generation.

use serde::{Deserialize, Serialize};

/// Spectral class of a star, hottest to coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StellarClass {
    /// Blue O class.
    O,
    /// Blue-white B class.
    B,
    /// White A class.
    A,
    /// Yellow-white F class.
    F,
    /// Yellow G class.
    G,
    /// Light-orange K class.
    K,
    /// Orange-red M class.
    M,
}

impl StellarClass {
    /// All seven classes, in enum order.
    pub const ALL: [StellarClass; 7] = [
        StellarClass::O,
        StellarClass::B,
        StellarClass::A,
        StellarClass::F,
        StellarClass::G,
        StellarClass::K,
        StellarClass::M,
    ];
}

/// A position in the sector, in abstract distance units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One placed star system. Physical attributes only; faction state lives
/// with the owning game objects, not on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    /// Unique generated name.
    pub name: String,
    /// Spectral class of the primary star.
    pub class: StellarClass,
    /// How much usable room the system has, not literal stellar radius.
    pub size: u32,
    /// Mineral endowment.
    pub minerals: u32,
    /// Location in the sector.
    pub position: Position,
}
