//! The sector: the full game map and the placement algorithm that
//! generates it.
//!
//! Placement works on a discrete field at `size * precision` cells per
//! axis. A uniform weight map gates a gradient-noise field; systems are
//! placed by repeatedly scanning for the field maximum and zeroing a
//! square neighborhood around each pick so later picks keep their
//! distance. The scan is row-major and ties go to the first cell
//! encountered -- an arbitrary but deterministic rule, kept so identical
//! inputs always reproduce identical maps.

use serde::{Deserialize, Serialize};

use crate::names::{NamePool, NamePoolExhausted};
use crate::noise::Perlin;
use crate::rng::SimRng;
use crate::system::{Position, StarSystem, StellarClass};

/// Largest mineral endowment a generated system can roll.
pub const MAX_MINERALS: u32 = 5;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Generation parameters for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorConfig {
    /// Height and width of the sector in distance units.
    pub sector_size: u32,
    /// Number of systems to place.
    pub num_systems: u32,
    /// Field cells per distance unit. Higher values allow finer
    /// placement at quadratic memory cost.
    pub precision: u32,
    /// Scale passed to the noise sampler. Higher is more jagged, lower
    /// is smoother.
    pub noise_scale: f32,
    /// Largest system size that can roll; sizes distribute uniformly
    /// over `1..=max_system_size`.
    pub max_system_size: u32,
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            sector_size: 100,
            num_systems: 20,
            precision: 10,
            noise_scale: 10.0,
            max_system_size: 10,
        }
    }
}

impl SectorConfig {
    /// Field resolution per axis, in cells.
    pub fn field_size(&self) -> usize {
        (self.sector_size * self.precision) as usize
    }

    /// Half-width, in cells, of the square zeroed around each placed
    /// system.
    pub fn exclusion_half_width(&self) -> usize {
        if self.num_systems == 0 {
            return 0;
        }
        self.field_size() / self.num_systems as usize / 2
    }

    /// The guaranteed minimum separation between placed systems, in
    /// distance units.
    pub fn min_spacing(&self) -> f32 {
        self.exclusion_half_width() as f32 / self.precision as f32
    }
}

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// The entire game map. Immutable once generated; turn advancement
/// carries it through snapshots unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Height and width in distance units.
    pub size: u32,
    /// Every system in the sector, in placement order.
    pub systems: Vec<StarSystem>,
}

impl Sector {
    /// An empty sector of the given size. Carries no systems; mainly
    /// useful for constructing invalid-state fixtures in tests.
    pub fn empty(size: u32) -> Self {
        Self {
            size,
            systems: Vec::new(),
        }
    }

    /// Generate a sector from `config`, drawing all randomness from
    /// `rng` and all names from `names`.
    ///
    /// Fails with [`NamePoolExhausted`] if the pool holds fewer names
    /// than `config.num_systems`; no partial sector is returned.
    pub fn generate(
        config: &SectorConfig,
        rng: &mut SimRng,
        names: &mut NamePool,
    ) -> Result<Sector, NamePoolExhausted> {
        let field_size = config.field_size();
        let cells = field_size * field_size;

        // Uniform weights: systems may land anywhere. The weight map is
        // the eligibility mask; a zero-weight cell never has its noise
        // evaluated at all.
        let weights = vec![1.0f32; cells];

        // One random sample offset per generation, shared by every cell.
        let offset_x = rng.next_f32() * 100.0;
        let offset_y = rng.next_f32() * 100.0;
        let noise = Perlin::new(rng);

        let mut field = vec![0.0f32; cells];
        for y in 0..field_size {
            for x in 0..field_size {
                let idx = y * field_size + x;
                let weight = weights[idx];
                if weight > 0.0 {
                    let sample_x = x as f32 / config.noise_scale + offset_x;
                    let sample_y = y as f32 / config.noise_scale + offset_y;
                    field[idx] = noise.sample(sample_x, sample_y) * weight;
                }
            }
        }

        let half_width = config.exclusion_half_width() as i64;
        let mut systems = Vec::with_capacity(config.num_systems as usize);

        for _ in 0..config.num_systems {
            // Row-major scan for the maximum; first cell wins ties.
            let mut best = f32::NEG_INFINITY;
            let mut best_x = 0usize;
            let mut best_y = 0usize;
            for y in 0..field_size {
                for x in 0..field_size {
                    let v = field[y * field_size + x];
                    if v > best {
                        best = v;
                        best_x = x;
                        best_y = y;
                    }
                }
            }

            let class = StellarClass::ALL[rng.next_below(StellarClass::ALL.len() as u32) as usize];
            let size = 1 + rng.next_below(config.max_system_size);
            let minerals = 1 + rng.next_below(MAX_MINERALS);
            let name = names.draw()?;

            systems.push(StarSystem {
                name,
                class,
                size,
                minerals,
                position: Position::new(
                    best_x as f32 / config.precision as f32,
                    best_y as f32 / config.precision as f32,
                ),
            });

            // Zero the square neighborhood so later picks keep their
            // distance. Cells outside the field are skipped.
            for dy in -half_width..=half_width {
                for dx in -half_width..=half_width {
                    let tx = best_x as i64 + dx;
                    let ty = best_y as i64 + dy;
                    if tx >= 0 && (tx as usize) < field_size && ty >= 0 && (ty as usize) < field_size
                    {
                        field[ty as usize * field_size + tx as usize] = 0.0;
                    }
                }
            }
        }

        Ok(Sector {
            size: config.sector_size,
            systems,
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
