//! Seeded 2-D gradient (Perlin) noise.
//!
//! The permutation table is shuffled from an injected [`SimRng`], so the
//! noise surface -- like everything else in generation -- is a pure
//! function of the seed. Output is a smooth coherent field, roughly in
//! `[-1, 1]`; sector placement only compares values against each other,
//! so the exact amplitude does not matter, but the sign does: cells at or
//! below zero lose against any positive cell in the maximum scan.

use crate::rng::SimRng;

/// 2-D gradient noise over a seeded permutation table.
#[derive(Debug, Clone)]
pub struct Perlin {
    perm: [u8; 256],
}

impl Perlin {
    /// Build a noise source with a permutation table shuffled by `rng`.
    pub fn new(rng: &mut SimRng) -> Self {
        let mut perm = [0u8; 256];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        // Fisher-Yates
        for i in (1..256).rev() {
            let j = rng.next_below(i as u32 + 1) as usize;
            perm.swap(i, j);
        }
        Self { perm }
    }

    /// Sample the noise surface at `(x, y)`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let xf = x.floor();
        let yf = y.floor();
        let x0 = xf as i32;
        let y0 = yf as i32;
        let fx = x - xf;
        let fy = y - yf;

        let u = fade(fx);
        let v = fade(fy);

        let n00 = grad(self.hash(x0, y0), fx, fy);
        let n10 = grad(self.hash(x0 + 1, y0), fx - 1.0, fy);
        let n01 = grad(self.hash(x0, y0 + 1), fx, fy - 1.0);
        let n11 = grad(self.hash(x0 + 1, y0 + 1), fx - 1.0, fy - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }

    fn hash(&self, x: i32, y: i32) -> u8 {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        self.perm[(usize::from(self.perm[xi]) + yi) & 255]
    }
}

/// Quintic smoothstep, zero first and second derivatives at 0 and 1.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product of the offset with one of 8 lattice gradients.
fn grad(hash: u8, x: f32, y: f32) -> f32 {
    match hash & 7 {
        0 => x + y,
        1 => x - y,
        2 => -x + y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}
