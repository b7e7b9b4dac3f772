//! Finite shuffled pool of star names.
//!
//! Names are drawn without replacement so every system in a game gets a
//! unique name. The pool is shuffled once at construction with the
//! injected PRNG; an empty pool is a hard [`NamePoolExhausted`] error --
//! generation never silently produces an unnamed system.

use crate::rng::SimRng;

/// Default star-name list used when the host supplies none.
pub const BUILTIN_NAMES: &[&str] = &[
    "Achernar", "Acrux", "Adhara", "Aldebaran", "Algieba", "Algol", "Alhena",
    "Alioth", "Alkaid", "Alnair", "Alnilam", "Alnitak", "Alphard", "Alphecca",
    "Altair", "Aludra", "Ankaa", "Antares", "Arcturus", "Atria", "Avior",
    "Bellatrix", "Betelgeuse", "Canopus", "Capella", "Castor", "Deneb",
    "Diphda", "Dubhe", "Elnath", "Eltanin", "Enif", "Fomalhaut", "Gacrux",
    "Hadar", "Hamal", "Izar", "Kaus", "Kochab", "Markab", "Menkar",
    "Menkent", "Merak", "Miaplacidus", "Mimosa", "Mintaka", "Mirach",
    "Mirfak", "Mirzam", "Mizar", "Naos", "Nunki", "Peacock", "Polaris",
    "Pollux", "Procyon", "Rasalhague", "Regulus", "Rigel", "Sabik",
    "Sadr", "Saiph", "Sargas", "Scheat", "Schedar", "Shaula", "Sirius",
    "Spica", "Suhail", "Vega", "Wezen", "Zubenelgenubi",
];

/// The pool ran out of names before generation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("star name pool exhausted")]
pub struct NamePoolExhausted;

/// A finite pool of unique star names, drawn back-to-front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Build a pool from `names`, shuffled with a Fisher-Yates pass over
    /// the injected PRNG.
    pub fn shuffled(mut names: Vec<String>, rng: &mut SimRng) -> Self {
        for i in (1..names.len()).rev() {
            let j = rng.next_below(i as u32 + 1) as usize;
            names.swap(i, j);
        }
        Self { names }
    }

    /// Build a shuffled pool from [`BUILTIN_NAMES`].
    pub fn builtin(rng: &mut SimRng) -> Self {
        Self::shuffled(BUILTIN_NAMES.iter().map(|s| (*s).to_string()).collect(), rng)
    }

    /// Pop the next name. Fails once the pool is empty.
    pub fn draw(&mut self) -> Result<String, NamePoolExhausted> {
        self.names.pop().ok_or(NamePoolExhausted)
    }

    /// Number of names still available.
    pub fn remaining(&self) -> usize {
        self.names.len()
    }
}
