//! Deterministic per-slice phase generation.
//!
//! Each slice gets an independent uniform phase in `[0, 2π)` so that
//! simultaneous tones do not start in lockstep and beat against each other.
//! All randomness flows through a PCG32 seeded once per run, making any run
//! reproducible from its seed. Seeds can also be derived from a string key
//! (the object identifier) via BLAKE3.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 from a 32-bit seed, expanded to the 64-bit state PCG32
/// expects by duplicating the value in both halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a 32-bit seed from a string key by BLAKE3 hashing.
///
/// Used to default the run seed from the object name so repeated runs on the
/// same target produce the same sound.
pub fn derive_seed(key: &str) -> u32 {
    let hash = blake3::hash(key.as_bytes());
    let b = hash.as_bytes();
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

/// Generates the per-slice phase sequence for a run.
pub fn slice_phases(num_slices: usize, seed: u32) -> Vec<f64> {
    let mut rng = create_rng(seed);
    (0..num_slices).map(|_| rng.gen::<f64>() * TAU).collect()
}
