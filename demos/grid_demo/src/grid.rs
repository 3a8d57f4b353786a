//! Synthetic zone statistics on a square block of quadrant cells.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mf_core::Direction;
use mf_demand::ZoneStatistics;

/// `size × size` cells starting at `origin` (south-west corner), walking
/// east along rows and north between rows.
pub fn grid_codes(origin: &str, size: usize) -> Result<Vec<String>> {
    let mut codes = Vec::with_capacity(size * size);
    let mut row_start = origin.to_owned();
    for _ in 0..size {
        let mut cell = row_start.clone();
        for _ in 0..size {
            let next = mf_mesh::neighbor(&cell, Direction::East)?;
            codes.push(std::mem::replace(&mut cell, next));
        }
        row_start = mf_mesh::neighbor(&row_start, Direction::North)?;
    }
    Ok(codes)
}

/// Residents spread evenly with noise; jobs concentrate toward the center.
pub fn synthetic_statistics(codes: &[String], size: usize, seed: u64) -> Vec<ZoneStatistics> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let center = (size as f64 - 1.0) / 2.0;
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let (row, col) = ((i / size) as f64, (i % size) as f64);
            let dist = ((row - center).powi(2) + (col - center).powi(2)).sqrt();
            let centrality = (1.0 - dist / (center + 1.0)).max(0.0);

            let population = rng.gen_range(200.0..1_500.0) * (1.2 - centrality);
            let employment = rng.gen_range(0.0..400.0) + 4_000.0 * centrality.powi(3);
            ZoneStatistics::new(code.as_str(), population, employment)
        })
        .collect()
}
