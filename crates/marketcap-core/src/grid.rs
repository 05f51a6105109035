// File: crates/marketcap-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Dash pattern (on, off) for the cartesian grid, in pixels.
pub const GRID_DASH: [f32; 2] = [3.0, 3.0];

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
