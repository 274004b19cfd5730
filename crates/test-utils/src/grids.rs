//! Synthetic grid-value generators.

/// Grid where cell `(col, row)` (1-based, bottom row first) holds
/// `col * 1000 + row`, so any read can be verified from the coordinate
/// alone.
pub fn gradient_grid(nx: u32, ny: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity((nx * ny) as usize);
    for row in 1..=ny {
        for col in 1..=nx {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Grid where every cell holds `value`.
pub fn constant_grid(nx: u32, ny: u32, value: f32) -> Vec<f32> {
    vec![value; (nx * ny) as usize]
}
