// File: crates/smartstats-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Pixel position of item `index` when `count` items span `[start, end]` by index.
/// A single item sits in the middle.
pub fn index_position(index: usize, count: usize, start: f32, end: f32) -> f32 {
    if count <= 1 {
        return (start + end) / 2.0;
    }
    start + (end - start) * index as f32 / (count - 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 10.0, 5);
        assert_eq!(v, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn index_positions_spread_evenly() {
        assert_eq!(index_position(0, 3, 0.0, 100.0), 0.0);
        assert_eq!(index_position(1, 3, 0.0, 100.0), 50.0);
        assert_eq!(index_position(2, 3, 0.0, 100.0), 100.0);
        assert_eq!(index_position(0, 1, 0.0, 100.0), 50.0);
    }
}
