//! Symmetric pheromone trail storage for ant colony optimization.

/// A dense symmetric table of per-edge pheromone levels.
///
/// Every edge between distinct nodes starts at 1.0; the diagonal stays at
/// zero and is never updated. Updates always touch both directions so that
/// `get(a, b) == get(b, a)` holds at all times.
#[derive(Debug, Clone)]
pub struct PheromoneTable {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneTable {
    /// Initial trail level on every edge.
    pub const INITIAL_LEVEL: f64 = 1.0;

    /// Creates a table for `size` nodes with uniform initial trails.
    pub fn new(size: usize) -> Self {
        let mut data = vec![Self::INITIAL_LEVEL; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Trail level on edge `(from, to)`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every trail by `1 - decay`.
    pub fn evaporate(&mut self, decay: f64) {
        let keep = 1.0 - decay;
        for level in &mut self.data {
            *level *= keep;
        }
    }

    /// Adds `amount` to every edge of a closed path, in both directions.
    ///
    /// Self edges (such as a single-node path `[a, a]`) are skipped.
    pub fn deposit(&mut self, path: &[usize], amount: f64) {
        for edge in path.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            if a == b {
                continue;
            }
            self.data[a * self.size + b] += amount;
            self.data[b * self.size + a] += amount;
        }
    }
}
