//! Binary lifting over a successor function, plus a sparse table.
//!
//! The number-line lesson draws one arc layer per power of two: level k
//! holds the 2^k-th successor of every node, built by doubling the previous
//! layer. The sparse table is the same doubling idea applied to range
//! minima, with overlapping windows answering queries in two lookups.

use serde::Serialize;

/// Doubling jump table: `level(k)[i]` is the 2^k-th successor of `i`.
#[derive(Clone, Debug, Serialize)]
pub struct JumpTable {
    up: Vec<Vec<Option<usize>>>,
}

impl JumpTable {
    /// Build `levels + 1` layers (level 0 is `next` itself).
    pub fn new(next: &[Option<usize>], levels: usize) -> Self {
        let mut up = Vec::with_capacity(levels + 1);
        up.push(next.to_vec());
        for k in 1..=levels {
            let prev = &up[k - 1];
            let layer = prev
                .iter()
                .map(|&mid| mid.and_then(|m| prev[m]))
                .collect();
            up.push(layer);
        }
        Self { up }
    }

    #[inline]
    pub fn levels(&self) -> usize {
        self.up.len()
    }

    /// Arc layer k, the 2^k-stride successors (what the figure draws).
    #[inline]
    pub fn level(&self, k: usize) -> &[Option<usize>] {
        &self.up[k]
    }

    /// Advance `i` by exactly `steps` successors, decomposing `steps` into
    /// powers of two; `None` if the walk leaves the structure.
    pub fn jump(&self, i: usize, steps: u64) -> Option<usize> {
        assert!(
            steps < (1u64 << self.up.len()),
            "steps exceed table coverage"
        );
        let mut cur = i;
        for (k, layer) in self.up.iter().enumerate() {
            if steps & (1 << k) != 0 {
                cur = layer[cur]?;
            }
        }
        Some(cur)
    }
}

/// Idempotent range-minimum sparse table over a fixed slice.
#[derive(Clone, Debug, Serialize)]
pub struct SparseTable {
    /// `table[k][i]` = min of `values[i .. i + 2^k]`.
    table: Vec<Vec<u64>>,
}

impl SparseTable {
    /// `None` for an empty slice.
    pub fn new(values: &[u64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len();
        let mut table = vec![values.to_vec()];
        let mut width = 1;
        while width * 2 <= n {
            let prev = table.last().expect("at least one layer");
            let layer: Vec<u64> = (0..=n - width * 2)
                .map(|i| prev[i].min(prev[i + width]))
                .collect();
            table.push(layer);
            width *= 2;
        }
        Some(Self { table })
    }

    /// Minimum over the half-open range `l..r` (two overlapping windows).
    pub fn min(&self, l: usize, r: usize) -> Option<u64> {
        if l >= r || r > self.table[0].len() {
            return None;
        }
        let k = (usize::BITS - 1 - (r - l).leading_zeros()) as usize;
        let width = 1usize << k;
        Some(self.table[k][l].min(self.table[k][r - width]))
    }
}
