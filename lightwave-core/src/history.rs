use std::collections::VecDeque;

/// Fixed-capacity rolling window of received-power samples (dBm).
///
/// This is the buffer behind the trend chart: insertion order is arrival
/// order, and once the window is full each append evicts the oldest sample
/// before the new one lands at the tail. There is no other way to remove
/// or reorder elements.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one first when at capacity.
    /// A zero-capacity window holds nothing and stays empty.
    pub fn append(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        if self.samples.len() < self.capacity {
            self.samples.push_back(value);
        }
    }

    /// Replace the whole window, keeping only the *last* `capacity` values
    /// when handed more than fit. Used by the one-time backfill.
    pub fn replace(&mut self, values: Vec<f64>) {
        let skip = values.len().saturating_sub(self.capacity);
        self.samples = values.into_iter().skip(skip).collect();
    }

    /// Owned ordered copy, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
