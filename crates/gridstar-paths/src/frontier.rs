use std::collections::BinaryHeap;

use gridstar_core::Cell;

/// Frontier entry ordered by `priority`, then by push order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) cell: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first, and
        // the earliest push among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Entry {}

/// Min-priority open list with lazy deletion.
///
/// A cell may be pushed several times with different priorities; stale
/// entries are discarded by the caller when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cell: Cell, priority: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            cell,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the heap reached.
    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}
