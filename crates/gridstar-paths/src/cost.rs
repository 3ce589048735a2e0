use std::collections::HashMap;

use gridstar_core::Cell;

/// Best known way to reach a cell during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CostRecord {
    /// Cell this one was reached from; `None` for the start.
    pub(crate) predecessor: Option<Cell>,
    /// Accumulated path cost from the start.
    pub(crate) cost: u32,
}

/// Per-search map from reached cells to their [`CostRecord`].
#[derive(Debug, Default)]
pub(crate) struct CostMap {
    records: HashMap<Cell, CostRecord>,
}

impl CostMap {
    pub(crate) fn new(start: Cell) -> Self {
        let mut records = HashMap::new();
        records.insert(
            start,
            CostRecord {
                predecessor: None,
                cost: 0,
            },
        );
        Self { records }
    }

    #[inline]
    pub(crate) fn cost(&self, cell: Cell) -> Option<u32> {
        self.records.get(&cell).map(|r| r.cost)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, cell: Cell) -> Option<CostRecord> {
        self.records.get(&cell).copied()
    }

    /// Record reaching `cell` from `from` at `cost` if that is strictly
    /// better than what is known. Returns whether the record changed.
    pub(crate) fn relax(&mut self, cell: Cell, from: Cell, cost: u32) -> bool {
        if self.cost(cell).is_some_and(|known| cost >= known) {
            return false;
        }
        self.records.insert(
            cell,
            CostRecord {
                predecessor: Some(from),
                cost,
            },
        );
        true
    }

    /// Follow predecessor links from `goal` and return the start-to-goal path.
    pub(crate) fn path_to(&self, goal: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = self.records.contains_key(&goal).then_some(goal);
        while let Some(c) = cur {
            path.push(c);
            cur = self.records.get(&c).and_then(|r| r.predecessor);
        }
        path.reverse();
        path
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
