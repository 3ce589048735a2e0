//! Ordered exploration log for visualization.

use gridstar_core::Cell;

/// State transition recorded for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The cell got a strictly better cost and was pushed onto the frontier.
    AddedToFrontier,
    /// The cell was expanded; its cost is final.
    Finalized,
}

/// A single `(cell, phase)` trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    pub cell: Cell,
    pub phase: Phase,
}

/// Events in emission order. Append-only while a search runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, cell: Cell, phase: Phase) {
        self.events.push(TraceEvent { cell, phase });
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Number of events with the given phase.
    pub fn count(&self, phase: Phase) -> usize {
        self.events.iter().filter(|e| e.phase == phase).count()
    }

    /// Cells in the order they were finalized.
    pub fn finalized(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells_in(Phase::Finalized)
    }

    /// Cells in the order they were pushed onto the frontier.
    pub fn added(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells_in(Phase::AddedToFrontier)
    }

    fn cells_in(&self, phase: Phase) -> impl Iterator<Item = Cell> + '_ {
        self.events
            .iter()
            .filter(move |e| e.phase == phase)
            .map(|e| e.cell)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for Trace {
    type Item = TraceEvent;
    type IntoIter = std::vec::IntoIter<TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
