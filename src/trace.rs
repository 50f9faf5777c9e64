//! The ordered log of frontier insertions and closures produced by a search. A trace holds
//! every cell the search touched, including branches that did not end up on the path, so a
//! viewer can replay the search step by step.
use crate::cell::Cell;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// What happened to a cell at one step of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceKind {
    /// The cell was pushed onto the frontier with a new best cost.
    Frontier,
    /// The cell was expanded and its cost is final.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    pub cell: Cell,
    pub kind: TraceKind,
}

impl TraceEvent {
    pub fn new(cell: Cell, kind: TraceKind) -> TraceEvent {
        TraceEvent { cell, kind }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }
    pub fn push(&mut self, cell: Cell, kind: TraceKind) {
        self.events.push(TraceEvent::new(cell, kind));
    }
    pub fn len(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }
    /// Cells in the order they were pushed onto the frontier. A cell appears once per
    /// improvement of its cost.
    pub fn frontier_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells_of(TraceKind::Frontier)
    }
    /// Cells in the order they were expanded. Each cell appears at most once.
    pub fn closed_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells_of(TraceKind::Closed)
    }
    fn cells_of(&self, kind: TraceKind) -> impl Iterator<Item = Cell> + '_ {
        self.events
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| e.cell)
    }

    /// Replays the first `steps` events and returns the latest kind of every cell seen so far,
    /// keyed in order of first appearance. `steps` beyond the end of the trace replays all of
    /// it.
    pub fn snapshot(&self, steps: usize) -> IndexMap<Cell, TraceKind, FxBuildHasher> {
        let mut states = IndexMap::with_hasher(FxBuildHasher::default());
        for event in self.events.iter().take(steps) {
            states.insert(event.cell, event.kind);
        }
        states
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

impl FromIterator<TraceEvent> for Trace {
    fn from_iter<I: IntoIterator<Item = TraceEvent>>(iter: I) -> Trace {
        Trace {
            events: iter.into_iter().collect(),
        }
    }
}
