//! GigabitEthernet / Aggregation collision handling.
//!
//! A neighbor reached over a port-channel shows up both as its member links
//! (`GigabitEthernet...`) and as the bundle (`Aggregation...`). Only the
//! bundle should be reported once it is known. Candidates are folded in
//! discovery order:
//!
//! - a Gigabit candidate is kept unless an Aggregation entry is already
//!   collected;
//! - any other candidate first drops everything collected so far if a
//!   Gigabit entry is among it, then is kept.

/// Marker of a physical member link.
pub const GIGABIT_MARKER: &str = "GigabitEthernet";

/// Marker of a link bundle.
pub const AGGREGATION_MARKER: &str = "Aggregation";

/// Fold state over the raw candidate sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionState {
    has_aggregation: bool,
    has_gigabit: bool,
    collected: Vec<String>,
}

impl CollisionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next candidate.
    pub fn push(&mut self, candidate: String) {
        if candidate.contains(GIGABIT_MARKER) {
            if self.has_aggregation {
                return;
            }
        } else if self.has_gigabit {
            self.collected.clear();
            self.has_aggregation = false;
            self.has_gigabit = false;
        }
        self.has_aggregation |= candidate.contains(AGGREGATION_MARKER);
        self.has_gigabit |= candidate.contains(GIGABIT_MARKER);
        self.collected.push(candidate);
    }

    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    pub fn into_collected(self) -> Vec<String> {
        self.collected
    }
}

/// Resolve collisions in `raw`. Zero or one candidate is returned as is.
pub fn resolve_collisions(raw: Vec<String>) -> Vec<String> {
    if raw.len() <= 1 {
        return raw;
    }
    raw.into_iter()
        .fold(CollisionState::new(), |mut state, candidate| {
            state.push(candidate);
            state
        })
        .into_collected()
}
