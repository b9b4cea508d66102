use serde::Serialize;

/// A numbered entrant (0..=100).
///
/// ID 0 is not a real participant: it is the slot that anchors a
/// checkpoint's base time. Every real entrant is 1..=100.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Participant(u8);

pub const BASE_ANCHOR_ID: u8 = 0;
pub const FIRST_PARTICIPANT: u8 = 1;
pub const LAST_PARTICIPANT: u8 = 100;

impl Participant {
    pub fn new(id: u8) -> Option<Self> {
        if id <= LAST_PARTICIPANT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The reserved participant-0 slot holding a checkpoint's base time.
    pub fn base_anchor() -> Self {
        Self(BASE_ANCHOR_ID)
    }

    pub fn id(&self) -> u8 {
        self.0
    }

    pub fn is_base_anchor(&self) -> bool {
        self.0 == BASE_ANCHOR_ID
    }

    /// All real entrants (1..=100), ascending.
    pub fn all() -> impl Iterator<Item = Participant> {
        (FIRST_PARTICIPANT..=LAST_PARTICIPANT).map(Participant)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
