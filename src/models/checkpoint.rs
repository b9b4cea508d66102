use serde::Serialize;

/// A numbered waypoint of the event course (1..=20).
///
/// Checkpoint 20 is the finish line. The flag is informational: it is shown
/// on the status board but does not change any window rule.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(u8);

pub const FIRST_CHECKPOINT: u8 = 1;
pub const LAST_CHECKPOINT: u8 = 20;

impl Checkpoint {
    pub fn new(id: u8) -> Option<Self> {
        if (FIRST_CHECKPOINT..=LAST_CHECKPOINT).contains(&id) {
            Some(Self(id))
        } else {
            None
        }
    }

    pub fn id(&self) -> u8 {
        self.0
    }

    pub fn is_finish(&self) -> bool {
        self.0 == LAST_CHECKPOINT
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
