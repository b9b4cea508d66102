//! Ideal arrival times and the allowed check-in window.

use crate::models::Participant;
use crate::utils::time::minutes;
use chrono::NaiveDateTime;

/// Expected arrival: the base time offset by one minute per unit of the
/// participant's ID. Participant 0 is the base time itself.
pub fn ideal_time(base: NaiveDateTime, participant: Participant) -> NaiveDateTime {
    base + minutes(participant.id() as i64)
}

/// Range of timestamps accepted for a check-in. `None` on either side
/// means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckWindow {
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

impl CheckWindow {
    pub fn unbounded() -> Self {
        Self {
            earliest: None,
            latest: None,
        }
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        if let Some(earliest) = self.earliest
            && t < earliest
        {
            return false;
        }
        if let Some(latest) = self.latest
            && t > latest
        {
            return false;
        }
        true
    }
}

/// Window for recording a check-in at `now`.
///
/// Real participants get a short grace period before `now` (so an arrival
/// from moments ago can still be typed in) and no upper bound: late
/// arrivals are always recordable. The base anchor is exempt in both
/// directions: it defines the reference point rather than being measured
/// against it.
pub fn allowed_window(
    participant: Participant,
    now: NaiveDateTime,
    grace_minutes: i64,
) -> CheckWindow {
    if participant.is_base_anchor() {
        return CheckWindow::unbounded();
    }

    CheckWindow {
        earliest: Some(now - minutes(grace_minutes)),
        latest: None,
    }
}
