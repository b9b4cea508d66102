//! Per-checkpoint status board: every entrant with their expected and
//! recorded arrival. Pull-based; built fresh from the store on each call.

use crate::core::base_time::{self, BaseTime};
use crate::core::window::ideal_time;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Checkpoint, Participant};
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct StatusRow {
    pub participant: Participant,
    pub ideal: NaiveDateTime,
    pub recorded: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct StatusBoard {
    pub checkpoint: Checkpoint,
    pub base: BaseTime,
    pub rows: Vec<StatusRow>,
    pub checked_count: usize,
}

pub struct StatusLogic;

impl StatusLogic {
    /// Resolve the base time (durable record → override → hour default)
    /// and pair every entrant 1..=100 with their ideal and recorded times.
    pub fn build(
        pool: &mut DbPool,
        checkpoint: Checkpoint,
        base_override: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> AppResult<StatusBoard> {
        let base = base_time::load_and_resolve(&pool.conn, checkpoint, base_override, now)?;

        let times = crate::db::store::list_by_checkpoint(&pool.conn, checkpoint)?;

        let rows: Vec<StatusRow> = Participant::all()
            .map(|p| StatusRow {
                participant: p,
                ideal: ideal_time(base.time, p),
                recorded: times.get(&p.id()).copied(),
            })
            .collect();

        let checked_count = rows.iter().filter(|r| r.recorded.is_some()).count();

        Ok(StatusBoard {
            checkpoint,
            base,
            rows,
            checked_count,
        })
    }
}
