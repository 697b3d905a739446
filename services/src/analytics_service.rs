use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use db::models::scheduling::{self, SchedulingStatus};
use sea_orm::{DatabaseConnection, Iterable};
use serde::Serialize;

use crate::{Actor, AppResult};

/// Per-caller overview of their schedulings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulingSummary {
    pub total: u64,
    /// Every status is present, zero when unused.
    pub by_status: BTreeMap<String, u64>,
    pub completed_last_30_days: u64,
    /// Non-terminal sessions dated now or later.
    pub upcoming: u64,
}

pub async fn scheduling_summary(db: &DatabaseConnection, actor: Actor) -> AppResult<SchedulingSummary> {
    let now = Utc::now();
    let window_start = now - Duration::days(30);
    let schedulings = scheduling::Model::list_for_participant(db, actor.id, None).await?;

    let mut by_status: BTreeMap<String, u64> = SchedulingStatus::iter()
        .map(|status| (status.to_string(), 0))
        .collect();
    let mut completed_last_30_days = 0;
    let mut upcoming = 0;

    for item in &schedulings {
        *by_status.entry(item.status.to_string()).or_default() += 1;

        let completed_recently = item.status == SchedulingStatus::Completed
            && item.completed_at.is_some_and(|at| at >= window_start);
        if completed_recently {
            completed_last_30_days += 1;
        }
        if !item.status.is_terminal() && item.date >= now {
            upcoming += 1;
        }
    }

    Ok(SchedulingSummary {
        total: schedulings.len() as u64,
        by_status,
        completed_last_30_days,
        upcoming,
    })
}
