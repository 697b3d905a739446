//! Scheduling lifecycle.
//!
//! Every status change is written together with its `scheduling_history` row in a single
//! transaction. Records are only visible to their two participants; anyone else gets
//! `NotFound`, never `Forbidden`.

use chrono::{DateTime, Utc};
use db::models::{
    scheduling::{self, SchedulingStatus, SchedulingType},
    scheduling_history::{self, NewEntry},
    user::{self, Role},
    workout,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use crate::{Actor, AppError, AppResult};

const ALREADY_CANCELED: &str = "Scheduling is already canceled";

#[derive(Debug, Clone)]
pub struct NewScheduling {
    pub personal_id: Uuid,
    pub student_id: Uuid,
    pub workout_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub scheduling_type: SchedulingType,
}

#[derive(Debug, Clone, Default)]
pub struct SchedulingUpdate {
    pub date: Option<DateTime<Utc>>,
    pub scheduling_type: Option<SchedulingType>,
    pub status: Option<SchedulingStatus>,
    pub workout_id: Option<Uuid>,
}

pub async fn list(
    db: &DatabaseConnection,
    actor: Actor,
    status: Option<SchedulingStatus>,
) -> AppResult<Vec<scheduling::Model>> {
    Ok(scheduling::Model::list_for_participant(db, actor.id, status).await?)
}

pub async fn get(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<scheduling::Model> {
    find_visible(db, actor, id).await
}

/// Books a new session in `PENDING_CONFIRMATION`.
///
/// # Errors
///
/// * `Forbidden` if the caller is neither participant nor an admin.
/// * `BadRequest` if the date is in the past, or if an id does not resolve to a user of the
///   expected role or to an existing workout.
pub async fn create(
    db: &DatabaseConnection,
    actor: Actor,
    input: NewScheduling,
) -> AppResult<scheduling::Model> {
    let now = Utc::now();

    if !actor.is_admin() && actor.id != input.personal_id && actor.id != input.student_id {
        return Err(AppError::Forbidden(
            "You can only book sessions you take part in".into(),
        ));
    }
    if input.date < now {
        return Err(AppError::BadRequest("Cannot schedule a session in the past".into()));
    }

    expect_role(db, input.personal_id, Role::Personal, "personal_id").await?;
    expect_role(db, input.student_id, Role::Student, "student_id").await?;
    if let Some(workout_id) = input.workout_id {
        expect_workout(db, workout_id, input.personal_id).await?;
    }

    let txn = db.begin().await?;

    let created = scheduling::ActiveModel {
        id: Set(Uuid::new_v4()),
        personal_id: Set(input.personal_id),
        student_id: Set(input.student_id),
        workout_id: Set(input.workout_id),
        date: Set(input.date),
        scheduling_type: Set(input.scheduling_type),
        status: Set(SchedulingStatus::PendingConfirmation),
        started_at: Set(None),
        completed_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    record(&txn, &created, actor, now, None, None).await?;
    txn.commit().await?;

    info!(
        scheduling_id = %created.id,
        personal_id = %created.personal_id,
        student_id = %created.student_id,
        "scheduling created"
    );
    Ok(created)
}

/// Edits date, type, workout and optionally status.
///
/// A date change without an explicit status moves the session to `RESCHEDULED`. Canceling
/// goes through [`cancel`] only, since it needs a reason.
pub async fn update(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    changes: SchedulingUpdate,
) -> AppResult<scheduling::Model> {
    let now = Utc::now();
    let txn = db.begin().await?;
    let current = find_visible(&txn, actor, id).await?;

    if changes.status == Some(SchedulingStatus::Canceled) {
        return Err(AppError::BadRequest(
            "Use DELETE /api/schedulings/{id} with a reason to cancel a session".into(),
        ));
    }
    if current.status.is_terminal() {
        return Err(AppError::Conflict(format!(
            "Cannot modify a scheduling that is {}",
            current.status
        )));
    }
    if let Some(date) = changes.date {
        if date < now {
            return Err(AppError::BadRequest("cannot reschedule to the past".into()));
        }
    }
    if let Some(workout_id) = changes.workout_id {
        expect_workout(&txn, workout_id, current.personal_id).await?;
    }

    let date_changed = changes.date.is_some_and(|date| date != current.date);
    let requested = changes
        .status
        .or(date_changed.then_some(SchedulingStatus::Rescheduled));
    let next_status = match requested {
        Some(next) if next != current.status || date_changed => {
            ensure_transition(current.status, next)?;
            Some(next)
        }
        _ => None,
    };

    let previous = current.status;
    let mut active: scheduling::ActiveModel = current.into();
    if let Some(date) = changes.date {
        active.date = Set(date);
    }
    if let Some(kind) = changes.scheduling_type {
        active.scheduling_type = Set(kind);
    }
    if let Some(workout_id) = changes.workout_id {
        active.workout_id = Set(Some(workout_id));
    }
    if let Some(next) = next_status {
        apply_status(&mut active, next, now);
    }
    active.updated_at = Set(now);
    let updated = write_if_status(&txn, id, previous, active).await?;

    if next_status.is_some() {
        record(&txn, &updated, actor, now, None, None).await?;
    }
    txn.commit().await?;

    info!(scheduling_id = %updated.id, status = %updated.status, "scheduling updated");
    Ok(updated)
}

pub async fn confirm(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<scheduling::Model> {
    transition(db, actor, id, SchedulingStatus::Scheduled, None, None).await
}

pub async fn start(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<scheduling::Model> {
    transition(db, actor, id, SchedulingStatus::InProgress, None, None).await
}

pub async fn complete(db: &DatabaseConnection, actor: Actor, id: Uuid) -> AppResult<scheduling::Model> {
    transition(db, actor, id, SchedulingStatus::Completed, None, None).await
}

pub async fn mark_missed(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    notes: Option<String>,
) -> AppResult<scheduling::Model> {
    transition(db, actor, id, SchedulingStatus::Missed, None, notes).await
}

/// Cancels a session. The reason is kept on the history row, the record itself stays.
pub async fn cancel(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    reason: String,
) -> AppResult<scheduling::Model> {
    transition(db, actor, id, SchedulingStatus::Canceled, Some(reason), None).await
}

pub async fn history(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
) -> AppResult<Vec<scheduling_history::Model>> {
    let scheduling = find_visible(db, actor, id).await?;
    Ok(scheduling_history::Model::find_for_scheduling(db, scheduling.id).await?)
}

async fn transition(
    db: &DatabaseConnection,
    actor: Actor,
    id: Uuid,
    next: SchedulingStatus,
    reason: Option<String>,
    notes: Option<String>,
) -> AppResult<scheduling::Model> {
    let now = Utc::now();
    let txn = db.begin().await?;
    let current = find_visible(&txn, actor, id).await?;

    if current.status == next && next == SchedulingStatus::Canceled {
        return Err(AppError::Conflict(ALREADY_CANCELED.into()));
    }
    ensure_transition(current.status, next)?;

    let previous = current.status;
    let mut active: scheduling::ActiveModel = current.into();
    apply_status(&mut active, next, now);
    active.updated_at = Set(now);
    let updated = write_if_status(&txn, id, previous, active).await?;

    record(&txn, &updated, actor, now, reason, notes).await?;
    txn.commit().await?;

    info!(
        scheduling_id = %updated.id,
        from = %previous,
        to = %next,
        actor = %actor.id,
        "scheduling status changed"
    );
    Ok(updated)
}

/// Writes `changes` only while the row still has status `expected`.
///
/// A concurrent writer that got there first leaves zero affected rows, which surfaces as
/// `Conflict` and rolls the caller's transaction back.
async fn write_if_status<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    expected: SchedulingStatus,
    changes: scheduling::ActiveModel,
) -> AppResult<scheduling::Model> {
    let result = scheduling::Entity::update_many()
        .set(changes)
        .filter(scheduling::Column::Id.eq(id))
        .filter(scheduling::Column::Status.eq(expected))
        .exec(db)
        .await?;

    if result.rows_affected != 1 {
        let message = match scheduling::Entity::find_by_id(id).one(db).await? {
            Some(found) if found.status == SchedulingStatus::Canceled => ALREADY_CANCELED.into(),
            _ => "Scheduling was changed by another request, try again".into(),
        };
        return Err(AppError::Conflict(message));
    }

    scheduling::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Scheduling"))
}

fn ensure_transition(from: SchedulingStatus, to: SchedulingStatus) -> AppResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(AppError::Conflict(format!(
            "Cannot change status from {from} to {to}"
        )))
    }
}

fn apply_status(active: &mut scheduling::ActiveModel, next: SchedulingStatus, now: DateTime<Utc>) {
    active.status = Set(next);
    match next {
        SchedulingStatus::InProgress => active.started_at = Set(Some(now)),
        SchedulingStatus::Completed => active.completed_at = Set(Some(now)),
        _ => {}
    }
}

async fn record<C: ConnectionTrait>(
    db: &C,
    scheduling: &scheduling::Model,
    actor: Actor,
    now: DateTime<Utc>,
    reason: Option<String>,
    notes: Option<String>,
) -> AppResult<()> {
    scheduling_history::Model::record(
        db,
        NewEntry {
            scheduling_id: scheduling.id,
            user_id: actor.id,
            changed_by: actor.role,
            status: scheduling.status,
            changed_at: now,
            reason,
            notes,
        },
    )
    .await?;
    Ok(())
}

async fn find_visible<C: ConnectionTrait>(db: &C, actor: Actor, id: Uuid) -> AppResult<scheduling::Model> {
    scheduling::Model::find_for_participant(db, id, actor.id)
        .await?
        .ok_or_else(|| AppError::not_found("Scheduling"))
}

async fn expect_role(db: &DatabaseConnection, id: Uuid, role: Role, field: &str) -> AppResult<()> {
    match user::Entity::find_by_id(id).one(db).await? {
        Some(found) if found.role == role => Ok(()),
        _ => Err(AppError::BadRequest(format!(
            "{field} must refer to a {} user",
            role.to_string().to_lowercase()
        ))),
    }
}

/// The workout must exist and be either a shared template or one of the trainer's own.
async fn expect_workout<C: ConnectionTrait>(db: &C, id: Uuid, personal_id: Uuid) -> AppResult<()> {
    match workout::Entity::find_by_id(id).one(db).await? {
        Some(found) if found.is_visible_to(personal_id) => Ok(()),
        _ => Err(AppError::BadRequest(
            "workout_id must refer to a template or one of the trainer's workouts".into(),
        )),
    }
}
