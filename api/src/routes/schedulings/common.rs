use chrono::{DateTime, Utc};
use db::models::{
    scheduling::{self, SchedulingStatus, SchedulingType},
    scheduling_history,
    user::Role,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct SchedulingResponse {
    pub id: Uuid,
    pub personal_id: Uuid,
    pub student_id: Uuid,
    pub workout_id: Option<Uuid>,
    pub date: String,
    #[serde(rename = "type")]
    pub scheduling_type: SchedulingType,
    pub status: SchedulingStatus,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<scheduling::Model> for SchedulingResponse {
    fn from(s: scheduling::Model) -> Self {
        Self {
            id: s.id,
            personal_id: s.personal_id,
            student_id: s.student_id,
            workout_id: s.workout_id,
            date: s.date.to_rfc3339(),
            scheduling_type: s.scheduling_type,
            status: s.status,
            started_at: s.started_at.map(|t| t.to_rfc3339()),
            completed_at: s.completed_at.map(|t| t.to_rfc3339()),
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub id: Uuid,
    pub scheduling_id: Uuid,
    pub user_id: Uuid,
    pub status: SchedulingStatus,
    pub changed_at: String,
    pub changed_by: Role,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

impl From<scheduling_history::Model> for HistoryEntryResponse {
    fn from(h: scheduling_history::Model) -> Self {
        Self {
            id: h.id,
            scheduling_id: h.scheduling_id,
            user_id: h.user_id,
            status: h.status,
            changed_at: h.changed_at.to_rfc3339(),
            changed_by: h.changed_by,
            reason: h.reason,
            notes: h.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListSchedulingsQuery {
    pub status: Option<SchedulingStatus>,
}

/// New sessions always start in `PENDING_CONFIRMATION`; a `status` in the body is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSchedulingRequest {
    pub personal_id: Uuid,
    pub student_id: Uuid,
    pub workout_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub scheduling_type: SchedulingType,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSchedulingRequest {
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub scheduling_type: Option<SchedulingType>,
    pub status: Option<SchedulingStatus>,
    pub workout_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CancelSchedulingRequest {
    #[validate(length(min = 5, max = 500, message = "Reason must be between 5 and 500 characters"))]
    pub reason: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct MissedRequest {
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}
