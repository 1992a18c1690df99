//! Attendance model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Employee, EntityRef};

/// Attendance outcome; the backend names the field `attendance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Attended,
    Absent,
}

/// Attendance record (`GET /attendances/...`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub date: NaiveDateTime,
    #[serde(rename = "attendance")]
    pub status: AttendanceStatus,
    pub employee: Employee,
}

/// Mark attendance payload (`POST /attendances`)
///
/// The id is always serialized, as an explicit null for new records,
/// matching what the backend accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub id: Option<i64>,
    pub date: NaiveDateTime,
    #[serde(rename = "attendance")]
    pub status: AttendanceStatus,
    pub employee: EntityRef,
}

impl AttendanceCreate {
    pub fn new(employee_id: i64, date: NaiveDateTime, status: AttendanceStatus) -> Self {
        Self {
            id: None,
            date,
            status,
            employee: EntityRef::new(employee_id),
        }
    }
}
