//! Warning and bonus models
//!
//! The backend keeps warnings and bonuses as two separate feeds with
//! differently named amount fields; the complaint screen renders them
//! merged, so a unified `Complaint` view record is provided alongside
//! the wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Employee, EntityRef};

/// Which feed a complaint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintKind {
    Warning,
    Bonus,
}

/// Warning record (`GET /warning`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub id: i64,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub deduction: f64,
    #[serde(default)]
    pub employee: Option<Employee>,
}

/// Bonus record (`GET /bonus`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    pub id: i64,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub bonus: f64,
    #[serde(default)]
    pub employee: Option<Employee>,
}

/// Create warning payload (`POST /warning`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCreate {
    #[serde(rename = "type")]
    pub kind: ComplaintKind,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub deduction: f64,
    pub employee: EntityRef,
}

/// Create bonus payload (`POST /bonus`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCreate {
    #[serde(rename = "type")]
    pub kind: ComplaintKind,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub bonus: f64,
    pub employee: EntityRef,
}

/// Merged view over both feeds, as the complaint screen shows them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: i64,
    pub kind: ComplaintKind,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub amount: f64,
    pub employee: Option<Employee>,
}

impl From<Warning> for Complaint {
    fn from(warning: Warning) -> Self {
        Self {
            id: warning.id,
            kind: ComplaintKind::Warning,
            subject: warning.subject,
            date: warning.date,
            reason: warning.reason,
            amount: warning.deduction,
            employee: warning.employee,
        }
    }
}

impl From<Bonus> for Complaint {
    fn from(bonus: Bonus) -> Self {
        Self {
            id: bonus.id,
            kind: ComplaintKind::Bonus,
            subject: bonus.subject,
            date: bonus.date,
            reason: bonus.reason,
            amount: bonus.bonus,
            employee: bonus.employee,
        }
    }
}
