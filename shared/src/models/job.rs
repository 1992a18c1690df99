//! Job model

use serde::{Deserialize, Serialize};

/// Job record (`GET /jobs`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub major: String,
    pub role: String,
}

/// Create job payload (`POST /jobs`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobCreate {
    pub major: String,
    pub role: String,
}

impl JobCreate {
    pub fn new(major: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            role: role.into(),
        }
    }
}
