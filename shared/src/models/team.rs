//! Team model

use serde::{Deserialize, Serialize};

use super::{Employee, Project};

/// Team record (`GET /teams/all`), with its member and project lists
/// embedded the way the backend returns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
}
