//! Project model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project record (`GET /projects/all`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub launch: Option<NaiveDate>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Member count, spelled `membersNo` on the wire
    #[serde(rename = "membersNo", default)]
    pub members_no: i64,
}

/// Create project payload (`POST /projects`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    pub launch: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    #[serde(rename = "membersNo")]
    pub members_no: i64,
}

impl ProjectCreate {
    /// New project with no members yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            launch: None,
            deadline: None,
            members_no: 0,
        }
    }

    pub fn with_launch(mut self, launch: NaiveDate) -> Self {
        self.launch = Some(launch);
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_no_rename() {
        let raw = r#"{ "id": 4, "name": "Atlas", "membersNo": 9 }"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.members_no, 9);
        assert!(project.launch.is_none());

        let value = serde_json::to_value(ProjectCreate::new("Atlas")).unwrap();
        assert_eq!(value["membersNo"], 0);
    }
}
