//! Project endpoints

use shared::models::{Project, ProjectCreate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /projects/all`
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.get("projects/all").await
    }

    /// `POST /projects`, echoing the created record
    pub async fn create_project(&self, project: &ProjectCreate) -> ClientResult<Project> {
        self.post("projects", project).await
    }

    /// `DELETE /projects/Delete/{id}` (backend route casing)
    pub async fn delete_project(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("projects/Delete/{id}")).await
    }
}
