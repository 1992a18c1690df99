//! Job endpoints

use shared::models::{Job, JobCreate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /jobs`
    pub async fn list_jobs(&self) -> ClientResult<Vec<Job>> {
        self.get("jobs").await
    }

    /// `POST /jobs`, echoing the created record
    pub async fn create_job(&self, job: &JobCreate) -> ClientResult<Job> {
        self.post("jobs", job).await
    }

    /// `DELETE /jobs/delete/{id}`
    pub async fn delete_job(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("jobs/delete/{id}")).await
    }
}
