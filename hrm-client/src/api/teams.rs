//! Team endpoints

use shared::models::Team;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /teams/all`
    pub async fn list_teams(&self) -> ClientResult<Vec<Team>> {
        self.get("teams/all").await
    }

    /// `POST /teams/create?name=..`, echoing the created record.
    /// The name travels in the query string, not a body.
    pub async fn create_team(&self, name: &str) -> ClientResult<Team> {
        self.post_query("teams/create", &[("name", name)]).await
    }

    /// `DELETE /teams/delete/{id}`
    pub async fn delete_team(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("teams/delete/{id}")).await
    }

    /// `POST /teams/{id}/addEmployeeList` with a bare list of ids
    pub async fn add_team_employees(&self, team_id: i64, employee_ids: &[i64]) -> ClientResult<()> {
        self.post_unit(&format!("teams/{team_id}/addEmployeeList"), employee_ids)
            .await
    }

    /// `POST /teams/{id}/addProjectList` with a bare list of ids
    pub async fn add_team_projects(&self, team_id: i64, project_ids: &[i64]) -> ClientResult<()> {
        self.post_unit(&format!("teams/{team_id}/addProjectList"), project_ids)
            .await
    }

    /// `POST /teams/{team}/Employee/{employee}` (backend route casing)
    pub async fn add_team_employee(&self, team_id: i64, employee_id: i64) -> ClientResult<()> {
        self.post_empty_unit(&format!("teams/{team_id}/Employee/{employee_id}"))
            .await
    }

    /// `POST /teams/{team}/Project/{project}` (backend route casing)
    pub async fn add_team_project(&self, team_id: i64, project_id: i64) -> ClientResult<()> {
        self.post_empty_unit(&format!("teams/{team_id}/Project/{project_id}"))
            .await
    }

    /// `DELETE /teams/{team}/Employee/{employee}`
    pub async fn remove_team_employee(&self, team_id: i64, employee_id: i64) -> ClientResult<()> {
        self.delete(&format!("teams/{team_id}/Employee/{employee_id}"))
            .await
    }

    /// `DELETE /teams/{team}/Project/{project}`
    pub async fn remove_team_project(&self, team_id: i64, project_id: i64) -> ClientResult<()> {
        self.delete(&format!("teams/{team_id}/Project/{project_id}"))
            .await
    }
}
