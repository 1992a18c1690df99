//! Employee endpoints

use serde_json::json;
use shared::models::{Employee, EmployeeCreate, Job, ProjectCreate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /employees`
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("employees").await
    }

    /// `GET /employees/{id}`
    pub async fn fetch_employee(&self, id: i64) -> ClientResult<Employee> {
        self.get(&format!("employees/{id}")).await
    }

    /// `GET /employees/name/{name}`
    pub async fn search_employees_by_name(&self, name: &str) -> ClientResult<Vec<Employee>> {
        self.get(&format!("employees/name/{name}")).await
    }

    /// `POST /employees`
    pub async fn create_employee(&self, employee: &EmployeeCreate) -> ClientResult<()> {
        self.post_unit("employees", employee).await
    }

    /// `POST /employees/{id}/deduct` — lowers the employee's salary
    pub async fn deduct_salary(&self, id: i64, amount: f64) -> ClientResult<()> {
        self.post_unit(&format!("employees/{id}/deduct"), &json!({ "deduction": amount }))
            .await
    }

    /// `POST /employees/{id}/bonus` — raises the employee's salary
    pub async fn grant_bonus(&self, id: i64, amount: f64) -> ClientResult<()> {
        self.post_unit(&format!("employees/{id}/bonus"), &json!({ "bonus": amount }))
            .await
    }

    /// `POST /employees/job/{id}` — assigns an existing job record
    pub async fn assign_job(&self, employee_id: i64, job: &Job) -> ClientResult<()> {
        self.post_unit(&format!("employees/job/{employee_id}"), job)
            .await
    }

    /// `POST /employees/project/{id}`
    pub async fn assign_project(
        &self,
        employee_id: i64,
        project: &ProjectCreate,
    ) -> ClientResult<()> {
        self.post_unit(&format!("employees/project/{employee_id}"), project)
            .await
    }
}
