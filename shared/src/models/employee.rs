//! Employee model

use serde::{Deserialize, Serialize};

use super::{Contract, EntityRef, Job, Project};

/// Employment status as the backend stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Hired,
    Fired,
}

/// Employee record (`GET /employees`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub contract: Option<Contract>,
    #[serde(default)]
    pub project: Option<Project>,
}

/// Create employee payload (`POST /employees`)
///
/// Relations are sent as id references. The form copies the chosen
/// contract's yearly salary into `salary`; the tenant defaults to the
/// single tenant the backend is provisioned with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<EntityRef>,
    pub contract: EntityRef,
    pub tenant: EntityRef,
}

/// Default tenant reference for create payloads
pub const DEFAULT_TENANT_ID: i64 = 1;

impl EmployeeCreate {
    pub fn new(name: impl Into<String>, status: EmployeeStatus, contract_id: i64) -> Self {
        Self {
            name: name.into(),
            salary: None,
            status,
            project: None,
            job: None,
            contract: EntityRef::new(contract_id),
            tenant: EntityRef::new(DEFAULT_TENANT_ID),
        }
    }

    pub fn with_project(mut self, project_id: i64) -> Self {
        self.project = Some(EntityRef::new(project_id));
        self
    }

    pub fn with_job(mut self, job_id: i64) -> Self {
        self.job = Some(EntityRef::new(job_id));
        self
    }

    /// Mirror the chosen contract's yearly salary, as the form does.
    pub fn with_contract_salary(mut self, contract: &Contract) -> Self {
        self.salary = Some(contract.salary_per_year);
        self
    }
}
