//! Screen-level workflows
//!
//! The operations a screen triggers that span more than one endpoint:
//! signing in, the fan-out reference fetches behind the employee and
//! team forms, and the create-then-assign submissions. Multi-step
//! submissions run through [`Saga`], so a halt reports the exact step
//! that failed instead of a blanket creation error. Partial state is
//! reported, not rolled back; the compensations are there for callers
//! that choose to unwind explicitly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::client::SignInRequest;
use shared::models::{
    BonusCreate, ComplaintKind, Contract, Employee, EntityRef, Job, JobCreate, Project,
    ProjectCreate, Team, WarningCreate,
};

use crate::saga::{Saga, SagaStep};
use crate::{ClientError, ClientResult, HttpClient, Session, SessionHolder};

/// Authenticate against the backend and record the session.
///
/// The holder is only written after the backend accepts the
/// credentials; a rejected sign-in leaves it untouched.
pub async fn sign_in(
    client: &HttpClient,
    sessions: &mut SessionHolder,
    username: &str,
    password: &str,
) -> ClientResult<Session> {
    let request = SignInRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    client.sign_in_request(&request).await?;
    Ok(sessions.sign_in(username).clone())
}

/// Reference data behind the employee create form: the selectable
/// projects, jobs and contracts.
#[derive(Debug, Clone)]
pub struct EmployeeFormRefs {
    pub projects: Vec<Project>,
    pub jobs: Vec<Job>,
    pub contracts: Vec<Contract>,
}

/// Fetch the employee form's reference lists together. Fails as a
/// whole if any fetch fails.
pub async fn employee_form_refs(client: &HttpClient) -> ClientResult<EmployeeFormRefs> {
    let (projects, jobs, contracts) = tokio::try_join!(
        client.list_projects(),
        client.list_jobs(),
        client.list_contracts(),
    )?;
    Ok(EmployeeFormRefs {
        projects,
        jobs,
        contracts,
    })
}

/// Reference data behind the team screen: the teams plus the employee
/// and project pools they draw members from.
#[derive(Debug, Clone)]
pub struct TeamDisplayRefs {
    pub teams: Vec<Team>,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
}

pub async fn team_display_refs(client: &HttpClient) -> ClientResult<TeamDisplayRefs> {
    let (teams, employees, projects) = tokio::try_join!(
        client.list_teams(),
        client.list_employees(),
        client.list_projects(),
    )?;
    Ok(TeamDisplayRefs {
        teams,
        employees,
        projects,
    })
}

/// Record counts shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub projects: usize,
    pub contracts: usize,
    pub jobs: usize,
}

pub async fn dashboard_summary(client: &HttpClient) -> ClientResult<DashboardSummary> {
    let (projects, contracts, jobs) = tokio::try_join!(
        client.list_projects(),
        client.list_contracts(),
        client.list_jobs(),
    )?;
    Ok(DashboardSummary {
        projects: projects.len(),
        contracts: contracts.len(),
        jobs: jobs.len(),
    })
}

struct JobAssignCtx<'a> {
    client: &'a HttpClient,
    draft: JobCreate,
    employee_id: Option<i64>,
    job: Option<Job>,
}

struct CreateJob;

#[async_trait]
impl<'a> SagaStep<JobAssignCtx<'a>> for CreateJob {
    fn name(&self) -> &'static str {
        "create job"
    }

    async fn run(&mut self, ctx: &mut JobAssignCtx<'a>) -> ClientResult<()> {
        let job = ctx.client.create_job(&ctx.draft).await?;
        ctx.job = Some(job);
        Ok(())
    }

    async fn compensate(&mut self, ctx: &mut JobAssignCtx<'a>) -> ClientResult<()> {
        if let Some(job) = &ctx.job {
            ctx.client.delete_job(job.id).await?;
        }
        Ok(())
    }
}

struct AssignJob;

#[async_trait]
impl<'a> SagaStep<JobAssignCtx<'a>> for AssignJob {
    fn name(&self) -> &'static str {
        "assign job"
    }

    async fn run(&mut self, ctx: &mut JobAssignCtx<'a>) -> ClientResult<()> {
        let employee_id = ctx
            .employee_id
            .ok_or_else(|| ClientError::Validation("No employee chosen".to_string()))?;
        let job = ctx
            .job
            .as_ref()
            .ok_or_else(|| ClientError::InvalidResponse("job was not created".to_string()))?;
        ctx.client.assign_job(employee_id, job).await
    }
}

/// Create a job and, when an employee was chosen, assign the created
/// record to them. A halt reports the failed step; the created job is
/// left in place.
pub async fn create_job_and_assign(
    client: &HttpClient,
    draft: JobCreate,
    employee_id: Option<i64>,
) -> ClientResult<Job> {
    let mut saga = Saga::new().step(CreateJob);
    if employee_id.is_some() {
        saga = saga.step(AssignJob);
    }

    let mut ctx = JobAssignCtx {
        client,
        draft,
        employee_id,
        job: None,
    };

    match saga.execute(&mut ctx).await {
        Ok(()) => ctx
            .job
            .ok_or_else(|| ClientError::InvalidResponse("job was not created".to_string())),
        Err(failure) => Err(failure.into_error().into()),
    }
}

struct ProjectAssignCtx<'a> {
    client: &'a HttpClient,
    draft: ProjectCreate,
    employee_id: Option<i64>,
    project: Option<Project>,
}

struct CreateProject;

#[async_trait]
impl<'a> SagaStep<ProjectAssignCtx<'a>> for CreateProject {
    fn name(&self) -> &'static str {
        "create project"
    }

    async fn run(&mut self, ctx: &mut ProjectAssignCtx<'a>) -> ClientResult<()> {
        let project = ctx.client.create_project(&ctx.draft).await?;
        ctx.project = Some(project);
        Ok(())
    }

    async fn compensate(&mut self, ctx: &mut ProjectAssignCtx<'a>) -> ClientResult<()> {
        if let Some(project) = &ctx.project {
            ctx.client.delete_project(project.id).await?;
        }
        Ok(())
    }
}

struct AssignProject;

#[async_trait]
impl<'a> SagaStep<ProjectAssignCtx<'a>> for AssignProject {
    fn name(&self) -> &'static str {
        "assign project"
    }

    async fn run(&mut self, ctx: &mut ProjectAssignCtx<'a>) -> ClientResult<()> {
        let employee_id = ctx
            .employee_id
            .ok_or_else(|| ClientError::Validation("No employee chosen".to_string()))?;
        // The assignment endpoint takes the submitted payload, not the
        // created record; the backend matches it up by name.
        ctx.client.assign_project(employee_id, &ctx.draft).await
    }
}

/// Create a project and, when an employee was chosen, assign it to
/// them.
pub async fn create_project_and_assign(
    client: &HttpClient,
    draft: ProjectCreate,
    employee_id: Option<i64>,
) -> ClientResult<Project> {
    let mut saga = Saga::new().step(CreateProject);
    if employee_id.is_some() {
        saga = saga.step(AssignProject);
    }

    let mut ctx = ProjectAssignCtx {
        client,
        draft,
        employee_id,
        project: None,
    };

    match saga.execute(&mut ctx).await {
        Ok(()) => ctx
            .project
            .ok_or_else(|| ClientError::InvalidResponse("project was not created".to_string())),
        Err(failure) => Err(failure.into_error().into()),
    }
}

struct TeamCreateCtx<'a> {
    client: &'a HttpClient,
    name: String,
    employee_ids: Vec<i64>,
    project_ids: Vec<i64>,
    team: Option<Team>,
}

impl TeamCreateCtx<'_> {
    fn team_id(&self) -> ClientResult<i64> {
        self.team
            .as_ref()
            .map(|t| t.id)
            .ok_or_else(|| ClientError::InvalidResponse("team was not created".to_string()))
    }
}

struct CreateTeam;

#[async_trait]
impl<'a> SagaStep<TeamCreateCtx<'a>> for CreateTeam {
    fn name(&self) -> &'static str {
        "create team"
    }

    async fn run(&mut self, ctx: &mut TeamCreateCtx<'a>) -> ClientResult<()> {
        let team = ctx.client.create_team(&ctx.name).await?;
        ctx.team = Some(team);
        Ok(())
    }

    async fn compensate(&mut self, ctx: &mut TeamCreateCtx<'a>) -> ClientResult<()> {
        if let Some(team) = &ctx.team {
            ctx.client.delete_team(team.id).await?;
        }
        Ok(())
    }
}

struct AddEmployees;

#[async_trait]
impl<'a> SagaStep<TeamCreateCtx<'a>> for AddEmployees {
    fn name(&self) -> &'static str {
        "add employees"
    }

    async fn run(&mut self, ctx: &mut TeamCreateCtx<'a>) -> ClientResult<()> {
        let team_id = ctx.team_id()?;
        ctx.client.add_team_employees(team_id, &ctx.employee_ids).await
    }
}

struct AddProjects;

#[async_trait]
impl<'a> SagaStep<TeamCreateCtx<'a>> for AddProjects {
    fn name(&self) -> &'static str {
        "add projects"
    }

    async fn run(&mut self, ctx: &mut TeamCreateCtx<'a>) -> ClientResult<()> {
        let team_id = ctx.team_id()?;
        ctx.client.add_team_projects(team_id, &ctx.project_ids).await
    }
}

/// Create a team and attach the chosen employees and projects to it.
/// Empty selections skip their step entirely.
pub async fn create_team(
    client: &HttpClient,
    name: &str,
    employee_ids: Vec<i64>,
    project_ids: Vec<i64>,
) -> ClientResult<Team> {
    let mut saga = Saga::new().step(CreateTeam);
    if !employee_ids.is_empty() {
        saga = saga.step(AddEmployees);
    }
    if !project_ids.is_empty() {
        saga = saga.step(AddProjects);
    }

    let mut ctx = TeamCreateCtx {
        client,
        name: name.to_string(),
        employee_ids,
        project_ids,
        team: None,
    };

    match saga.execute(&mut ctx).await {
        Ok(()) => ctx
            .team
            .ok_or_else(|| ClientError::InvalidResponse("team was not created".to_string())),
        Err(failure) => Err(failure.into_error().into()),
    }
}

/// Draft for the complaint form, feeding either the warning or the
/// bonus feed depending on the chosen kind.
#[derive(Debug, Clone)]
pub struct ComplaintDraft {
    pub kind: ComplaintKind,
    pub employee_id: i64,
    pub subject: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub amount: f64,
}

impl Default for ComplaintDraft {
    fn default() -> Self {
        Self {
            kind: ComplaintKind::Warning,
            employee_id: 0,
            subject: String::new(),
            date: Utc::now(),
            reason: String::new(),
            amount: 0.0,
        }
    }
}

impl ComplaintDraft {
    fn warning_payload(&self) -> WarningCreate {
        WarningCreate {
            kind: ComplaintKind::Warning,
            subject: self.subject.clone(),
            date: self.date,
            reason: self.reason.clone(),
            deduction: self.amount,
            employee: EntityRef::new(self.employee_id),
        }
    }

    fn bonus_payload(&self) -> BonusCreate {
        BonusCreate {
            kind: ComplaintKind::Bonus,
            subject: self.subject.clone(),
            date: self.date,
            reason: self.reason.clone(),
            bonus: self.amount,
            employee: EntityRef::new(self.employee_id),
        }
    }
}

struct ComplaintCtx<'a> {
    client: &'a HttpClient,
    draft: ComplaintDraft,
    created: Option<i64>,
}

struct CreateComplaint;

#[async_trait]
impl<'a> SagaStep<ComplaintCtx<'a>> for CreateComplaint {
    fn name(&self) -> &'static str {
        "create complaint"
    }

    async fn run(&mut self, ctx: &mut ComplaintCtx<'a>) -> ClientResult<()> {
        let id = match ctx.draft.kind {
            ComplaintKind::Warning => {
                ctx.client.create_warning(&ctx.draft.warning_payload()).await?.id
            }
            ComplaintKind::Bonus => {
                ctx.client.create_bonus(&ctx.draft.bonus_payload()).await?.id
            }
        };
        ctx.created = Some(id);
        Ok(())
    }

    async fn compensate(&mut self, ctx: &mut ComplaintCtx<'a>) -> ClientResult<()> {
        if let Some(id) = ctx.created {
            match ctx.draft.kind {
                ComplaintKind::Warning => ctx.client.delete_warning(id).await?,
                ComplaintKind::Bonus => ctx.client.delete_bonus(id).await?,
            }
        }
        Ok(())
    }
}

struct AdjustSalary;

#[async_trait]
impl<'a> SagaStep<ComplaintCtx<'a>> for AdjustSalary {
    fn name(&self) -> &'static str {
        "adjust salary"
    }

    async fn run(&mut self, ctx: &mut ComplaintCtx<'a>) -> ClientResult<()> {
        match ctx.draft.kind {
            ComplaintKind::Warning => {
                ctx.client
                    .deduct_salary(ctx.draft.employee_id, ctx.draft.amount)
                    .await
            }
            ComplaintKind::Bonus => {
                ctx.client
                    .grant_bonus(ctx.draft.employee_id, ctx.draft.amount)
                    .await
            }
        }
    }
}

/// File a warning or bonus against an employee and apply the matching
/// salary adjustment. Returns the id of the created record.
pub async fn file_complaint(client: &HttpClient, draft: ComplaintDraft) -> ClientResult<i64> {
    let saga = Saga::new().step(CreateComplaint).step(AdjustSalary);

    let mut ctx = ComplaintCtx {
        client,
        draft,
        created: None,
    };

    match saga.execute(&mut ctx).await {
        Ok(()) => ctx
            .created
            .ok_or_else(|| ClientError::InvalidResponse("complaint was not created".to_string())),
        Err(failure) => Err(failure.into_error().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_draft_builds_matching_payloads() {
        let draft = ComplaintDraft {
            kind: ComplaintKind::Warning,
            employee_id: 7,
            subject: "Late arrivals".to_string(),
            date: Utc::now(),
            reason: "Three late arrivals in one week".to_string(),
            amount: 150.0,
        };

        let warning = draft.warning_payload();
        assert_eq!(warning.deduction, 150.0);
        assert_eq!(warning.employee.id, 7);

        let bonus = draft.bonus_payload();
        assert_eq!(bonus.kind, ComplaintKind::Bonus);
        assert_eq!(bonus.bonus, 150.0);
    }
}
