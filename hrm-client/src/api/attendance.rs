//! Attendance endpoints

use chrono::NaiveDate;
use shared::models::{Attendance, AttendanceCreate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `POST /attendances`
    pub async fn mark_attendance(&self, attendance: &AttendanceCreate) -> ClientResult<()> {
        self.post_unit("attendances", attendance).await
    }

    /// `GET /attendances/{employeeId}/{date}`
    pub async fn attendance_for_employee(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> ClientResult<Vec<Attendance>> {
        self.get(&format!("attendances/{employee_id}/{date}")).await
    }

    /// `GET /attendances/date/{date}`
    pub async fn attendance_for_date(&self, date: NaiveDate) -> ClientResult<Vec<Attendance>> {
        self.get(&format!("attendances/date/{date}")).await
    }
}
