//! Warning and bonus endpoints

use shared::models::{Bonus, BonusCreate, Complaint, Warning, WarningCreate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /warning`
    pub async fn list_warnings(&self) -> ClientResult<Vec<Warning>> {
        self.get("warning").await
    }

    /// `GET /bonus`
    pub async fn list_bonuses(&self) -> ClientResult<Vec<Bonus>> {
        self.get("bonus").await
    }

    /// Both feeds fetched together and merged, the way the complaint
    /// screen shows them. Fails as a whole if either fetch fails.
    pub async fn list_complaints(&self) -> ClientResult<Vec<Complaint>> {
        let (warnings, bonuses) = tokio::try_join!(self.list_warnings(), self.list_bonuses())?;
        Ok(warnings
            .into_iter()
            .map(Complaint::from)
            .chain(bonuses.into_iter().map(Complaint::from))
            .collect())
    }

    /// `POST /warning`, echoing the created record
    pub async fn create_warning(&self, warning: &WarningCreate) -> ClientResult<Warning> {
        self.post("warning", warning).await
    }

    /// `POST /bonus`, echoing the created record
    pub async fn create_bonus(&self, bonus: &BonusCreate) -> ClientResult<Bonus> {
        self.post("bonus", bonus).await
    }

    /// `DELETE /warning/{id}`
    pub async fn delete_warning(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("warning/{id}")).await
    }

    /// `DELETE /bonus/{id}`
    pub async fn delete_bonus(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("bonus/{id}")).await
    }
}
