//! Contract endpoints

use shared::models::{Contract, ContractQuery};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `GET /contracts`
    pub async fn list_contracts(&self) -> ClientResult<Vec<Contract>> {
        self.get("contracts").await
    }

    /// `POST /contracts?start=..&end=..&duration=..&salaryPerYear=..`
    ///
    /// Contract creation takes query-string parameters instead of a
    /// JSON body; see [`ContractQuery`].
    pub async fn create_contract(&self, contract: &ContractQuery) -> ClientResult<()> {
        self.post_query_unit("contracts", contract).await
    }

    /// `DELETE /contracts/delete/{id}`
    pub async fn delete_contract(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("contracts/delete/{id}")).await
    }
}
