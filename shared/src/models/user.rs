//! User and tenant models

use serde::{Deserialize, Serialize};

/// User profile record (`GET /users/{username}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(rename = "tenantId", default)]
    pub tenant_id: Option<i64>,
}

/// Tenant record (`GET /tenants/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
