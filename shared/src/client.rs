//! Client-related types shared with the backend
//!
//! Request shapes for the auth endpoints. Field names follow the
//! backend's wire contract.

use serde::{Deserialize, Serialize};

/// Sign-in request (`POST /users/signIn`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Change-password parameters (`POST /user/changePassword`)
///
/// The backend takes these as query-string parameters with an empty
/// body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordQuery {
    pub username: String,
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
