//! User, auth and tenant endpoints

use shared::client::{ChangePasswordQuery, SignInRequest};
use shared::models::{Tenant, User};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `POST /users/signIn`. Only the status matters; any non-2xx is
    /// invalid credentials as far as the login screen is concerned.
    pub async fn sign_in_request(&self, request: &SignInRequest) -> ClientResult<()> {
        self.post_unit("users/signIn", request).await
    }

    /// `GET /users/{username}`
    pub async fn fetch_user(&self, username: &str) -> ClientResult<User> {
        self.get(&format!("users/{username}")).await
    }

    /// `POST /user/update` with the full profile record
    pub async fn update_user(&self, user: &User) -> ClientResult<()> {
        self.post_unit("user/update", user).await
    }

    /// `POST /user/changePassword?username=..&oldPassword=..&newPassword=..`
    pub async fn change_password(&self, query: &ChangePasswordQuery) -> ClientResult<()> {
        self.post_query_unit("user/changePassword", query).await
    }

    /// `GET /tenants/{id}`
    pub async fn fetch_tenant(&self, id: i64) -> ClientResult<Tenant> {
        self.get(&format!("tenants/{id}")).await
    }
}
