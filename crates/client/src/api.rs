//! Admin endpoint calls.

use shared_types::{
    AppError, Contract, Job, ListQuery, LoginRequest, LoginResponse, Payment, PlatformStats,
    Rating, UserAccount, UserQuery, VerifyKycRequest,
};

use crate::http::ApiClient;

fn user_path(id: &str) -> String {
    format!("/admin/users/{}", urlencoding::encode(id))
}

impl ApiClient {
    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/auth/login", &body).await?;
        tracing::info!(email = %response.user.email, "Admin signed in");
        Ok(response)
    }

    /// `GET /admin/users` filtered by role, search text and KYC status.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserAccount>, AppError> {
        self.get("/admin/users", query).await
    }

    /// `GET /admin/users/{id}`
    pub async fn get_user(&self, id: &str) -> Result<UserAccount, AppError> {
        self.get(&user_path(id), &()).await
    }

    /// `POST /admin/users/{id}/verify`, returning the updated account.
    pub async fn verify_kyc(
        &self,
        id: &str,
        request: &VerifyKycRequest,
    ) -> Result<UserAccount, AppError> {
        let updated: UserAccount = self
            .post(&format!("{}/verify", user_path(id)), request)
            .await?;
        tracing::info!(user_id = id, status = %request.status, "KYC decision recorded");
        Ok(updated)
    }

    pub async fn list_jobs(&self, query: &ListQuery) -> Result<Vec<Job>, AppError> {
        self.get("/admin/jobs", query).await
    }

    pub async fn list_contracts(&self, query: &ListQuery) -> Result<Vec<Contract>, AppError> {
        self.get("/admin/contracts", query).await
    }

    pub async fn list_payments(&self, query: &ListQuery) -> Result<Vec<Payment>, AppError> {
        self.get("/admin/payments", query).await
    }

    pub async fn list_ratings(&self, query: &ListQuery) -> Result<Vec<Rating>, AppError> {
        self.get("/admin/ratings", query).await
    }

    /// `GET /admin/stats` for the dashboard cards.
    pub async fn stats(&self) -> Result<PlatformStats, AppError> {
        self.get("/admin/stats", &()).await
    }
}
