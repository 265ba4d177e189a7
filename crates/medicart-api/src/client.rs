//! The REST client.
//!
//! Thin async wrapper over `reqwest`: every method is one request, awaited
//! to completion. Failures are logged and returned; callers decide what to
//! surface. A superseded request's late result simply overwrites newer
//! state (last-write-wins), which the shell accepts.

use reqwest::multipart;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use medicart_core::checkout::OrderPayload;
use medicart_core::models::{AdminProfile, Medicine, Order};

use crate::error::{ApiError, ApiResult};
use crate::types::{
    AdminLoginResponse, AdminRegisterRequest, AnalyticsReport, ActivityEntry,
    CustomerLoginResponse, CustomerProfileResponse, CustomerRegisterRequest, DashboardStats,
    LoginRequest, MedicineQuery, MessageResponse, NewMedicine, OrderUpdate, ProfileUpdate,
    StaffMember,
};

/// Environment variable naming the backend base URL.
pub const API_URL_VAR: &str = "MEDICART_API_URL";

/// Default backend location for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Async client for the Medicart backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from `MEDICART_API_URL`, falling back to localhost.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // Medicine Catalog
    // =========================================================================

    /// List catalog medicines, optionally filtered by search text and category.
    pub async fn list_medicines(&self, query: &MedicineQuery) -> ApiResult<Vec<Medicine>> {
        let mut request = self.http.get(self.url("/api/medicines"));
        if let Some(search) = &query.search {
            request = request.query(&[("search", search)]);
        }
        if let Some(category) = &query.category {
            request = request.query(&[("category", category)]);
        }
        self.expect_json(self.send(request).await?).await
    }

    /// Fetch a single medicine.
    pub async fn get_medicine(&self, id: &str) -> ApiResult<Medicine> {
        let request = self.http.get(self.url(&format!("/api/medicines/{id}")));
        self.expect_json(self.send(request).await?).await
    }

    /// Add a medicine to the catalog.
    pub async fn create_medicine(&self, medicine: &NewMedicine) -> ApiResult<MessageResponse> {
        let request = self.http.post(self.url("/api/medicines")).json(medicine);
        self.expect_json(self.send(request).await?).await
    }

    /// Replace a catalog entry.
    pub async fn update_medicine(&self, id: &str, medicine: &Medicine) -> ApiResult<MessageResponse> {
        let request = self
            .http
            .put(self.url(&format!("/api/medicines/{id}")))
            .json(medicine);
        self.expect_json(self.send(request).await?).await
    }

    /// Delete a catalog entry.
    pub async fn delete_medicine(&self, id: &str) -> ApiResult<MessageResponse> {
        let request = self.http.delete(self.url(&format!("/api/medicines/{id}")));
        self.expect_json(self.send(request).await?).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List every order (admin view).
    pub async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        let request = self.http.get(self.url("/api/orders"));
        self.expect_json(self.send(request).await?).await
    }

    /// List the orders of one customer.
    pub async fn my_orders(&self, email: &str) -> ApiResult<Vec<Order>> {
        let request = self
            .http
            .get(self.url("/api/my-orders"))
            .query(&[("email", email)]);
        self.expect_json(self.send(request).await?).await
    }

    /// Submit an assembled order as the backend's multipart form.
    pub async fn submit_order(&self, payload: &OrderPayload) -> ApiResult<MessageResponse> {
        let form = order_form(payload)?;
        let request = self.http.post(self.url("/api/orders")).multipart(form);
        self.expect_json(self.send(request).await?).await
    }

    /// Update an order's status and/or notes.
    pub async fn update_order(&self, id: &str, update: &OrderUpdate) -> ApiResult<MessageResponse> {
        let request = self
            .http
            .put(self.url(&format!("/api/orders/{id}")))
            .json(update);
        self.expect_json(self.send(request).await?).await
    }

    /// Cancel an order (customer action; backend enforces eligibility).
    pub async fn cancel_order(&self, id: &str) -> ApiResult<MessageResponse> {
        let request = self.http.put(self.url(&format!("/api/orders/{id}/cancel")));
        self.expect_json(self.send(request).await?).await
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Customer login.
    pub async fn customer_login(&self, credentials: &LoginRequest) -> ApiResult<CustomerLoginResponse> {
        let request = self.http.post(self.url("/customer_login")).json(credentials);
        self.expect_json(self.send(request).await?).await
    }

    /// Customer registration.
    pub async fn customer_register(
        &self,
        registration: &CustomerRegisterRequest,
    ) -> ApiResult<MessageResponse> {
        let request = self
            .http
            .post(self.url("/customer_register"))
            .json(registration);
        self.expect_json(self.send(request).await?).await
    }

    /// Admin login.
    pub async fn admin_login(&self, credentials: &LoginRequest) -> ApiResult<AdminLoginResponse> {
        let request = self.http.post(self.url("/admin_login")).json(credentials);
        self.expect_json(self.send(request).await?).await
    }

    /// Admin registration; also used by the staff page to add members.
    pub async fn admin_register(
        &self,
        registration: &AdminRegisterRequest,
    ) -> ApiResult<MessageResponse> {
        let request = self.http.post(self.url("/admin_register")).json(registration);
        self.expect_json(self.send(request).await?).await
    }

    // =========================================================================
    // Profiles & Staff
    // =========================================================================

    /// Fetch the signed-in admin's profile.
    pub async fn admin_profile(&self, token: &str) -> ApiResult<AdminProfile> {
        let request = self.authorized(self.http.get(self.url("/api/admin/profile")), token);
        self.expect_json(self.send(request).await?).await
    }

    /// Update the signed-in admin's profile.
    pub async fn update_admin_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> ApiResult<MessageResponse> {
        let request = self
            .authorized(self.http.put(self.url("/api/admin/profile")), token)
            .json(update);
        self.expect_json(self.send(request).await?).await
    }

    /// Fetch the signed-in customer's profile.
    pub async fn customer_profile(&self, token: &str) -> ApiResult<CustomerProfileResponse> {
        let request = self.authorized(self.http.get(self.url("/api/customer/profile")), token);
        self.expect_json(self.send(request).await?).await
    }

    /// Update the signed-in customer's profile.
    pub async fn update_customer_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> ApiResult<CustomerProfileResponse> {
        let request = self
            .authorized(self.http.put(self.url("/api/customer/profile")), token)
            .json(update);
        self.expect_json(self.send(request).await?).await
    }

    /// List the staff roster.
    pub async fn list_admins(&self, token: &str) -> ApiResult<Vec<StaffMember>> {
        let request = self.authorized(self.http.get(self.url("/api/admins")), token);
        self.expect_json(self.send(request).await?).await
    }

    /// Remove a staff member.
    pub async fn delete_admin(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let request = self.authorized(
            self.http.delete(self.url(&format!("/api/admins/{id}"))),
            token,
        );
        self.expect_json(self.send(request).await?).await
    }

    // =========================================================================
    // Dashboard & Analytics
    // =========================================================================

    /// Dashboard tile aggregates.
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let request = self.http.get(self.url("/api/dashboard/stats"));
        self.expect_json(self.send(request).await?).await
    }

    /// Dashboard activity feed.
    pub async fn dashboard_activity(&self) -> ApiResult<Vec<ActivityEntry>> {
        let request = self.http.get(self.url("/api/dashboard/activity"));
        self.expect_json(self.send(request).await?).await
    }

    /// Analytics report for the charts page.
    pub async fn analytics(&self, token: &str) -> ApiResult<AnalyticsReport> {
        let request = self.authorized(self.http.get(self.url("/api/analytics")), token);
        self.expect_json(self.send(request).await?).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    // The backend reads the raw token from the Authorization header, no
    // Bearer prefix.
    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", token)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        request.send().await.map_err(|err| {
            warn!(error = %err, "transport failure");
            ApiError::Transport(err)
        })
    }

    async fn expect_json<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            debug!(status = status.as_u16(), "request succeeded");
            return Ok(serde_json::from_str(&body)?);
        }

        // Surface the backend's message verbatim when it sent one
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        warn!(status = status.as_u16(), message = %message, "backend rejected request");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

/// Build the multipart form for an order submission.
///
/// Line items travel as one serialized blob under `items`; the prescription
/// image, when present, is attached as a file part.
fn order_form(payload: &OrderPayload) -> ApiResult<multipart::Form> {
    let mut form = multipart::Form::new()
        .text("customer", payload.customer.clone())
        .text("items", payload.items_json.clone())
        .text("total", payload.total.to_string())
        .text("address", payload.address.clone())
        .text("paymentMethod", payload.payment_method.as_str().to_string());

    if let Some(file) = &payload.prescription {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        form = form.part("prescription", part);
    }

    Ok(form)
}
