use super::models::{
    ApiCollection, ApiProduct, ApiUser, CollectionPatch, CollectionPayload, Interaction,
    LoginRequest, LoginResponse, NewUser, ProductPayload, RecommendationQuery, StatsSnapshot,
};
use crate::error::Result;
use crate::http_client::ApiClient;
use crate::session::Session;

/// Catalog-specific wrapper around the generic ApiClient, one method per endpoint.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    // ============================================
    // Auth
    // ============================================

    /// Logs in and keeps the returned token on the shared session.
    pub async fn login(&self, phone_nmr: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            phone_nmr: phone_nmr.to_string(),
        };
        let response: LoginResponse = self.api.post("/auth/login", &request).await?;
        self.session().set_token(Some(response.access_token.clone()));
        log::info!("Logged in, session id {:?}", self.session().session_id());
        Ok(response)
    }

    pub fn logout(&self) {
        self.session().clear();
        log::info!("Logged out");
    }

    // ============================================
    // Products
    // ============================================

    pub async fn list_products(&self) -> Result<Vec<ApiProduct>> {
        self.api.get("/products").await
    }

    pub async fn get_product(&self, id: &str) -> Result<ApiProduct> {
        self.api.get(&format!("/products/{}", id)).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<ApiProduct> {
        self.api.post("/products", payload).await
    }

    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<ApiProduct> {
        self.api.patch(&format!("/products/{}", id), payload).await
    }

    pub async fn remove_product(&self, id: &str) -> Result<()> {
        self.api
            .delete::<serde_json::Value>(&format!("/products/{}", id))
            .await
            .map(|_| ())
    }

    // ============================================
    // Collections
    // ============================================

    pub async fn list_collections(&self) -> Result<Vec<ApiCollection>> {
        self.api.get("/collections").await
    }

    pub async fn get_collection(&self, id: &str) -> Result<ApiCollection> {
        self.api.get(&format!("/collections/{}", id)).await
    }

    pub async fn collection_products(&self, id: &str) -> Result<Vec<ApiProduct>> {
        self.api.get(&format!("/collections/{}/products", id)).await
    }

    pub async fn create_collection(&self, payload: &CollectionPayload) -> Result<ApiCollection> {
        self.api.post("/collections", payload).await
    }

    pub async fn update_collection(&self, id: &str, patch: &CollectionPatch) -> Result<ApiCollection> {
        self.api.patch(&format!("/collections/{}", id), patch).await
    }

    pub async fn remove_collection(&self, id: &str) -> Result<()> {
        self.api
            .delete::<serde_json::Value>(&format!("/collections/{}", id))
            .await
            .map(|_| ())
    }

    // ============================================
    // Users
    // ============================================

    pub async fn list_users(&self) -> Result<Vec<ApiUser>> {
        self.api.get("/users").await
    }

    pub async fn get_user(&self, id: &str) -> Result<ApiUser> {
        self.api.get(&format!("/users/{}", id)).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<ApiUser> {
        self.api.post("/users", user).await
    }

    pub async fn remove_user(&self, id: &str) -> Result<()> {
        self.api
            .delete::<serde_json::Value>(&format!("/users/{}", id))
            .await
            .map(|_| ())
    }

    // ============================================
    // Statistics
    // ============================================

    pub async fn stats(&self) -> Result<StatsSnapshot> {
        self.api.get("/stats").await
    }

    // ============================================
    // Interactions & recommendations
    // ============================================

    pub async fn create_interaction(&self, interaction: &Interaction) -> Result<Interaction> {
        self.api.post("/interactions", interaction).await
    }

    pub async fn get_interaction(
        &self,
        user_id: i64,
        product_id: i64,
        session_id: i64,
    ) -> Result<Interaction> {
        self.api
            .get(&format!("/interactions/{}/{}/{}", user_id, product_id, session_id))
            .await
    }

    pub async fn update_interaction(
        &self,
        user_id: i64,
        product_id: i64,
        session_id: i64,
        changes: &serde_json::Value,
    ) -> Result<Interaction> {
        self.api
            .patch(
                &format!("/interactions/{}/{}/{}", user_id, product_id, session_id),
                changes,
            )
            .await
    }

    /// Recommendation payloads are relayed as-is.
    pub async fn recommendations(&self, product_id: Option<i64>) -> Result<serde_json::Value> {
        let query = RecommendationQuery { product_id };
        self.api.get_with_query("/recommendations", &query).await
    }
}
