use serde::{Deserialize, Serialize};

/// Placeholder size shown when the backend has no sizes for a product.
pub const DEFAULT_SIZE: &str = "Único";

/// Model tag sent for products created from the console.
pub const MANUAL_MODEL: &str = "manual";

// ===== BACKEND ROWS =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    /// Free-form JSON; usually an array of `{name, hex}` objects.
    #[serde(default)]
    pub color: serde_json::Value,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub collection_id: Option<i64>,
    #[serde(default)]
    pub disponible: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiCollection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsByCategory {
    pub category: String,
    pub product_quantity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatsSnapshot {
    pub products_count: u64,
    pub collections_count: u64,
    pub categories_count: u64,
    #[serde(default)]
    pub products_by_category: Vec<ProductsByCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiUser {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_nmr: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub phone_nmr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone_nmr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// User interaction with a product within a browsing session.
/// Kept as raw JSON beyond the identifying keys; the console only relays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub user_id: i64,
    pub product_id: i64,
    pub session_id: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
}

// ===== VIEW-MODELS =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorVariant {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub colors: Vec<ColorVariant>,
    pub sizes: Vec<String>,
    pub description: String,
    /// Name of the parent collection, when it could be resolved.
    pub collection: Option<String>,
    pub collection_id: Option<i64>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub quantity: i64,
}

// ===== OUTBOUND PAYLOADS =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub color: Vec<ColorVariant>,
    pub category: String,
    /// Comma-joined size list.
    pub size: String,
    pub description: String,
    pub image: String,
    pub model: String,
    pub collection_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionPayload {
    pub name: String,
    pub quantity: i64,
}

/// Partial collection update; unset fields are left alone by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CollectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}
