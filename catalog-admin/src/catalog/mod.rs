pub mod client;
pub mod mappers;
pub mod models;

pub use client::CatalogClient;
pub use mappers::{join_sizes, map_api_collection, map_api_product, parse_colors, parse_sizes};
pub use models::{
    ApiCollection, ApiProduct, ApiUser, Collection, CollectionPatch, CollectionPayload,
    ColorVariant, Interaction, LoginResponse, NewUser, Product, ProductPayload,
    ProductsByCategory, StatsSnapshot, DEFAULT_SIZE, MANUAL_MODEL,
};
