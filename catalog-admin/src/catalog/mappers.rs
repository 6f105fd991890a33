//! Backend row <-> view-model translation.

use super::models::{
    ApiCollection, ApiProduct, Collection, ColorVariant, Product, DEFAULT_SIZE,
};

const DEFAULT_HEX: &str = "#000000";

/// Splits a comma-joined size string; empty input yields the placeholder size.
pub fn parse_sizes(raw: Option<&str>) -> Vec<String> {
    let sizes: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if sizes.is_empty() {
        vec![DEFAULT_SIZE.to_string()]
    } else {
        sizes
    }
}

pub fn join_sizes(sizes: &[String]) -> String {
    sizes
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Maps the free-form `color` column into name/hex pairs.
pub fn parse_colors(raw: &serde_json::Value) -> Vec<ColorVariant> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let name = item
                .get("name")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Cor {}", idx + 1));
            let hex = item
                .get("hex")
                .and_then(|v| v.as_str())
                .or_else(|| item.as_str())
                .unwrap_or(DEFAULT_HEX)
                .to_string();
            ColorVariant { name, hex }
        })
        .collect()
}

/// Maps a product row, resolving its collection name from the loaded lookups.
pub fn map_api_product(row: ApiProduct, collections: &[ApiCollection]) -> Product {
    let collection = row
        .collection_id
        .and_then(|id| collections.iter().find(|c| c.id == id))
        .map(|c| c.name.clone());

    Product {
        id: row.id.to_string(),
        colors: parse_colors(&row.color),
        sizes: parse_sizes(row.size.as_deref()),
        name: row.name,
        price: row.price,
        image: row.image,
        category: row.category,
        description: row.description,
        collection,
        collection_id: row.collection_id,
        model: row.model,
    }
}

pub fn map_api_collection(row: ApiCollection) -> Collection {
    Collection {
        id: row.id.to_string(),
        name: row.name,
        quantity: row.quantity.unwrap_or(0),
    }
}
