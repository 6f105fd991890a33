use super::{require, FormError};
use crate::catalog::mappers::{join_sizes, parse_sizes};
use crate::catalog::models::{ColorVariant, Product, ProductPayload, MANUAL_MODEL};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    /// Set when the form was seeded from an existing product.
    pub id: Option<String>,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub colors: Vec<ColorVariant>,
    /// Comma-separated, e.g. "P, M, G".
    pub sizes: String,
    pub description: String,
    pub collection_id: Option<i64>,
    pub model: String,
}

/// Normalized output of a valid product form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormData {
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub colors: Vec<ColorVariant>,
    pub sizes: Vec<String>,
    pub description: String,
    pub collection_id: Option<i64>,
    pub model: Option<String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            category: product.category.clone(),
            colors: product.colors.clone(),
            sizes: product.sizes.join(", "),
            description: product.description.clone(),
            collection_id: product.collection_id,
            model: product.model.clone().unwrap_or_default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn add_color(&mut self) {
        self.colors.push(ColorVariant {
            name: String::new(),
            hex: "#000000".to_string(),
        });
    }

    pub fn remove_color(&mut self, index: usize) {
        if index < self.colors.len() {
            self.colors.remove(index);
        }
    }

    pub fn submit(&self) -> Result<ProductFormData, FormError> {
        require(&self.name, "name")?;
        require(&self.price, "price")?;
        require(&self.category, "category")?;

        // Accept the Brazilian decimal comma as well as a dot.
        let raw_price = self.price.trim().replace(',', ".");
        let price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field: "price",
                value: self.price.clone(),
            })?;

        let colors = self
            .colors
            .iter()
            .filter(|c| !c.name.trim().is_empty() || !c.hex.trim().is_empty())
            .map(|c| ColorVariant {
                name: c.name.trim().to_string(),
                hex: c.hex.trim().to_string(),
            })
            .collect();

        let model = self.model.trim();

        Ok(ProductFormData {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            price,
            image: self.image.trim().to_string(),
            category: self.category.trim().to_string(),
            colors,
            sizes: parse_sizes(Some(&self.sizes)),
            description: self.description.trim().to_string(),
            collection_id: self.collection_id,
            model: (!model.is_empty()).then(|| model.to_string()),
        })
    }
}

impl ProductFormData {
    pub fn to_payload(&self, collection_id: i64) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            price: self.price,
            color: self.colors.clone(),
            category: self.category.clone(),
            size: join_sizes(&self.sizes),
            description: self.description.clone(),
            image: self.image.clone(),
            model: self.model.clone().unwrap_or_else(|| MANUAL_MODEL.to_string()),
            collection_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::DEFAULT_SIZE;

    fn filled() -> ProductForm {
        ProductForm {
            name: "Tiara Pérola".to_string(),
            price: "34,50".to_string(),
            category: "Tiaras".to_string(),
            sizes: "M, L, XL".to_string(),
            collection_id: Some(2),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let form = ProductForm { name: "  ".to_string(), ..filled() };
        assert_eq!(form.submit(), Err(FormError::MissingRequired { field: "name" }));
    }

    #[test]
    fn test_price_parsing() {
        let data = filled().submit().unwrap();
        assert_eq!(data.price, 34.5);

        let form = ProductForm { price: "abc".to_string(), ..filled() };
        assert!(matches!(form.submit(), Err(FormError::InvalidNumber { field: "price", .. })));

        // No range validation.
        let form = ProductForm { price: "-3".to_string(), ..filled() };
        assert_eq!(form.submit().unwrap().price, -3.0);
    }

    #[test]
    fn test_payload_defaults() {
        let data = ProductForm { sizes: String::new(), ..filled() }.submit().unwrap();
        assert_eq!(data.sizes, vec![DEFAULT_SIZE]);

        let payload = data.to_payload(2);
        assert_eq!(payload.model, MANUAL_MODEL);
        assert_eq!(payload.size, DEFAULT_SIZE);
        assert_eq!(payload.collection_id, 2);
    }

    #[test]
    fn test_payload_joins_sizes() {
        let payload = filled().submit().unwrap().to_payload(2);
        assert_eq!(payload.size, "M,L,XL");
    }

    #[test]
    fn test_seed_and_reset() {
        let product = Product {
            id: "8".into(),
            name: "Laço".into(),
            price: 12.0,
            image: "img.png".into(),
            category: "Laços".into(),
            colors: vec![ColorVariant { name: "Azul".into(), hex: "#0000ff".into() }],
            sizes: vec!["P".into(), "M".into()],
            description: String::new(),
            collection: Some("Verão".into()),
            collection_id: Some(1),
            model: None,
        };

        let mut form = ProductForm::seeded(&product);
        assert!(form.is_editing());
        assert_eq!(form.sizes, "P, M");
        assert_eq!(form.price, "12");

        form.reset();
        assert_eq!(form, ProductForm::default());
    }

    #[test]
    fn test_blank_color_rows_are_dropped() {
        let mut form = filled();
        form.add_color();
        form.colors[0].hex = String::new();
        form.add_color();
        form.colors[1].name = "Rosa".into();
        let data = form.submit().unwrap();
        assert_eq!(data.colors.len(), 1);
        assert_eq!(data.colors[0].name, "Rosa");
    }
}
