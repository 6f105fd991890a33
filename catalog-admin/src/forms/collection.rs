use super::{require, FormError};
use crate::catalog::models::{Collection, CollectionPatch, CollectionPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionForm {
    pub id: Option<String>,
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionFormData {
    pub id: Option<String>,
    pub name: String,
    pub quantity: i64,
}

impl CollectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(collection: &Collection) -> Self {
        Self {
            id: Some(collection.id.clone()),
            name: collection.name.clone(),
            quantity: collection.quantity.to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn submit(&self) -> Result<CollectionFormData, FormError> {
        require(&self.name, "name")?;
        require(&self.quantity, "quantity")?;

        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidNumber {
                field: "quantity",
                value: self.quantity.clone(),
            })?;

        Ok(CollectionFormData {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            quantity,
        })
    }
}

impl CollectionFormData {
    pub fn to_payload(&self) -> CollectionPayload {
        CollectionPayload {
            name: self.name.clone(),
            quantity: self.quantity,
        }
    }

    pub fn to_patch(&self) -> CollectionPatch {
        CollectionPatch {
            name: Some(self.name.clone()),
            quantity: Some(self.quantity),
        }
    }
}
