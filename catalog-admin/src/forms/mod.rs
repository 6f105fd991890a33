//! Controlled form dialogs.
//!
//! Forms hold raw string input exactly as typed. `submit` checks that the
//! required fields are present, parses the numeric ones (no range checks) and
//! emits normalized form data; it never talks to the network.

pub mod collection;
pub mod product;

use thiserror::Error;

pub use collection::{CollectionForm, CollectionFormData};
pub use product::{ProductForm, ProductFormData};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Preencha o campo obrigatório")]
    MissingRequired { field: &'static str },
    #[error("Valor inválido para {field}: \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
}

impl FormError {
    pub fn field(&self) -> &'static str {
        match self {
            FormError::MissingRequired { field } | FormError::InvalidNumber { field, .. } => field,
        }
    }
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingRequired { field })
    } else {
        Ok(())
    }
}
