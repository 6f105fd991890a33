//! Catalog administration core: REST client, session, resource mappers,
//! form validation and the state machines behind the management screens.

pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod http_client;
pub mod screens;
pub mod session;

pub use catalog::CatalogClient;
pub use config::{AdminConfig, ConfigError};
pub use error::{ApiError, Result};
pub use http_client::ApiClient;
pub use screens::{Screen, ScreenManager};
pub use session::Session;
