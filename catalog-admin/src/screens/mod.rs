//! Management screens.
//!
//! A screen is a plain state struct driven in three steps:
//! 1. `reduce` takes a user action, updates local state and optionally
//!    returns a request that needs the backend
//! 2. the request is executed against the [`CatalogClient`]
//! 3. `apply` folds the outcome back into local state
//!
//! [`ScreenManager`] chains the three for async callers; the egui front end
//! runs step 2 on a spawned task and calls `apply` on the next frame.

pub mod collections;
pub mod dashboard;
pub mod manager;
pub mod products;

#[cfg(test)]
mod tests;

use crate::catalog::CatalogClient;
use crate::error::ApiError;

pub use collections::{CollectionsAction, CollectionsOutcome, CollectionsRequest, CollectionsScreen};
pub use dashboard::{CategoryBar, DashboardAction, DashboardOutcome, DashboardRequest, DashboardScreen, StatCard};
pub use manager::ScreenManager;
pub use products::{ProductsAction, ProductsOutcome, ProductsRequest, ProductsScreen};

/// `idle -> loading -> (ready | error)`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Transient user-facing message (a toast).
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

pub trait ScreenAction: std::fmt::Debug + Send {
    fn description(&self) -> &'static str;
}

/// Backend work produced by a screen action.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ScreenRequest: std::fmt::Debug + Send + Sized + 'static {
    type Outcome: std::fmt::Debug + Send + 'static;

    async fn execute(self, client: &CatalogClient) -> Self::Outcome;
}

pub trait Screen {
    type Action: ScreenAction;
    type Request: ScreenRequest;

    /// Applies the local part of an action. Returns the request to run, if any.
    fn reduce(&mut self, action: Self::Action) -> Option<Self::Request>;

    /// Folds a request outcome back into the screen.
    fn apply(&mut self, outcome: <Self::Request as ScreenRequest>::Outcome);

    fn notices_mut(&mut self) -> &mut Vec<Notice>;

    fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(self.notices_mut())
    }

    fn dismiss_notice(&mut self, index: usize) {
        let notices = self.notices_mut();
        if index < notices.len() {
            notices.remove(index);
        }
    }
}

/// Case-insensitive substring match.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub(crate) fn message_or(err: &ApiError, fallback: &str) -> String {
    if err.message.trim().is_empty() {
        fallback.to_string()
    } else {
        err.message.clone()
    }
}
