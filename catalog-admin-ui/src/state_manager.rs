use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use catalog_admin::catalog::{CatalogClient, LoginResponse};
use catalog_admin::screens::{LoadStatus, Notice, Screen, ScreenAction, ScreenRequest};

use crate::wasm_utils;

type Outcome<S> = <<S as Screen>::Request as ScreenRequest>::Outcome;
type Slot<T> = Arc<Mutex<Option<T>>>;

/// Drives one screen from the egui frame loop.
///
/// Actions are reduced immediately so inputs stay responsive. Requests run one
/// at a time on a spawned task; the outcome lands in a shared slot and is
/// applied by `update_from_async` on a later frame.
pub struct ScreenStateManager<S: Screen> {
    pub screen: S,
    client: CatalogClient,
    pending_requests: VecDeque<S::Request>,
    in_flight: Option<Slot<Outcome<S>>>,
}

impl<S: Screen> ScreenStateManager<S> {
    pub fn new(screen: S, client: CatalogClient) -> Self {
        Self {
            screen,
            client,
            pending_requests: VecDeque::new(),
            in_flight: None,
        }
    }

    pub fn dispatch(&mut self, action: S::Action) {
        log::debug!("🎯 [STATE] {}", action.description());
        if let Some(request) = self.screen.reduce(action) {
            self.pending_requests.push_back(request);
        }
        self.start_next();
    }

    /// Applies a finished outcome, if any, then starts the next queued request.
    pub fn update_from_async(&mut self) {
        if let Some(slot) = &self.in_flight {
            let finished = match slot.lock() {
                Ok(mut guard) => guard.take(),
                Err(_) => {
                    log::warn!("⚠️ [STATE] Failed to lock outcome slot");
                    None
                }
            };

            if let Some(outcome) = finished {
                log::debug!("🎉 [STATE] Outcome received: {:?}", outcome);
                self.in_flight = None;
                self.screen.apply(outcome);
            }
        }

        self.start_next();
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight.is_some() || !self.pending_requests.is_empty()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.screen.take_notices()
    }

    fn start_next(&mut self) {
        if self.in_flight.is_some() {
            return;
        }
        let Some(request) = self.pending_requests.pop_front() else {
            return;
        };

        log::info!("📡 [STATE] Executing {:?}", request);
        let slot: Slot<Outcome<S>> = Arc::new(Mutex::new(None));
        self.in_flight = Some(slot.clone());

        let client = self.client.clone();
        wasm_utils::spawn_async(async move {
            let outcome = request.execute(&client).await;
            match slot.lock() {
                Ok(mut guard) => *guard = Some(outcome),
                Err(_) => log::error!("❌ [STATE] Failed to store outcome"),
            }
        });
    }
}

/// Screens that fetch on first display.
pub trait Loadable: Screen {
    fn status(&self) -> &LoadStatus;
    fn load_action() -> Self::Action;
}

impl<S: Loadable> ScreenStateManager<S> {
    pub fn ensure_loaded(&mut self) {
        if *self.screen.status() == LoadStatus::Idle {
            self.dispatch(S::load_action());
        }
    }

    pub fn reload(&mut self) {
        if !self.screen.status().is_loading() {
            self.dispatch(S::load_action());
        }
    }
}

mod loadable {
    use super::Loadable;
    use catalog_admin::screens::{
        CollectionsAction, CollectionsScreen, DashboardAction, DashboardScreen, LoadStatus,
        ProductsAction, ProductsScreen,
    };

    impl Loadable for ProductsScreen {
        fn status(&self) -> &LoadStatus {
            &self.status
        }
        fn load_action() -> ProductsAction {
            ProductsAction::Load
        }
    }

    impl Loadable for CollectionsScreen {
        fn status(&self) -> &LoadStatus {
            &self.status
        }
        fn load_action() -> CollectionsAction {
            CollectionsAction::Load
        }
    }

    impl Loadable for DashboardScreen {
        fn status(&self) -> &LoadStatus {
            &self.status
        }
        fn load_action() -> DashboardAction {
            DashboardAction::Load
        }
    }
}

/// Login form state plus the async bridge for the login call.
#[derive(Default)]
pub struct AuthState {
    pub phone: String,
    pub logging_in: bool,
    pub error: Option<String>,
    login_state: Option<Slot<catalog_admin::Result<LoginResponse>>>,
}

impl AuthState {
    pub fn login(&mut self, client: &CatalogClient) {
        if self.logging_in {
            log::warn!("⚠️ [AUTH] Login already in progress - ignoring");
            return;
        }

        let phone = self.phone.trim().to_string();
        if phone.is_empty() {
            self.error = Some("Informe o telefone".to_string());
            return;
        }

        self.logging_in = true;
        self.error = None;

        let slot = Arc::new(Mutex::new(None));
        self.login_state = Some(slot.clone());
        let client = client.clone();

        wasm_utils::spawn_async(async move {
            let result = client.login(&phone).await;
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(result);
            }
        });
    }

    /// Returns true once a login has just succeeded.
    pub fn update_from_async(&mut self) -> bool {
        let Some(slot) = &self.login_state else {
            return false;
        };
        let finished = slot.lock().ok().and_then(|mut guard| guard.take());
        let Some(result) = finished else {
            return false;
        };

        self.login_state = None;
        self.logging_in = false;
        match result {
            Ok(_) => {
                log::info!("✅ [AUTH] Logged in");
                self.phone.clear();
                true
            }
            Err(err) => {
                log::error!("❌ [AUTH] Login failed: {}", err);
                self.error = Some(err.message);
                false
            }
        }
    }
}
