use std::collections::VecDeque;

use super::{Screen, ScreenAction, ScreenRequest};
use crate::catalog::CatalogClient;

pub struct ScreenManager<S: Screen> {
    screen: S,

    client: CatalogClient,

    // Processed strictly in order, one at a time
    pending_actions: VecDeque<S::Action>,

    is_processing: bool,
}

impl<S: Screen> ScreenManager<S> {
    pub fn new(screen: S, client: CatalogClient) -> Self {
        Self {
            screen,
            client,
            pending_actions: VecDeque::new(),
            is_processing: false,
        }
    }

    /// Queues an action without touching the screen.
    pub fn dispatch(&mut self, action: S::Action) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes one action from the queue
    pub async fn update(&mut self) {
        if self.is_processing {
            return;
        }

        if let Some(action) = self.pending_actions.pop_front() {
            self.is_processing = true;
            log::debug!("Processing action: {}", action.description());

            self.handle_action(action).await;

            self.is_processing = false;
        }
    }

    /// Drains the queue, one action at a time.
    pub async fn run_pending(&mut self) {
        while !self.pending_actions.is_empty() {
            self.update().await;
        }
    }

    /// Queues an action and processes everything up to and including it.
    pub async fn perform(&mut self, action: S::Action) {
        self.dispatch(action);
        self.run_pending().await;
    }

    pub fn state(&self) -> &S {
        &self.screen
    }

    /// Form inputs bind to screen state directly.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty() || self.is_processing
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    async fn handle_action(&mut self, action: S::Action) {
        let Some(request) = self.screen.reduce(action) else {
            return;
        };

        log::debug!("Executing request: {:?}", request);
        let outcome = request.execute(&self.client).await;
        self.screen.apply(outcome);
    }
}
