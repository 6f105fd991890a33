use catalog_admin::catalog::CatalogClient;
use catalog_admin::screens::{CollectionsScreen, DashboardScreen, ProductsScreen};
use catalog_admin::AdminConfig;
use eframe::egui;

use crate::state_manager::{AuthState, ScreenStateManager};
use crate::toasts::Toasts;
use crate::views;
use crate::wasm_utils;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Products,
    Collections,
}

/// Catalog administration console
pub struct CatalogAdminApp {
    client: CatalogClient,
    auth: AuthState,
    dashboard: ScreenStateManager<DashboardScreen>,
    products: ScreenStateManager<ProductsScreen>,
    collections: ScreenStateManager<CollectionsScreen>,
    toasts: Toasts,
    page: Page,
}

impl CatalogAdminApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AdminConfig) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log(&format!("🚀 Starting catalog admin against {}", config.api.base_url));

        // Every screen shares one client and therefore one session.
        let client = config.client();

        Self {
            auth: AuthState::default(),
            dashboard: ScreenStateManager::new(DashboardScreen::new(), client.clone()),
            products: ScreenStateManager::new(ProductsScreen::new(), client.clone()),
            collections: ScreenStateManager::new(CollectionsScreen::new(), client.clone()),
            toasts: Toasts::new(config.ui.notice_seconds),
            client,
            page: Page::Dashboard,
        }
    }

    fn current_is_waiting(&self) -> bool {
        match self.page {
            Page::Dashboard => self.dashboard.is_waiting(),
            Page::Products => self.products.is_waiting(),
            Page::Collections => self.collections.is_waiting(),
        }
    }

    fn reload_current(&mut self) {
        match self.page {
            Page::Dashboard => self.dashboard.reload(),
            Page::Products => self.products.reload(),
            Page::Collections => self.collections.reload(),
        }
    }

    fn render_auth_bar(&mut self, ui: &mut egui::Ui) {
        let session = self.client.session();
        if session.is_authenticated() {
            let label = match session.session_id() {
                Some(id) => format!("🔓 Sessão #{}", id),
                None => "🔓 Autenticado".to_string(),
            };
            ui.label(label);
            if ui.button("Sair").clicked() {
                self.client.logout();
            }
            return;
        }

        let field = ui.add(
            egui::TextEdit::singleline(&mut self.auth.phone)
                .hint_text("Telefone")
                .desired_width(140.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add_enabled(!self.auth.logging_in, egui::Button::new("Entrar")).clicked() || submitted {
            self.auth.login(&self.client);
        }
        if self.auth.logging_in {
            ui.spinner();
        }
        if let Some(error) = &self.auth.error {
            ui.colored_label(egui::Color32::RED, error);
        }
    }
}

impl eframe::App for CatalogAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update state from async operations
        if self.auth.update_from_async() {
            self.reload_current();
        }
        self.dashboard.update_from_async();
        self.products.update_from_async();
        self.collections.update_from_async();

        // Fetch on first display
        match self.page {
            Page::Dashboard => self.dashboard.ensure_loaded(),
            Page::Products => self.products.ensure_loaded(),
            Page::Collections => self.collections.ensure_loaded(),
        }

        self.toasts.extend(self.dashboard.take_notices());
        self.toasts.extend(self.products.take_notices());
        self.toasts.extend(self.collections.take_notices());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🛍 Catálogo Admin");
                if self.current_is_waiting() {
                    ui.spinner();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_auth_bar(ui);
                });
            });
        });

        egui::SidePanel::left("navigation")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for (page, label) in [
                    (Page::Dashboard, "📊 Dashboard"),
                    (Page::Products, "📦 Produtos"),
                    (Page::Collections, "🗂 Coleções"),
                ] {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Dashboard => views::dashboard::show(ui, &mut self.dashboard),
            Page::Products => views::products::show(ctx, ui, &mut self.products),
            Page::Collections => views::collections::show(ctx, ui, &mut self.collections),
        });

        self.toasts.show(ctx);

        // Keep polling while requests are out or toasts are counting down.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
