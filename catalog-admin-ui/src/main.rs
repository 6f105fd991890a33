// Desktop entry point for the catalog admin console
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
use catalog_admin::AdminConfig;
#[cfg(not(target_arch = "wasm32"))]
use catalog_admin_ui::CatalogAdminApp;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AdminConfig::load(None);
    log::info!("Using API at {}", config.api.base_url);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Catálogo Admin"),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog Admin",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CatalogAdminApp::new(cc, config)))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build starts through `catalog_admin_ui::start`.
}
