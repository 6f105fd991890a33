#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod app;
mod state_manager;
mod toasts;
mod views;
pub mod wasm_utils;

pub use app::CatalogAdminApp;

/// WASM entry point for the catalog admin console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{} not found", canvas_id)))?;

    let web_options = eframe::WebOptions::default();
    let config = catalog_admin::AdminConfig::default();

    wasm_utils::spawn_async(async move {
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    cc.egui_ctx.set_visuals(egui::Visuals::dark());
                    Ok(Box::new(app::CatalogAdminApp::new(cc, config)))
                }),
            )
            .await;

        if let Some(loading_text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading_text"))
        {
            match start_result {
                Ok(_) => loading_text.remove(),
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    wasm_utils::console_log(&format!("Failed to start eframe: {:?}", e));
                }
            }
        }
    });

    Ok(())
}
