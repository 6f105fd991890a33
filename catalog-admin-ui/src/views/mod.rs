pub mod collections;
pub mod dashboard;
pub mod products;

use catalog_admin::screens::LoadStatus;
use eframe::egui;

/// Spinner while loading, red banner with a retry button on error.
/// Returns true when retry was clicked.
fn status_banner(ui: &mut egui::Ui, status: &LoadStatus, loading_text: &str) -> bool {
    match status {
        LoadStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(loading_text);
            });
            false
        }
        LoadStatus::Error(message) => {
            let mut retry = false;
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::RED, format!("❌ {}", message));
                retry = ui.button("🔄 Tentar novamente").clicked();
            });
            retry
        }
        LoadStatus::Idle | LoadStatus::Ready => false,
    }
}

fn search_box(ui: &mut egui::Ui, current: &str, hint: &str) -> Option<String> {
    let mut term = current.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut term)
            .hint_text(hint)
            .desired_width(260.0),
    );
    response.changed().then_some(term)
}

fn confirm_dialog(ctx: &egui::Context, title: &str, message: &str, busy: bool) -> Option<bool> {
    let mut answer = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, egui::Button::new("🗑 Excluir")).clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancelar").clicked() {
                    answer = Some(false);
                }
                if busy {
                    ui.spinner();
                }
            });
        });
    answer
}
