use catalog_admin::screens::{DashboardAction, DashboardScreen};
use eframe::egui;

use super::status_banner;
use crate::state_manager::ScreenStateManager;

pub fn show(ui: &mut egui::Ui, manager: &mut ScreenStateManager<DashboardScreen>) {
    let mut reload = false;
    let screen = &manager.screen;

    ui.horizontal(|ui| {
        ui.heading("📊 Dashboard");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            reload = ui
                .add_enabled(!screen.status.is_loading(), egui::Button::new("🔄 Atualizar"))
                .clicked();
        });
    });
    ui.separator();

    if status_banner(ui, &screen.status, "Carregando estatísticas...") {
        reload = true;
    }

    ui.horizontal_wrapped(|ui| {
        for card in screen.cards() {
            egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                ui.set_min_width(180.0);
                ui.vertical(|ui| {
                    ui.label(card.title);
                    let value = card.value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
                    ui.heading(value);
                });
            });
        }
    });

    ui.add_space(16.0);
    ui.strong("Produtos por categoria");
    ui.add_space(4.0);

    let bars = screen.category_bars();
    if bars.is_empty() && screen.stats.is_some() {
        ui.label("Nenhuma categoria cadastrada.");
    }

    egui::Grid::new("category_bars").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        for bar in bars {
            ui.label(&bar.category);
            ui.add(egui::ProgressBar::new(bar.fraction).desired_width(320.0).text(bar.label));
            ui.end_row();
        }
    });

    if reload {
        manager.dispatch(DashboardAction::Load);
    }
}
