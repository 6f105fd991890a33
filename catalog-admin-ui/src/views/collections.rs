use catalog_admin::forms::CollectionForm;
use catalog_admin::screens::{CollectionsAction, CollectionsScreen};
use eframe::egui;

use super::{confirm_dialog, search_box, status_banner};
use crate::state_manager::ScreenStateManager;

pub fn show(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    manager: &mut ScreenStateManager<CollectionsScreen>,
) {
    let mut actions = Vec::new();
    let screen = &manager.screen;

    ui.horizontal(|ui| {
        ui.heading("🗂 Coleções");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Nova coleção").clicked() {
                actions.push(CollectionsAction::OpenCreate);
            }
            if let Some(term) = search_box(ui, &screen.search_term, "Buscar por nome") {
                actions.push(CollectionsAction::SetSearch(term));
            }
        });
    });
    ui.separator();

    if status_banner(ui, &screen.status, "Carregando coleções...") {
        actions.push(CollectionsAction::Load);
    }

    let rows = screen.filtered();
    if rows.is_empty() && !screen.status.is_loading() {
        ui.label("Nenhuma coleção encontrada.");
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("collections_table")
            .striped(true)
            .num_columns(3)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Nome");
                ui.strong("Quantidade");
                ui.strong("");
                ui.end_row();

                for collection in rows {
                    ui.label(&collection.name);
                    ui.label(collection.quantity.to_string());
                    ui.horizontal(|ui| {
                        if ui.small_button("✏").on_hover_text("Editar").clicked() {
                            actions.push(CollectionsAction::OpenEdit { id: collection.id.clone() });
                        }
                        if ui.small_button("🗑").on_hover_text("Excluir").clicked() {
                            actions.push(CollectionsAction::RequestDelete {
                                id: collection.id.clone(),
                            });
                        }
                    });
                    ui.end_row();
                }
            });
    });

    if manager.screen.is_form_open {
        let screen = &mut manager.screen;
        let title = if screen.editing.is_some() { "Editar coleção" } else { "Nova coleção" };
        if let Some(action) = form_window(ctx, title, &mut screen.form, screen.busy) {
            actions.push(action);
        }
    }

    if let Some(collection) = &manager.screen.deleting {
        let message = format!("Excluir a coleção \"{}\"?", collection.name);
        match confirm_dialog(ctx, "Confirmar exclusão", &message, manager.screen.busy) {
            Some(true) => actions.push(CollectionsAction::ConfirmDelete),
            Some(false) => actions.push(CollectionsAction::CancelDelete),
            None => {}
        }
    }

    for action in actions {
        manager.dispatch(action);
    }
}

fn form_window(
    ctx: &egui::Context,
    title: &str,
    form: &mut CollectionForm,
    busy: bool,
) -> Option<CollectionsAction> {
    let mut action = None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("collection_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Nome *");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Quantidade *");
                ui.add(egui::TextEdit::singleline(&mut form.quantity).hint_text("0"));
                ui.end_row();
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, egui::Button::new("💾 Salvar")).clicked() {
                    action = Some(CollectionsAction::SubmitForm);
                }
                if ui.button("Cancelar").clicked() {
                    action = Some(CollectionsAction::CloseForm);
                }
                if busy {
                    ui.spinner();
                }
            });
        });

    action
}
