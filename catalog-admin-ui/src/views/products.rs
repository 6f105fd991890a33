use catalog_admin::catalog::{ApiCollection, ColorVariant};
use catalog_admin::forms::ProductForm;
use catalog_admin::screens::{ProductsAction, ProductsScreen};
use eframe::egui;

use super::{confirm_dialog, search_box, status_banner};
use crate::state_manager::ScreenStateManager;

pub fn show(ctx: &egui::Context, ui: &mut egui::Ui, manager: &mut ScreenStateManager<ProductsScreen>) {
    let mut actions = Vec::new();
    let screen = &manager.screen;

    ui.horizontal(|ui| {
        ui.heading("📦 Produtos");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Novo produto").clicked() {
                actions.push(ProductsAction::OpenCreate);
            }
            if let Some(term) = search_box(ui, &screen.search_term, "Buscar por nome ou categoria") {
                actions.push(ProductsAction::SetSearch(term));
            }
        });
    });
    ui.separator();

    if status_banner(ui, &screen.status, "Carregando produtos...") {
        actions.push(ProductsAction::Load);
    }

    let rows = screen.filtered();
    if rows.is_empty() && !screen.status.is_loading() {
        ui.label("Nenhum produto encontrado.");
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("products_table")
            .striped(true)
            .num_columns(7)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in ["Nome", "Categoria", "Preço", "Coleção", "Tamanhos", "Cores", ""] {
                    ui.strong(header);
                }
                ui.end_row();

                for product in rows {
                    ui.label(&product.name);
                    ui.label(&product.category);
                    ui.label(format!("R$ {:.2}", product.price));
                    ui.label(product.collection.as_deref().unwrap_or("-"));
                    ui.label(product.sizes.join(", "));
                    ui.horizontal(|ui| {
                        for color in &product.colors {
                            color_swatch(ui, color);
                        }
                    });
                    ui.horizontal(|ui| {
                        if ui.small_button("✏").on_hover_text("Editar").clicked() {
                            actions.push(ProductsAction::OpenEdit { id: product.id.clone() });
                        }
                        if ui.small_button("🗑").on_hover_text("Excluir").clicked() {
                            actions.push(ProductsAction::RequestDelete { id: product.id.clone() });
                        }
                    });
                    ui.end_row();
                }
            });
    });

    if manager.screen.is_form_open {
        let screen = &mut manager.screen;
        let title = if screen.editing.is_some() { "Editar produto" } else { "Novo produto" };
        if let Some(action) = form_window(ctx, title, &mut screen.form, &screen.collections, screen.busy) {
            actions.push(action);
        }
    }

    if let Some(product) = &manager.screen.deleting {
        let message = format!("Excluir o produto \"{}\"?", product.name);
        match confirm_dialog(ctx, "Confirmar exclusão", &message, manager.screen.busy) {
            Some(true) => actions.push(ProductsAction::ConfirmDelete),
            Some(false) => actions.push(ProductsAction::CancelDelete),
            None => {}
        }
    }

    for action in actions {
        manager.dispatch(action);
    }
}

fn color_swatch(ui: &mut egui::Ui, color: &ColorVariant) {
    let fill = egui::Color32::from_hex(&color.hex).unwrap_or(egui::Color32::GRAY);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, fill);
    response.on_hover_text(format!("{} ({})", color.name, color.hex));
}

fn form_window(
    ctx: &egui::Context,
    title: &str,
    form: &mut ProductForm,
    collections: &[ApiCollection],
    busy: bool,
) -> Option<ProductsAction> {
    let mut action = None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("product_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Nome *");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Preço *");
                ui.add(egui::TextEdit::singleline(&mut form.price).hint_text("0,00"));
                ui.end_row();

                ui.label("Categoria *");
                ui.text_edit_singleline(&mut form.category);
                ui.end_row();

                ui.label("Coleção");
                let selected = form
                    .collection_id
                    .and_then(|id| collections.iter().find(|c| c.id == id))
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "Selecione uma coleção".to_string());
                egui::ComboBox::from_id_salt("product_collection")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for collection in collections {
                            ui.selectable_value(
                                &mut form.collection_id,
                                Some(collection.id),
                                &collection.name,
                            );
                        }
                    });
                ui.end_row();

                ui.label("Imagem (URL)");
                ui.text_edit_singleline(&mut form.image);
                ui.end_row();

                ui.label("Tamanhos");
                ui.add(egui::TextEdit::singleline(&mut form.sizes).hint_text("P, M, G"));
                ui.end_row();

                ui.label("Modelo");
                ui.add(egui::TextEdit::singleline(&mut form.model).hint_text("manual"));
                ui.end_row();

                ui.label("Descrição");
                ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(3));
                ui.end_row();
            });

            ui.separator();
            ui.label("Cores");
            let mut removed = None;
            for (index, color) in form.colors.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut color.name).hint_text("Nome").desired_width(140.0));
                    ui.add(egui::TextEdit::singleline(&mut color.hex).hint_text("#000000").desired_width(90.0));
                    color_swatch(ui, color);
                    if ui.small_button("✖").clicked() {
                        removed = Some(index);
                    }
                });
            }
            if let Some(index) = removed {
                form.remove_color(index);
            }
            if ui.button("➕ Adicionar cor").clicked() {
                form.add_color();
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, egui::Button::new("💾 Salvar")).clicked() {
                    action = Some(ProductsAction::SubmitForm);
                }
                if ui.button("Cancelar").clicked() {
                    action = Some(ProductsAction::CloseForm);
                }
                if busy {
                    ui.spinner();
                }
            });
        });

    action
}
