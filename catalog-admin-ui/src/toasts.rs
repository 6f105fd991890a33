use catalog_admin::screens::{Notice, NoticeLevel};
use eframe::egui;

use crate::wasm_utils;

struct Toast {
    notice: Notice,
    expires_at: u64,
}

/// Stack of transient notices in the top-right corner.
pub struct Toasts {
    items: Vec<Toast>,
    ttl_millis: u64,
}

impl Toasts {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            items: Vec::new(),
            ttl_millis: ttl_seconds.saturating_mul(1000),
        }
    }

    pub fn extend(&mut self, notices: Vec<Notice>) {
        let expires_at = wasm_utils::now_millis() + self.ttl_millis;
        self.items.extend(notices.into_iter().map(|notice| Toast { notice, expires_at }));
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = wasm_utils::now_millis();
        self.items.retain(|t| t.expires_at > now);
        if self.items.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in self.items.iter().enumerate() {
                    let (icon, color) = match toast.notice.level {
                        NoticeLevel::Success => ("✅", egui::Color32::from_rgb(60, 170, 90)),
                        NoticeLevel::Warning => ("⚠", egui::Color32::from_rgb(220, 160, 40)),
                        NoticeLevel::Error => ("❌", egui::Color32::from_rgb(210, 70, 70)),
                    };
                    egui::Frame::popup(ui.style()).stroke(egui::Stroke::new(1.0, color)).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.colored_label(color, icon);
                            ui.label(&toast.notice.message);
                            if ui.small_button("✖").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                }
            });

        if let Some(index) = dismissed {
            self.items.remove(index);
        }
    }
}
