use crate::app::PortalApp;
use crate::model::Route;
use egui::{CentralPanel, Context, Frame, Spinner, Ui};

pub fn top_panel(app: &mut PortalApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let in_catalog = matches!(app.prefs.route, Route::Catalog | Route::Viewer { .. });
            let in_admin = app.prefs.route == Route::Admin;

            if ui.selectable_label(in_catalog, "📚 Meus cursos").clicked() {
                app.open_catalog();
            }
            if ui.selectable_label(in_admin, "🛠 Administração").clicked() {
                app.open_admin();
            }
        });
    });
}

pub fn bottom_panel(app: &mut PortalApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTÃO DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.prefs.dark_mode {
                "☀ Modo claro"
            } else {
                "🌙 Modo escuro"
            };
            if ui.button(label).clicked() {
                app.toggle_theme(ctx);
            }
            ui.label(
                egui::RichText::new(&app.config.api_base_url)
                    .small()
                    .weak(),
            );
        });
    });
}

/// Cartão no terço superior da página, para estados sem conteúdo
/// (carregando, curso inexistente).
pub fn status_card(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    inner(ui);
                });
        });
    });
}

pub fn loading_panel(ctx: &Context) {
    status_card(ctx, 300.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new());
            ui.add_space(8.0);
            ui.label("Carregando...");
        });
    });
}
