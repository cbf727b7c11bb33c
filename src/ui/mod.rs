mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Page, PortalApp};
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for PortalApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respostas que chegaram desde o último frame
        self.poll();

        // NAVEGAÇÃO
        top_panel(self, ctx);

        // PAINEL INFERIOR TEMA ESCURO OU CLARO
        bottom_panel(self, ctx);

        // Dispatch por página
        let nav = match &mut self.page {
            Page::Blank => None,
            Page::Catalog(catalog) => views::catalog::ui_catalog(catalog, ctx),
            Page::Viewer(viewer) => views::course_viewer::ui_course_viewer(
                viewer,
                self.api.as_ref(),
                &self.config,
                ctx,
            ),
            Page::Admin(table) => {
                views::courses_table::ui_courses_table(table, self.api.as_ref(), ctx)
            }
        };

        if let Some(nav) = nav {
            if let Some(url) = self.follow(nav) {
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
