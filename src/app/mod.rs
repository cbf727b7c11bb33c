use crate::admin::CoursesTable;
use crate::api::{ApiClient, CourseApi};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::model::Route;
use crate::viewer::CourseViewer;
use eframe::egui;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod navigation;

/// O que sobrevive entre execuções. Seleção e aulas concluídas não entram
/// aqui: a fonte da verdade é o servidor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub route: Route,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            route: Route::Catalog,
            dark_mode: true,
        }
    }
}

/// Página aberta. Cada uma é dona do próprio estado e das próprias
/// requisições; trocar de página descarta tudo.
pub enum Page {
    Blank,
    Catalog(Catalog),
    Viewer(CourseViewer),
    Admin(CoursesTable),
}

/// Pedido de navegação devolvido pelas telas.
#[derive(Clone, Debug, PartialEq)]
pub enum Nav {
    Route(Route),
    ManageModules(String),
}

pub struct PortalApp {
    pub config: Config,
    pub api: Box<dyn CourseApi>,
    pub prefs: Preferences,
    pub page: Page,
}

impl PortalApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let config = Config::load();
        let api = ApiClient::new(&config.api_base_url).with_repaint(&cc.egui_ctx);
        Self::with_api(config, Box::new(api), prefs)
    }

    pub fn with_api(config: Config, api: Box<dyn CourseApi>, prefs: Preferences) -> Self {
        let mut app = Self {
            config,
            api,
            prefs,
            page: Page::Blank,
        };
        let route = app.prefs.route.clone();
        app.navigate(route);
        app
    }
}
