use super::*;

impl PortalApp {
    pub fn navigate(&mut self, route: Route) {
        log::info!("navegando para {route:?}");
        self.page = match &route {
            Route::Catalog => Page::Catalog(Catalog::mount(self.api.as_ref())),
            Route::Viewer { course_id } => {
                Page::Viewer(CourseViewer::mount(self.api.as_ref(), course_id))
            }
            Route::Admin => Page::Admin(CoursesTable::mount(self.api.as_ref())),
        };
        self.prefs.route = route;
    }

    pub fn open_course(&mut self, course_id: &str) {
        self.navigate(Route::Viewer {
            course_id: course_id.to_string(),
        });
    }

    pub fn open_catalog(&mut self) {
        self.navigate(Route::Catalog);
    }

    pub fn open_admin(&mut self) {
        self.navigate(Route::Admin);
    }

    /// Página de módulos do curso; fica fora deste app.
    pub fn modules_page_url(&self, course_id: &str) -> String {
        ApiClient::new(&self.config.api_base_url).manage_modules_url(course_id)
    }

    /// Aplica o pedido de uma tela. Devolve a URL externa a abrir, se houver.
    pub fn follow(&mut self, nav: Nav) -> Option<String> {
        match nav {
            Nav::Route(route) => {
                self.navigate(route);
                None
            }
            Nav::ManageModules(course_id) => Some(self.modules_page_url(&course_id)),
        }
    }

    /// Entrega às telas as respostas que já chegaram.
    pub fn poll(&mut self) {
        match &mut self.page {
            Page::Blank => {}
            Page::Catalog(catalog) => catalog.poll(),
            Page::Viewer(viewer) => viewer.poll(),
            Page::Admin(table) => table.poll(self.api.as_ref()),
        }
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        ctx.set_visuals(if self.prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::model::{Course, Lesson, Module};

    fn app_with(route: Route) -> PortalApp {
        let api = FakeApi {
            course: Some(Course {
                id: "c1".into(),
                title: "Rust".into(),
                description: String::new(),
                modules: vec![Module {
                    id: "m1".into(),
                    title: "Intro".into(),
                    description: String::new(),
                    lessons: vec![Lesson {
                        id: "L1".into(),
                        title: "Olá".into(),
                        description: String::new(),
                        video_public_id: None,
                    }],
                }],
            }),
            ..FakeApi::default()
        };
        PortalApp::with_api(
            Config::new("http://localhost:3000", "https://cdn.example"),
            Box::new(api),
            Preferences {
                route,
                dark_mode: true,
            },
        )
    }

    #[test]
    fn restores_saved_route_on_start() {
        let app = app_with(Route::Admin);
        assert!(matches!(app.page, Page::Admin(_)));
    }

    #[test]
    fn leaving_the_viewer_discards_its_state() {
        let mut app = app_with(Route::Catalog);
        app.open_course("c1");
        app.poll();
        if let Page::Viewer(viewer) = &mut app.page {
            viewer.complete_lesson("L1");
        } else {
            panic!("esperava a página do curso");
        }

        app.open_catalog();
        app.open_course("c1");
        app.poll();
        match &app.page {
            Page::Viewer(viewer) => assert!(!viewer.is_completed("L1")),
            _ => panic!("esperava a página do curso"),
        }
        assert_eq!(
            app.prefs.route,
            Route::Viewer {
                course_id: "c1".into()
            }
        );
    }

    #[test]
    fn manage_modules_points_outside_the_app() {
        let mut app = app_with(Route::Admin);
        let url = app.follow(Nav::ManageModules("c1".into()));
        assert_eq!(
            url.as_deref(),
            Some("http://localhost:3000/admin/courses/c1/modules")
        );
        assert!(matches!(app.page, Page::Admin(_)));
    }

    #[test]
    fn preferences_default_to_catalog() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }
}
