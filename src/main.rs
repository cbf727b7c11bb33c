#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portal de Cursos")
            .with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "course_portal",
        options,
        Box::new(|cc| Ok(Box::new(course_portal::PortalApp::new(cc)))),
    )
}

// No navegador a entrada é `web::start`, chamada pelo wasm-bindgen.
#[cfg(target_arch = "wasm32")]
fn main() {}
