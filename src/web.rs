use crate::PortalApp;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "course_portal_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = find_canvas() else {
            log::error!("canvas #{CANVAS_ID} não encontrado");
            return;
        };
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(PortalApp::new(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("falha ao iniciar o app: {err:?}");
        }
    });
}

fn find_canvas() -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}
