mod api;
mod app;
mod config;
mod view;

pub use app::{App, AppProps};
pub use config::AppConfig;

use wasm_bindgen::prelude::*;
use yew::AppHandle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Устанавливаем обработчик паники
    console_error_panic_hook::set_once();

    // Инициализируем логирование
    #[cfg(debug_assertions)]
    console_log::init_with_level(log::Level::Debug).unwrap_or_else(|e| {
        web_sys::console::log_1(&format!("Failed to init logger: {}", e).into());
    });

    Ok(())
}

/// A mounted frontend. Keep the handle for as long as the view should
/// stay attached; [`BazaarApp::teardown`] unmounts it.
#[wasm_bindgen]
pub struct BazaarApp {
    handle: Option<AppHandle<App>>,
}

#[wasm_bindgen]
impl BazaarApp {
    /// Detach the view tree and drop its state. Safe to call twice.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
    }
}

/// Mount the frontend into `root`, talking to the backend at `api_base`.
#[wasm_bindgen]
pub fn attach(root: web_sys::Element, api_base: String) -> BazaarApp {
    let props = AppProps {
        config: AppConfig::new(api_base),
    };
    let handle = yew::Renderer::<App>::with_root_and_props(root, props).render();

    BazaarApp {
        handle: Some(handle),
    }
}

/// Mount into `document.body`.
#[wasm_bindgen]
pub fn attach_to_body(api_base: String) -> Result<BazaarApp, JsValue> {
    let body = gloo_utils::document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    Ok(attach(body.into(), api_base))
}
