mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::APP_ROOT_ID;

fn main() {
    console_error_panic_hook::set_once();

    match document().get_element_by_id(APP_ROOT_ID) {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => {
            utils::log::warn(&format!("#{} not found, mounting to <body>", APP_ROOT_ID));
            mount_to_body(App);
        }
    }
}
