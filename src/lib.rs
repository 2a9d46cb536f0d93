#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod layout;
mod visual;

pub use visual::Visualization;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("constellation-web starting");
    Ok(())
}
