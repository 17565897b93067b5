//! Assistant Bridge
//!
//! Publishes the action contract on `window.familyTodo` for the assistant
//! SDK running in the page:
//!
//! - `actions`: action definitions (name, description, parameters, render)
//! - `config`: popup and runtime settings
//! - `readable()`: `{ description, value }` snapshot of the list
//! - `invoke(name, args)`: run an action; throws on unknown action or bad args

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::actions;
use crate::config::AssistantConfig;
use crate::store::{store_dispatch, store_readable, AppStore};

pub const BRIDGE_GLOBAL: &str = "familyTodo";

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn install(store: AppStore, config: &AssistantConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let bridge = Object::new();

    Reflect::set(&bridge, &"actions".into(), &to_js(&actions::definitions())?)?;
    Reflect::set(&bridge, &"config".into(), &to_js(config)?)?;

    let description = config.readable_description.clone();
    let readable = Closure::<dyn Fn() -> Result<JsValue, JsValue>>::new(move || {
        to_js(&store_readable(&store, &description))
    });
    Reflect::set(&bridge, &"readable".into(), readable.as_ref())?;
    readable.forget();

    let invoke = Closure::<dyn Fn(String, JsValue) -> Result<(), JsValue>>::new(
        move |name: String, args: JsValue| {
            let args: serde_json::Value = serde_wasm_bindgen::from_value(args)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            store_dispatch(&store, &name, args).map_err(|e| JsValue::from_str(&e.to_string()))
        },
    );
    Reflect::set(&bridge, &"invoke".into(), invoke.as_ref())?;
    invoke.forget();

    Reflect::set(&window, &BRIDGE_GLOBAL.into(), &bridge)?;
    log::info!("[BRIDGE] installed window.{}", BRIDGE_GLOBAL);
    Ok(())
}
