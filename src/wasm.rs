//! WebAssembly bindings for the browser shell.
//!
//! JSON-in/JSON-out entry points over the widget registry, callable from
//! JavaScript when the crate is built with the `wasm` feature.

use wasm_bindgen::prelude::*;

use crate::core::features;
use crate::shared::types::ExecuteActionRequest;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Panic hook for readable error messages in the browser console
    console_error_panic_hook::set_once();
}

/// The shell's command index as JSON.
#[wasm_bindgen(js_name = commandIndex)]
pub fn command_index() -> String {
    serde_json::to_string(&features::get_all_command_items()).unwrap_or_default()
}

/// Execute a widget action serialized as an ExecuteActionRequest.
///
/// # Errors
///
/// Returns an error string if parsing or execution fails.
#[wasm_bindgen(js_name = executeAction)]
pub fn execute_action(request_json: &str) -> Result<String, String> {
    let request: ExecuteActionRequest =
        serde_json::from_str(request_json).map_err(|e| e.to_string())?;
    let response = features::execute_widget_action(&request).map_err(|e| e.to_string())?;
    serde_json::to_string(&response).map_err(|e| e.to_string())
}
