//! WASM bindings for the `gen2` tag data model.
//!
//! Exposes Select evaluation and the lock-action vocabulary to JavaScript.
//! Definitions come in as JSON in the shapes of [`gen2::serde`]:
//!
//! ```text
//! // const select = new WasmSelect(JSON.stringify({
//! //   bank: "EPC", bit_pointer: 32, bit_length: 8, mask: [0xAB]
//! // }));
//! // select.matches(new Uint8Array([0xAB, 0x12, 0x34, 0x56])); // true
//! // select.toString(); // "Gen2.Select:[EPC,32,8,AB]"
//! //
//! // parseLockAction("kill_lock,USER_PERMALOCK");
//! // // { mask: 771, action: 515, names: ["KILL_LOCK", "USER_PERMALOCK"] }
//! ```
//!
//! Errors reach JavaScript as strings carrying the error's `Display` text.

mod convert;

use gen2::{
    LockAction, Select, TagOp,
    serde::{SelectDef, TagOpDef},
};
use wasm_bindgen::prelude::*;

/// A Select filter that can be evaluated against EPCs from JavaScript.
#[wasm_bindgen]
pub struct WasmSelect {
    select: Select,
}

#[wasm_bindgen]
impl WasmSelect {
    /// Builds a Select from a JSON [`SelectDef`].
    #[wasm_bindgen(constructor)]
    pub fn new(select_json: &str) -> Result<WasmSelect, JsValue> {
        let def: SelectDef = serde_json::from_str(select_json).map_err(convert::error_to_js)?;
        let select = Select::try_from(def).map_err(convert::error_to_js)?;
        Ok(WasmSelect { select })
    }

    /// Evaluates the filter against EPC bytes (no CRC or PC).
    pub fn matches(&self, epc: &[u8]) -> Result<bool, JsValue> {
        self.select.matches(epc).map_err(convert::error_to_js)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.select.to_string()
    }
}

/// Parses comma-separated lock action names into `{ mask, action, names }`.
#[wasm_bindgen(js_name = parseLockAction)]
pub fn parse_lock_action(text: &str) -> Result<JsValue, JsValue> {
    let la = LockAction::parse(text).map_err(convert::error_to_js)?;
    convert::lock_action_to_js(la)
}

/// Formats raw Lock command fields as predefined names.
#[wasm_bindgen(js_name = formatLockAction)]
pub fn format_lock_action(mask: u16, action: u16) -> String {
    LockAction::new(mask, action).format()
}

#[wasm_bindgen(js_name = lockActionNames)]
pub fn lock_action_names() -> Result<JsValue, JsValue> {
    convert::names_to_js()
}

/// Parses a JSON [`TagOpDef`] and returns it with canonical lock-action names.
#[wasm_bindgen(js_name = normalizeTagOp)]
pub fn normalize_tag_op(op_json: &str) -> Result<JsValue, JsValue> {
    let def: TagOpDef = serde_json::from_str(op_json).map_err(convert::error_to_js)?;
    let op = TagOp::try_from(def).map_err(convert::error_to_js)?;
    convert::tag_op_to_js(&TagOpDef::from(&op))
}
