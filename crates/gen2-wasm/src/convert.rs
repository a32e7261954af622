use gen2::{LockAction, serde::TagOpDef};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Lock action as handed to JavaScript: raw command fields plus canonical names.
#[derive(Serialize)]
pub struct LockActionOut {
    pub mask: u16,
    pub action: u16,
    pub names: Vec<&'static str>,
}

impl From<LockAction> for LockActionOut {
    fn from(value: LockAction) -> Self {
        LockActionOut {
            mask: value.mask(),
            action: value.action(),
            names: value.names().collect(),
        }
    }
}

pub fn error_to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub fn lock_action_to_js(value: LockAction) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&LockActionOut::from(value)).map_err(error_to_js)
}

pub fn names_to_js() -> Result<JsValue, JsValue> {
    let names: Vec<&'static str> = LockAction::predefined().map(|(name, _)| name).collect();
    serde_wasm_bindgen::to_value(&names).map_err(error_to_js)
}

pub fn tag_op_to_js(def: &TagOpDef) -> Result<JsValue, JsValue> {
    // Plain objects rather than Maps, so JSON.stringify works on the result.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    def.serialize(&serializer).map_err(error_to_js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_action_out() {
        let out = LockActionOut::from(LockAction::KILL_LOCK | LockAction::USER_PERMALOCK);
        assert_eq!(out.mask, 0x0303);
        assert_eq!(out.action, 0x0203);
        assert_eq!(out.names, vec!["KILL_LOCK", "USER_PERMALOCK"]);
    }

    #[test]
    fn test_lock_action_out_json() {
        let out = LockActionOut::from(LockAction::EPC_UNLOCK);
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            serde_json::json!({ "mask": 0x0030, "action": 0, "names": ["EPC_UNLOCK"] })
        );
    }
}
