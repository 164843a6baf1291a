use thiserror::Error;
use wasm_bindgen::JsValue;

/// Host-level failures while wiring behaviors onto the page.
///
/// Missing markup is never an error: a behavior with nothing to attach to
/// simply reports zero elements. These variants cover the browser refusing
/// something we asked for.
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("failed to add '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    #[error("invalid site-behaviors config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BehaviorError {
    pub fn listener(event: &'static str, value: JsValue) -> Self {
        BehaviorError::Listener {
            event,
            reason: describe(&value),
        }
    }

    pub fn observer(value: JsValue) -> Self {
        BehaviorError::Observer(describe(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
