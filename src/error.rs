use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),

    #[error("showcase needs at least one image")]
    NoImages,

    #[error("navigation needs at least one link")]
    NoNavLinks,

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
