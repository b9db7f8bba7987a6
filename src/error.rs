/// Everything that can go wrong while bringing the page's visuals up.
#[derive(Debug, thiserror::Error)]
pub enum CosmicError {
    #[error("{0} is not available")]
    CapabilityAbsent(&'static str),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("shader error: {0}")]
    Shader(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CosmicError {
    pub fn missing(selector: impl Into<String>) -> Self {
        CosmicError::MissingElement(selector.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CosmicError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        CosmicError::Dom(msg)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<CosmicError> for wasm_bindgen::JsValue {
    fn from(err: CosmicError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CosmicError>;
