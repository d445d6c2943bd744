use serde::{Deserialize, Serialize};

/// What the browser client posts for one "generate" action. The three text
/// fields are free text; the client is responsible for non-emptiness.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub purpose: String,
    pub items: String,
    pub design_request: String,
    #[serde(default)]
    pub passphrase: Option<String>,
}

/// The two text blobs returned on success. `generated_css` is never empty;
/// extraction substitutes a placeholder when the model reply is unusable.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub generated_code: String,
    pub generated_css: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}
