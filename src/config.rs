use anyhow::{Context, Result};
use std::env;

/// Upper bound on generated tokens per Converse call. Fixed, not adjustable
/// per request.
pub const MAX_TOKENS: i32 = 8192;

/// Environment-supplied settings, read once at cold start and passed
/// explicitly into the handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_id: String,
    /// Optional shared secret. `None` (or an empty `PASS_PHRASE`) disables
    /// the gate entirely. A single equality check, not an auth system.
    pub passphrase: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_id = env::var("BEDROCK_MODEL_ID").context("BEDROCK_MODEL_ID not set!")?;
        let passphrase = env::var("PASS_PHRASE").ok().filter(|p| !p.is_empty());
        Ok(Self {
            model_id,
            passphrase,
        })
    }
}

pub fn region() -> String {
    env::var("BEDROCK_REGION").unwrap_or_else(|_| "us-east-1".to_string())
}
