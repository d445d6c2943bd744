use lambda_http::{run, service_fn, Body, Error};

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod apis;
mod config;
mod extract;
mod prompt;
mod structs;

use apis::{Bedrock, Generate};
use config::Config;
use extract::extract_result;
use prompt::compose_prompt;
use structs::{ErrorBody, GenerationRequest};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_env_filter(EnvFilter::new("uigen_lambda=debug"))
        .init();

    info!("Starting the UI generation lambda");

    // Setup config and the Bedrock client here because this place is a cold start
    let config = Config::from_env()?;
    let region = config::region();
    info!("BEDROCK_REGION: {region}");
    info!("BEDROCK_MODEL_ID: {}", config.model_id);

    let bedrock = Bedrock::new(region, config.model_id.clone()).await;
    info!("Bedrock client initialized");

    // Run the Lambda function
    info!("Starting Lambda function");
    run(service_fn(|req| handler(req, &config, &bedrock))).await
}

/// One request, one model call, one fixed-shape response. Both gates run
/// before the model is invoked so a rejected request never spends a paid
/// generation.
async fn handler(
    req: lambda_http::Request,
    config: &Config,
    generator: &impl Generate,
) -> Result<lambda_http::Response<String>, lambda_http::Error> {
    debug!("Received a new request");

    let body = match req.body() {
        Body::Empty => None,
        Body::Text(text) if text.is_empty() => None,
        Body::Text(text) => Some(text.as_str()),
        Body::Binary(bytes) => std::str::from_utf8(bytes).ok().filter(|s| !s.is_empty()),
    };

    let Some(body) = body else {
        warn!("Request without a body");
        return error_response(400, "Bad Request", "Request body is required".to_string());
    };

    let request: GenerationRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Failed to parse request body: {e}");
            return error_response(400, "Bad Request", e.to_string());
        }
    };

    // Shared-secret gate. A configured PASS_PHRASE must match exactly; an
    // absent passphrase counts as a mismatch. No configured secret, no gate.
    if let Some(secret) = &config.passphrase {
        if request.passphrase.as_deref() != Some(secret.as_str()) {
            warn!("Passphrase did not match, rejecting");
            return error_response(401, "Unauthorized", "not matched passphrase".to_string());
        }
    }

    let prompt = compose_prompt(&request.purpose, &request.items, &request.design_request);
    debug!("Composed prompt ({} chars)", prompt.len());

    match generator.generate(&prompt).await {
        Ok(reply) => {
            let result = extract_result(&reply);
            info!(
                "Returning generated component ({} code chars, {} css chars)",
                result.generated_code.len(),
                result.generated_css.len()
            );
            json_response(200, serde_json::to_string(&result)?)
        }
        Err(e) => {
            error!("Generation failed: {e:?}");
            let mut message = e.to_string();
            if message.is_empty() {
                message = "Unknown error".to_string();
            }
            error_response(500, "Internal server error", message)
        }
    }
}

fn error_response(
    status: u16,
    error: &'static str,
    message: String,
) -> Result<lambda_http::Response<String>, lambda_http::Error> {
    json_response(status, serde_json::to_string(&ErrorBody { error, message })?)
}

fn json_response(
    status: u16,
    body: String,
) -> Result<lambda_http::Response<String>, lambda_http::Error> {
    Ok(lambda_http::Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(body)?)
}
