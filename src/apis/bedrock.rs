// File for the AWS Bedrock generation call
use crate::config::MAX_TOKENS;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};
use tracing::{error, info};

/// The one seam between the handler and the hosted model. Lets tests drive
/// the handler without AWS.
#[async_trait]
pub trait Generate {
    /// Submit exactly one generation request and return the raw reply text.
    /// No retry; a transport or remote-side failure propagates as an error.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct Bedrock {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl Bedrock {
    pub async fn new(region: String, model_id: String) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: aws_sdk_bedrockruntime::Client::new(&aws_config),
            model_id,
        }
    }
}

#[async_trait]
impl Generate for Bedrock {
    async fn generate(&self, prompt: &str) -> Result<String> {
        info!("Starting AWS bedrock generation");
        let now = std::time::Instant::now();

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .context("Failed to build converse message")?;

        let inference_config = InferenceConfiguration::builder()
            .max_tokens(MAX_TOKENS)
            .build();

        let result = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(inference_config)
            .send()
            .await;

        let result = match result {
            Ok(output) => output,
            Err(e) => {
                let err = e.into_service_error();
                error!("Error: {:?}", err);
                return Err(anyhow::anyhow!("Error: {err:?}"));
            }
        };

        // Converse reply extraction; the API may legitimately return no
        // content, in which case the reply is the empty string.
        let text = result
            .output()
            .and_then(|output| output.as_message().ok())
            .and_then(|message| message.content().first())
            .and_then(|block| block.as_text().ok())
            .cloned()
            .unwrap_or_default();

        let elapsed = now.elapsed().as_secs_f32();
        info!(
            "Generated response using bedrock. Generation took {}s",
            (elapsed * 10.0).round() / 10.0
        );

        Ok(text)
    }
}
