use crate::Result;
use crate::ollama::{GenerateRequest, OllamaApi};
use tracing::debug;

/// Plain text-generation node: prompt in, generated text out.
#[derive(Debug, Clone)]
pub struct GenerateNode {
    pub prompt: String,
    pub model: String,
    /// Log request parameters and response metadata at debug level.
    pub debug: bool,
}

impl GenerateNode {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            prompt: "What is Art?".to_string(),
            model: model.into(),
            debug: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub async fn run(&self, client: &impl OllamaApi) -> Result<String> {
        if self.debug {
            debug!(
                prompt = %self.prompt,
                model = %self.model,
                "Generate request params"
            );
        }

        let request = GenerateRequest::new(&self.model, &self.prompt);
        let response = client.generate(request).await?;

        if self.debug {
            debug!(
                model = %response.model,
                created_at = response.created_at.as_deref().unwrap_or(""),
                done = response.done,
                eval_duration = response.eval_duration.unwrap_or(0),
                load_duration = response.load_duration.unwrap_or(0),
                eval_count = response.eval_count.unwrap_or(0),
                prompt_eval_duration = response.prompt_eval_duration.unwrap_or(0),
                response = %response.response,
                context_len = response.context.as_ref().map_or(0, Vec::len),
                "Generate response"
            );
        }

        Ok(response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_prompt() {
        let node = GenerateNode::new("llama2");
        assert_eq!(node.prompt, "What is Art?");
        assert!(!node.debug);
    }

    #[test]
    fn test_builder_overrides() {
        let node = GenerateNode::new("llama2")
            .with_prompt("Summarize this scene")
            .with_debug(true);

        assert_eq!(node.prompt, "Summarize this scene");
        assert!(node.debug);
    }
}
