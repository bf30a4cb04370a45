use crate::Result;
use crate::ollama::{GenerateOptions, GenerateRequest, OllamaApi};
use rand::Rng;
use tracing::debug;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an art expert, gracefully describing your knowledge in art domain.";

/// Text-generation node with a system prompt, sampling options, and
/// multi-turn context. Returns the generated text together with the
/// server's continuation token for follow-up calls.
#[derive(Debug, Clone)]
pub struct AdvancedGenerateNode {
    pub prompt: String,
    pub model: String,
    pub system: String,
    pub seed: i64,
    pub top_k: u32,
    pub top_p: f64,
    pub temperature: f64,
    pub num_predict: i32,
    pub tfs_z: f64,
    /// Continuation token from a previous run, if any.
    pub context: Option<Vec<i64>>,
    pub debug: bool,
}

impl AdvancedGenerateNode {
    /// Defaults mirror the node's UI: seed is randomized per instance,
    /// the rest are the endpoint's conventional values.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            prompt: "What is Art?".to_string(),
            model: model.into(),
            system: DEFAULT_SYSTEM_PROMPT.to_string(),
            seed: rand::thread_rng().gen_range(1..=(1_i64 << 31)),
            top_k: 40,
            top_p: 0.9,
            temperature: 0.8,
            num_predict: -1,
            tfs_z: 1.0,
            context: None,
            debug: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_context(mut self, context: Vec<i64>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            seed: Some(self.seed),
            top_k: Some(self.top_k),
            top_p: Some(self.top_p),
            temperature: Some(self.temperature),
            num_predict: Some(self.num_predict),
            tfs_z: Some(self.tfs_z),
        }
    }

    pub async fn run(&self, client: &impl OllamaApi) -> Result<(String, Vec<i64>)> {
        let options = self.options();

        if self.debug {
            debug!(
                prompt = %self.prompt,
                model = %self.model,
                options = ?options,
                has_context = self.context.is_some(),
                "Advanced generate request params"
            );
        }

        let mut request = GenerateRequest::new(&self.model, &self.prompt);
        request.system = Some(self.system.clone());
        request.context = self.context.clone();
        request.options = Some(options);

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
                "Advanced generate response"
            );
        }

        let context = response.context.unwrap_or_default();
        Ok((response.response, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_ui_values() {
        let node = AdvancedGenerateNode::new("llama2");

        assert_eq!(node.prompt, "What is Art?");
        assert_eq!(node.system, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(node.top_k, 40);
        assert_eq!(node.top_p, 0.9);
        assert_eq!(node.temperature, 0.8);
        assert_eq!(node.num_predict, -1);
        assert_eq!(node.tfs_z, 1.0);
        assert_eq!(node.context, None);
    }

    #[test]
    fn test_default_seed_in_range() {
        // The seed is drawn from 1..=2^31 inclusive.
        for _ in 0..32 {
            let node = AdvancedGenerateNode::new("llama2");
            assert!(node.seed >= 1);
            assert!(node.seed <= 1 << 31);
        }
    }

    #[test]
    fn test_options_carry_all_fields() {
        let node = AdvancedGenerateNode::new("llama2").with_seed(7);
        let options = node.options();

        assert_eq!(options.seed, Some(7));
        assert_eq!(options.top_k, Some(40));
        assert_eq!(options.top_p, Some(0.9));
        assert_eq!(options.temperature, Some(0.8));
        assert_eq!(options.num_predict, Some(-1));
        assert_eq!(options.tfs_z, Some(1.0));
    }

    #[test]
    fn test_with_context() {
        let node = AdvancedGenerateNode::new("llama2").with_context(vec![1, 2, 3]);
        assert_eq!(node.context, Some(vec![1, 2, 3]));
    }
}
