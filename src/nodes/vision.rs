use crate::Result;
use crate::image::{ImageTensor, encode_batch};
use crate::ollama::{GenerateRequest, OllamaApi};
use tracing::debug;

/// Multimodal node: a batch of pixel tensors plus a query in, the model's
/// description out. Each tensor is PNG- and base64-encoded before the call.
#[derive(Debug, Clone)]
pub struct VisionNode {
    pub images: Vec<ImageTensor>,
    pub query: String,
    pub model: String,
    pub debug: bool,
}

impl VisionNode {
    pub fn new(model: impl Into<String>, images: Vec<ImageTensor>) -> Self {
        Self {
            images,
            query: "describe the image".to_string(),
            model: model.into(),
            debug: false,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub async fn run(&self, client: &impl OllamaApi) -> Result<String> {
        let images_b64 = encode_batch(&self.images)?;

        if self.debug {
            debug!(
                query = %self.query,
                model = %self.model,
                images = images_b64.len(),
                "Vision request params"
            );
        }

        let mut request = GenerateRequest::new(&self.model, &self.query);
        request.images = Some(images_b64);

        let response = client.generate(request).await?;

        Ok(response.response)
    }
}
