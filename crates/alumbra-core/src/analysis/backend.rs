use crate::errors::CoreError;

/// Response from a model backend call.
#[derive(Debug)]
pub struct BackendResponse {
    /// The model's response text (inner payload extracted from the provider
    /// wrapper).
    pub text: String,
    /// Input tokens consumed.
    pub input_tokens: u64,
    /// Output tokens produced.
    pub output_tokens: u64,
}

/// Trait for generative-model backends. Sync only — no async. The single
/// `execute` call is the one blocking suspension point of an analysis;
/// backends carry no per-request mutable state, so one instance may serve
/// concurrent analyses.
pub trait AnalysisBackend {
    /// Execute a prompt and return the response text and token cost.
    /// When `json_schema` is provided, the backend declares it to the
    /// provider for constrained decoding so the response matches the schema.
    fn execute(&self, prompt: &str, json_schema: Option<&str>) -> Result<BackendResponse, CoreError>;
}
