use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),
}

impl CoreError {
    /// Spanish message safe to show to an end user. Internal detail (HTTP
    /// status codes, serde messages, raw model output) stays in the Display
    /// form for logging and never reaches this string.
    pub fn user_message(&self) -> &'static str {
        match self {
            CoreError::InvalidInput(_) => {
                "El texto de la conversación es demasiado corto para el análisis."
            }
            _ => "Error al analizar la conversación con IA. Inténtalo de nuevo más tarde.",
        }
    }
}
