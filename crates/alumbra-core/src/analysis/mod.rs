pub mod backend;
pub mod gemini;
pub mod prompts;

use crate::errors::CoreError;
use crate::models::AnalysisResult;
use crate::util;

use backend::AnalysisBackend;

/// Minimum transcript length (trimmed) accepted for analysis. Shorter input
/// is rejected before any model call. Fixed by the contract, not configurable.
pub const MIN_CONVERSATION_CHARS: usize = 10;

/// JSON schema for constrained decoding of analysis responses, in the
/// provider's response-schema dialect. Field names and descriptions are part
/// of the output contract; the model fills exactly this shape.
pub const ANALYSIS_OUTPUT_SCHEMA: &str = r#"{
  "type": "OBJECT",
  "properties": {
    "riskAssessment": {
      "type": "OBJECT",
      "properties": {
        "riskScore": {"type": "INTEGER", "description": "A score indicating the overall risk level (1-10)."},
        "riskSummary": {"type": "STRING", "description": "A brief summary of the potential risks identified."}
      },
      "required": ["riskScore", "riskSummary"]
    },
    "detectedCategories": {
      "type": "ARRAY",
      "items": {"type": "STRING"},
      "description": "Categories of abuse detected in the conversation (e.g., emotional abuse, manipulation)."
    },
    "relevantExamples": {
      "type": "ARRAY",
      "items": {"type": "STRING"},
      "description": "Specific examples from the text that demonstrate the identified abuse categories."
    },
    "recommendations": {
      "type": "STRING",
      "description": "Tailored recommendations based on the analysis (e.g., seek professional help, set boundaries)."
    }
  },
  "required": ["riskAssessment", "detectedCategories", "relevantExamples", "recommendations"]
}"#;

/// A validated analysis plus the token cost of producing it.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub analysis: AnalysisResult,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Run a single risk analysis: validate the input, build the rubric prompt,
/// call the model once, and validate its structured response.
///
/// Either a fully schema-valid result comes back or an error — there is no
/// partial result and no automatic retry. An out-of-range score is reported
/// as a schema violation, never clamped: silently "fixing" it would mask
/// model misbehavior.
pub fn analyze(
    backend: &dyn AnalysisBackend,
    conversation_text: &str,
) -> Result<AnalyzeOutcome, CoreError> {
    let trimmed = conversation_text.trim();
    if trimmed.chars().count() < MIN_CONVERSATION_CHARS {
        return Err(CoreError::InvalidInput(format!(
            "conversation text too short for analysis ({} chars, minimum {})",
            trimmed.chars().count(),
            MIN_CONVERSATION_CHARS
        )));
    }

    let prompt = prompts::build_analysis_prompt(conversation_text);
    let response = backend.execute(&prompt, Some(ANALYSIS_OUTPUT_SCHEMA))?;

    let analysis = parse_analysis_response(&response.text)?;
    validate_result(&analysis)?;

    Ok(AnalyzeOutcome {
        analysis,
        input_tokens: response.input_tokens,
        output_tokens: response.output_tokens,
    })
}

/// Parse the model's response text into an `AnalysisResult`.
/// With constrained decoding the response is normally bare JSON, but fenced
/// output is tolerated.
fn parse_analysis_response(text: &str) -> Result<AnalysisResult, CoreError> {
    let cleaned = util::strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|e| {
        CoreError::SchemaValidation(format!(
            "model response does not match the output schema: {e}\nresponse text: {}",
            truncate_for_error(text, 1500)
        ))
    })
}

/// Range checks that the type system can't express. Serde already enforced
/// field presence and types.
fn validate_result(result: &AnalysisResult) -> Result<(), CoreError> {
    let score = result.risk_assessment.risk_score;
    if !(1..=10).contains(&score) {
        return Err(CoreError::SchemaValidation(format!(
            "riskScore {score} is outside the 1-10 scale"
        )));
    }
    Ok(())
}

fn truncate_for_error(s: &str, max: usize) -> &str {
    if s.len() <= max {
        s
    } else {
        let mut i = max;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        &s[..i]
    }
}
