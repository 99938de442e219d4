/// Strip a markdown code fence wrapping a model response, if present.
/// Constrained decoding normally yields bare JSON, but models occasionally
/// wrap output in ```json fences anyway. Input without fences comes back
/// trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the language tag on the opening fence line, if any.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences() {
        let input = "```json\n{\"riskAssessment\": {}}\n```";
        assert_eq!(strip_code_fences(input), "{\"riskAssessment\": {}}");
    }

    #[test]
    fn test_strip_bare_fences() {
        let input = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn test_no_fences() {
        assert_eq!(strip_code_fences("  {\"a\": 1} \n"), "{\"a\": 1}");
    }

    #[test]
    fn test_unterminated_fence() {
        let input = "```json\n{\"a\": 1}";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}");
    }
}
