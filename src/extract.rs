use crate::structs::GenerationResult;
use serde_json::Value;

/// Substituted for `generated_css` whenever the model reply carries no usable
/// `generatedCSS` field. Never empty.
pub const CSS_FALLBACK: &str = "The model reply was malformed, please try generating again.";

/// Recover a two-field result from the raw model reply. The model is asked to
/// emit JSON but is a free-text generator, so this is a best-effort parse
/// with fallbacks, never a schema check:
///
/// - reply parses and has a non-empty `generatedCode` string: use it,
///   otherwise the whole raw reply becomes the code value;
/// - reply parses and has a non-empty `generatedCSS` string: use it,
///   otherwise [`CSS_FALLBACK`];
/// - reply does not parse at all: raw reply as code, [`CSS_FALLBACK`] as CSS.
///
/// Total function: every branch returns a fully populated result. A garbled
/// reply dumped into the code field is still more useful to the user than a
/// failed request.
pub fn extract_result(raw: &str) -> GenerationResult {
    let parsed: Value = serde_json::from_str(raw).unwrap_or(Value::Null);

    let generated_code = match parsed["generatedCode"].as_str() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => raw.to_string(),
    };
    let generated_css = match parsed["generatedCSS"].as_str() {
        Some(css) if !css.is_empty() => css.to_string(),
        _ => CSS_FALLBACK.to_string(),
    };

    GenerationResult {
        generated_code,
        generated_css,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_passes_through() {
        let result = extract_result(r#"{"generatedCode":"X","generatedCSS":"Y"}"#);
        assert_eq!(result.generated_code, "X");
        assert_eq!(result.generated_css, "Y");
    }

    #[test]
    fn unparseable_reply_becomes_the_code_value() {
        let raw = "Sure! Here is your component:\nfunction AppWindow() {}";
        let result = extract_result(raw);
        assert_eq!(result.generated_code, raw);
        assert_eq!(result.generated_css, CSS_FALLBACK);
    }

    #[test]
    fn empty_css_field_falls_back_to_placeholder() {
        let result = extract_result(r#"{"generatedCode":"X","generatedCSS":""}"#);
        assert_eq!(result.generated_code, "X");
        assert_eq!(result.generated_css, CSS_FALLBACK);
    }

    #[test]
    fn missing_code_field_falls_back_to_raw_reply() {
        let raw = r#"{"generatedCSS":".a{color:red}"}"#;
        let result = extract_result(raw);
        assert_eq!(result.generated_code, raw);
        assert_eq!(result.generated_css, ".a{color:red}");
    }

    #[test]
    fn non_object_json_degrades_like_a_missing_object() {
        let raw = r#"["generatedCode","generatedCSS"]"#;
        let result = extract_result(raw);
        assert_eq!(result.generated_code, raw);
        assert_eq!(result.generated_css, CSS_FALLBACK);
    }

    #[test]
    fn non_string_fields_are_ignored() {
        let raw = r#"{"generatedCode":42,"generatedCSS":true}"#;
        let result = extract_result(raw);
        assert_eq!(result.generated_code, raw);
        assert_eq!(result.generated_css, CSS_FALLBACK);
    }

    #[test]
    fn empty_reply_still_yields_a_complete_result() {
        let result = extract_result("");
        assert_eq!(result.generated_code, "");
        assert_eq!(result.generated_css, CSS_FALLBACK);
    }
}
