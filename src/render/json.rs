//! JSON rendering for structured letters.

use crate::error::Result;
use crate::model::StructuredDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a structured letter to JSON.
pub fn to_json(doc: &StructuredDocument, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StructuredDocument {
        StructuredDocument::new(
            "March 03, 2025",
            vec!["Hello".to_string()],
            vec!["Regards,".to_string(), "Sam".to_string()],
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"date_line\": \"March 03, 2025\""));
        assert!(json.contains("\"signature_lines\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"date_line":"March 03, 2025","paragraphs":["Hello"],"signature_lines":["Regards,","Sam"]}"#
        );
    }

    #[test]
    fn test_json_deserializes_back() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let doc: StructuredDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, sample());
    }
}
