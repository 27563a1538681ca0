//! Document analysis types.

use serde::{Deserialize, Serialize};

/// Analysis of an uploaded legal document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_name: String,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_analysis_deserialize() {
        let json = r#"{
            "document_name": "rental-agreement.pdf",
            "summary": "An 11-month rental agreement.",
            "key_points": ["Deposit: two months' rent"],
            "suggestions": ["Verify the notarization requirement"]
        }"#;
        let analysis: DocumentAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.document_name, "rental-agreement.pdf");
        assert_eq!(analysis.key_points.len(), 1);
    }

    #[test]
    fn test_document_analysis_defaults() {
        let json = r#"{"document_name": "x.pdf", "summary": "s"}"#;
        let analysis: DocumentAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.key_points.is_empty());
        assert!(analysis.suggestions.is_empty());
    }
}
