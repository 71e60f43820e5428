//! Data contracts for one analysis session.
//!
//! `AnalysisResult` mirrors the remote service's JSON shape (camelCase keys).
//! Schema compliance is the remote service's responsibility — every field is
//! optional here and display defaults are applied only at render time
//! (see `analysis::view`).

use serde::{Deserialize, Serialize};

/// The two free-text blobs a user submits for analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    pub experience: String,
    pub job_description: String,
}

/// Structured fit analysis produced by the remote service. Immutable once
/// received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub extracted_skills: Option<ExtractedSkills>,
    #[serde(default)]
    pub work_style: Option<String>,
    #[serde(default)]
    pub suggestions: Option<Suggestions>,
    #[serde(default)]
    pub greeting: Option<String>,
}

/// Skill lists extracted from the JD, ordered by importance upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedSkills {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

/// Positioning statement plus actionable improvement steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub positioning: Option<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// One market trend from the grounded search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub trend: String,
    pub source: String,
}

/// Lifecycle status of an analysis session — the only state machine in the
/// system. See `analysis::orchestrator` for the legal transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    Idle,
    Thinking,
    Searching,
    Complete,
    Error,
}

impl AnalysisStatus {
    /// True while one of the two network calls is in flight.
    pub fn is_loading(self) -> bool {
        matches!(self, AnalysisStatus::Thinking | AnalysisStatus::Searching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_deserializes_full_payload() {
        let json = r#"{
            "extractedSkills": {
                "core": ["Rust", "分布式系统"],
                "soft": ["沟通能力"]
            },
            "workStyle": "注重细节",
            "suggestions": {
                "positioning": "定位为平台工程专家",
                "improvements": ["补充K8s经验", "量化项目成果"]
            },
            "greeting": "您好"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let skills = result.extracted_skills.unwrap();
        assert_eq!(skills.core, vec!["Rust", "分布式系统"]);
        assert_eq!(skills.soft, vec!["沟通能力"]);
        assert_eq!(result.work_style.as_deref(), Some("注重细节"));
        let suggestions = result.suggestions.unwrap();
        assert_eq!(suggestions.positioning.as_deref(), Some("定位为平台工程专家"));
        assert_eq!(suggestions.improvements.len(), 2);
        assert_eq!(result.greeting.as_deref(), Some("您好"));
    }

    #[test]
    fn test_analysis_result_tolerates_missing_fields() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert!(result.extracted_skills.is_none());
        assert!(result.work_style.is_none());
        assert!(result.suggestions.is_none());
        assert!(result.greeting.is_none());
    }

    #[test]
    fn test_analysis_result_tolerates_partial_nested_objects() {
        let json = r#"{"extractedSkills": {"core": ["Rust"]}, "suggestions": {}}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        let skills = result.extracted_skills.unwrap();
        assert_eq!(skills.core, vec!["Rust"]);
        assert!(skills.soft.is_empty());
        assert!(result.suggestions.unwrap().positioning.is_none());
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::Thinking).unwrap(),
            "\"THINKING\""
        );
        let status: AnalysisStatus = serde_json::from_str("\"COMPLETE\"").unwrap();
        assert_eq!(status, AnalysisStatus::Complete);
    }

    #[test]
    fn test_status_is_loading() {
        assert!(AnalysisStatus::Thinking.is_loading());
        assert!(AnalysisStatus::Searching.is_loading());
        assert!(!AnalysisStatus::Idle.is_loading());
        assert!(!AnalysisStatus::Complete.is_loading());
        assert!(!AnalysisStatus::Error.is_loading());
    }
}
