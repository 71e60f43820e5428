//! Results renderer — pure mapping from the session's result and trends to a
//! display structure.
//!
//! This layer never errors: missing fields become placeholder strings or
//! empty lists, and skill lists are truncated to the display cap in the
//! order the upstream service supplied (importance ordering is the service's
//! job, not ours).

use serde::Serialize;

use crate::analysis::models::{AnalysisResult, MarketTrend};

/// Placeholder when the service returned no positioning statement.
pub const NO_POSITIONING: &str = "No positioning available";
/// Placeholder when the service returned no outreach greeting.
pub const NO_GREETING: &str = "No outreach message generated.";
/// Placeholder when the service returned no work-style read.
pub const DEFAULT_WORK_STYLE: &str = "Professional and detail-oriented.";

/// At most this many core/soft skills are shown.
pub const MAX_SKILLS_SHOWN: usize = 5;

/// What the client should display for a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisView {
    /// No result yet — show the empty-state panel regardless of trends.
    Empty,
    Ready(ReadyView),
}

/// The fully-defaulted, truncated display structure for a received result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyView {
    pub positioning: String,
    pub improvements: Vec<String>,
    pub core_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub work_style: String,
    pub greeting: String,
    /// `None` hides the trend panel entirely; it renders only when non-empty.
    pub trends: Option<Vec<MarketTrend>>,
}

/// Composes the display structure for a session.
pub fn compose(result: Option<&AnalysisResult>, trends: &[MarketTrend]) -> AnalysisView {
    let Some(result) = result else {
        return AnalysisView::Empty;
    };

    let suggestions = result.suggestions.as_ref();
    let skills = result.extracted_skills.as_ref();

    AnalysisView::Ready(ReadyView {
        positioning: suggestions
            .and_then(|s| s.positioning.clone())
            .unwrap_or_else(|| NO_POSITIONING.to_string()),
        improvements: suggestions.map(|s| s.improvements.clone()).unwrap_or_default(),
        core_skills: skills
            .map(|s| truncate(&s.core))
            .unwrap_or_default(),
        soft_skills: skills
            .map(|s| truncate(&s.soft))
            .unwrap_or_default(),
        work_style: result
            .work_style
            .clone()
            .unwrap_or_else(|| DEFAULT_WORK_STYLE.to_string()),
        greeting: result
            .greeting
            .clone()
            .unwrap_or_else(|| NO_GREETING.to_string()),
        trends: if trends.is_empty() {
            None
        } else {
            Some(trends.to_vec())
        },
    })
}

fn truncate(skills: &[String]) -> Vec<String> {
    skills.iter().take(MAX_SKILLS_SHOWN).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{ExtractedSkills, Suggestions};

    fn full_result() -> AnalysisResult {
        AnalysisResult {
            extracted_skills: Some(ExtractedSkills {
                core: (1..=7).map(|i| format!("core-{i}")).collect(),
                soft: vec!["empathy".to_string(), "clarity".to_string()],
            }),
            work_style: Some("autonomous".to_string()),
            suggestions: Some(Suggestions {
                positioning: Some("platform specialist".to_string()),
                improvements: vec!["quantify impact".to_string()],
            }),
            greeting: Some("hello".to_string()),
        }
    }

    fn ready(view: AnalysisView) -> ReadyView {
        match view {
            AnalysisView::Ready(v) => v,
            AnalysisView::Empty => panic!("expected a ready view"),
        }
    }

    #[test]
    fn test_no_result_is_empty_regardless_of_trends() {
        let trends = vec![MarketTrend {
            trend: "t".to_string(),
            source: "s".to_string(),
        }];
        assert_eq!(compose(None, &trends), AnalysisView::Empty);
        assert_eq!(compose(None, &[]), AnalysisView::Empty);
    }

    #[test]
    fn test_core_skills_truncated_to_five_in_original_order() {
        let view = ready(compose(Some(&full_result()), &[]));
        assert_eq!(
            view.core_skills,
            vec!["core-1", "core-2", "core-3", "core-4", "core-5"]
        );
        // Shorter lists pass through untouched
        assert_eq!(view.soft_skills, vec!["empathy", "clarity"]);
    }

    #[test]
    fn test_missing_fields_become_placeholders() {
        let view = ready(compose(Some(&AnalysisResult::default()), &[]));
        assert_eq!(view.positioning, NO_POSITIONING);
        assert_eq!(view.greeting, NO_GREETING);
        assert_eq!(view.work_style, DEFAULT_WORK_STYLE);
        assert!(view.improvements.is_empty());
        assert!(view.core_skills.is_empty());
        assert!(view.soft_skills.is_empty());
    }

    #[test]
    fn test_missing_positioning_with_present_improvements() {
        let result = AnalysisResult {
            suggestions: Some(Suggestions {
                positioning: None,
                improvements: vec!["a".to_string()],
            }),
            ..AnalysisResult::default()
        };
        let view = ready(compose(Some(&result), &[]));
        assert_eq!(view.positioning, NO_POSITIONING);
        assert_eq!(view.improvements, vec!["a"]);
    }

    #[test]
    fn test_trend_panel_hidden_when_empty() {
        let view = ready(compose(Some(&full_result()), &[]));
        assert!(view.trends.is_none());
    }

    #[test]
    fn test_trend_panel_shown_when_nonempty() {
        let trends = vec![MarketTrend {
            trend: "t".to_string(),
            source: "s".to_string(),
        }];
        let view = ready(compose(Some(&full_result()), &trends));
        assert_eq!(view.trends, Some(trends));
    }

    #[test]
    fn test_view_serializes_with_state_tag() {
        let json = serde_json::to_value(AnalysisView::Empty).unwrap();
        assert_eq!(json["state"], "empty");
        let json = serde_json::to_value(compose(Some(&full_result()), &[])).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["positioning"], "platform specialist");
    }
}
