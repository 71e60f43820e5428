// All LLM prompt constants for Illuminator.
// The remote schema/prompt text is an external contract — changes here must
// stay in lockstep with the deserialization types in analysis::models.

/// Fit analysis prompt template.
/// Replace `{experience}` and `{jd_text}` before sending.
/// Output is localized to Simplified Chinese per the product contract.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career coach and HR strategist.

Candidate Experience:
{experience}

Target Job Description (JD):
{jd_text}

Please analyze the fit and provide a structured JSON response with **ALL CONTENT IN SIMPLIFIED CHINESE**:
1. 'extractedSkills':
   - Extract 'core' (technical/hard) skills and 'soft' traits from the JD.
   - **CRITICAL**: Sort both lists by **IMPORTANCE** (most critical to the role first).
   - Translate to Chinese.
2. 'workStyle': Infer the target employee's work style and personality preferences based on the JD tone and requirements. Provide in Chinese.
3. 'suggestions': Provide a concrete 'positioning' statement for the resume and a list of 'improvements' (actionable advice to bridge gaps). Provide in Chinese.
4. 'greeting': Draft a professional, concise outreach message to the Hiring Manager/HR in Chinese.
   - **Tone**: Confident, succinct, respectful, NOT overly enthusiastic or bubbly.
   - **Content**: Connect the candidate's top strength directly to the JD's core need.
   - **Length**: Max 3-4 sentences. It should feel like a senior-level intro.

Return a JSON object with this EXACT schema (no extra fields):
{
  "extractedSkills": {
    "core": ["..."],
    "soft": ["..."]
  },
  "workStyle": "...",
  "suggestions": {
    "positioning": "...",
    "improvements": ["..."]
  },
  "greeting": "..."
}

Think deeply about the hidden requirements in the JD."#;

/// Grounded market-trend prompt template. Replace `{role}` before sending.
/// The search tool makes strict JSON best-effort — the caller must tolerate
/// malformed output.
pub const TRENDS_PROMPT_TEMPLATE: &str = r#"Find 3 recent market trends or interview focuses for the role of "{role}" in 2024/2025. Return a JSON array of objects with "trend" and "source" fields. Ensure the content is in Simplified Chinese."#;

/// Builds the fit analysis prompt from the two user-supplied text blobs.
pub fn analysis_prompt(experience: &str, jd_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{experience}", experience)
        .replace("{jd_text}", jd_text)
}

/// Builds the market-trend prompt for a role hint.
pub fn trends_prompt(role: &str) -> String {
    TRENDS_PROMPT_TEMPLATE.replace("{role}", role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_substitutes_both_fields() {
        let prompt = analysis_prompt("ten years of Rust", "senior backend role");
        assert!(prompt.contains("ten years of Rust"));
        assert!(prompt.contains("senior backend role"));
        assert!(!prompt.contains("{experience}"));
        assert!(!prompt.contains("{jd_text}"));
    }

    #[test]
    fn test_trends_prompt_substitutes_role() {
        let prompt = trends_prompt("Platform Engineer");
        assert!(prompt.contains("\"Platform Engineer\""));
        assert!(!prompt.contains("{role}"));
    }
}
