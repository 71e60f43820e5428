// The analysis lifecycle: data contracts, the status state machine, trend
// parsing with its explicit fallback branch, and the results renderer.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod intel;
pub mod models;
pub mod orchestrator;
pub mod trends;
pub mod view;
