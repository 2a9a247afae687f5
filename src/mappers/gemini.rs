// Gemini response shape extraction
use serde_json::Value;

/// Pull the first candidate's first text part out of a generateContent
/// response. Total over any input shape: a missing or mismatched key
/// yields `None`, never an error.
pub fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}
