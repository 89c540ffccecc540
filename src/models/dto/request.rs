use serde::{de, Deserialize, Deserializer};
use validator::Validate;

/// Body of `POST /api/quiz-results`.
///
/// `score` only has to be present, while `total_questions` must also be
/// non-zero; see [`SubmitQuizResultRequest::has_questions`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResultRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub department: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required)]
    #[serde(default, deserialize_with = "deserialize_number")]
    pub score: Option<f64>,

    #[validate(required)]
    #[serde(default, deserialize_with = "deserialize_number")]
    pub total_questions: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

// Numbers may arrive as JSON numbers or numeric strings ("80"). A blank
// string counts as absent; any other non-numeric value is rejected.
fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid number: {:?}", text))),
    }
}

impl SubmitQuizResultRequest {
    pub fn has_questions(&self) -> bool {
        self.total_questions.is_some_and(|total| total != 0.0)
    }
}
