//! Turning user input into a list of ingredient names.
//!
//! Photos need an external vision backend, which this service does not ship.
//! The HTTP layer treats any recognizer error as a cue to fall back to a
//! configured default list instead of failing the request.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    #[error("Image recognition is not configured")]
    ImageUnsupported,

    #[error("Recognizer backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionInput {
    List(Vec<String>),
    /// Free text, one or more ingredients per line or separated by commas.
    Text(String),
    /// Base64 image, optionally as a `data:` URL.
    Image(String),
}

#[async_trait]
pub trait IngredientRecognizer: Send + Sync {
    async fn recognize(&self, input: &RecognitionInput) -> Result<Vec<String>, RecognizerError>;
}

/// Trim, drop blanks and remove case-insensitive duplicates, keeping the
/// first spelling seen.
pub fn clean_ingredients<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

/// Accepts typed lists and text; rejects images. Blank input yields an
/// empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualRecognizer;

#[async_trait]
impl IngredientRecognizer for ManualRecognizer {
    async fn recognize(&self, input: &RecognitionInput) -> Result<Vec<String>, RecognizerError> {
        let found = match input {
            RecognitionInput::List(items) => clean_ingredients(items),
            RecognitionInput::Text(text) => clean_ingredients(text.split([',', '\n', ';'])),
            RecognitionInput::Image(_) => return Err(RecognizerError::ImageUnsupported),
        };

        tracing::debug!(count = found.len(), "Ingredients recognized");

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_ingredients() {
        let cleaned = clean_ingredients(["  Chicken ", "", "garlic", "chicken", "GARLIC", "rice"]);

        assert_eq!(cleaned, vec!["Chicken", "garlic", "rice"]);
    }

    #[tokio::test]
    async fn test_manual_recognizer_splits_text() {
        let found = ManualRecognizer
            .recognize(&RecognitionInput::Text("eggs, milk\nbutter; ".to_string()))
            .await
            .unwrap();

        assert_eq!(found, vec!["eggs", "milk", "butter"]);
    }

    #[tokio::test]
    async fn test_manual_recognizer_rejects_images() {
        let image = ManualRecognizer
            .recognize(&RecognitionInput::Image("data:image/jpeg;base64,AAAA".to_string()))
            .await;
        assert_eq!(image, Err(RecognizerError::ImageUnsupported));
    }

    #[tokio::test]
    async fn test_manual_recognizer_blank_list_is_empty() {
        let blank = ManualRecognizer
            .recognize(&RecognitionInput::List(vec![" ".to_string(), String::new()]))
            .await;

        assert_eq!(blank, Ok(Vec::new()));
    }
}
