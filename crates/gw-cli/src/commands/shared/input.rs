use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read a whole file as text.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read and deserialize a JSON file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use gw_core::entities::QuizAnswer;

    use super::*;

    #[test]
    fn reads_typed_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"[{"question_id":"q1","answer":"B"}]"#).unwrap();
        let answers: Vec<QuizAnswer> = read_json_file(&path).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].answer, "B");
    }

    #[test]
    fn names_file_on_bad_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();
        let err = read_json_file::<Vec<QuizAnswer>>(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_text(&dir.path().join("absent.txt")).is_err());
    }
}
