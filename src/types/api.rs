use serde::Deserialize;

use crate::ApiError;

/// Body of a paste creation request.
#[derive(Debug, Deserialize)]
pub struct NewPaste {
    pub title: Option<String>,
    pub pastebody: Option<String>,
}

impl NewPaste {
    /// The paste body, rejecting absent or empty text.
    pub fn pastebody(&self) -> Result<&str, ApiError> {
        self.pastebody
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingPasteBody)
    }
}

/// Body of a comment creation request.
#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub commentbody: Option<String>,
}

impl NewComment {
    /// The comment body, rejecting absent or empty text.
    pub fn commentbody(&self) -> Result<&str, ApiError> {
        self.commentbody
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingCommentBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_body_present() {
        let body: NewPaste = serde_json::from_str(r#"{"pastebody":"hello"}"#).unwrap();
        assert_eq!(body.pastebody().unwrap(), "hello");
        assert_eq!(body.title, None);
    }

    #[test]
    fn paste_body_absent() {
        let body: NewPaste = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert!(matches!(body.pastebody(), Err(ApiError::MissingPasteBody)));
    }

    #[test]
    fn paste_body_empty() {
        let body: NewPaste = serde_json::from_str(r#"{"pastebody":""}"#).unwrap();
        assert!(matches!(body.pastebody(), Err(ApiError::MissingPasteBody)));
    }

    #[test]
    fn comment_body_absent() {
        let body: NewComment = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            body.commentbody(),
            Err(ApiError::MissingCommentBody)
        ));
    }

    #[test]
    fn comment_body_present() {
        let body: NewComment = serde_json::from_str(r#"{"commentbody":"nice"}"#).unwrap();
        assert_eq!(body.commentbody().unwrap(), "nice");
    }
}
