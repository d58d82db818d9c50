//! Snippet form validation
//!
//! The store accepts anything; these types are where the create form's
//! rules live.

use super::ValidationError;

/// Maximum title length in characters (matches `VARCHAR(100)`)
const MAX_TITLE_CHARS: usize = 100;

/// Validated snippet title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTitle(String);

impl SnippetTitle {
    /// Create a new snippet title.
    ///
    /// # Rules
    /// - Non-blank
    /// - Max 100 characters (counted as chars, not bytes)
    ///
    /// # Example
    /// ```
    /// use snippetbox_server::models::SnippetTitle;
    ///
    /// assert!(SnippetTitle::new("An old silent pond").is_ok());
    /// assert!(SnippetTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Blank { field: "title" });
        }

        if s.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_CHARS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated snippet content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetContent(String);

impl SnippetContent {
    /// Content only has to be non-blank.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Blank { field: "content" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Permitted snippet lifetimes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    OneDay,
    OneWeek,
    OneYear,
}

impl Expiry {
    pub fn from_days(days: i32) -> Result<Self, ValidationError> {
        match days {
            1 => Ok(Self::OneDay),
            7 => Ok(Self::OneWeek),
            365 => Ok(Self::OneYear),
            other => Err(ValidationError::NotPermitted {
                field: "expires",
                value: other.to_string(),
                allowed: "1, 7 or 365",
            }),
        }
    }

    pub fn days(self) -> i32 {
        match self {
            Self::OneDay => 1,
            Self::OneWeek => 7,
            Self::OneYear => 365,
        }
    }
}

/// A fully validated create-snippet form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: SnippetTitle,
    pub content: SnippetContent,
    pub expires: Expiry,
}

impl NewSnippet {
    /// Validate every field, reporting the first failure.
    pub fn new(title: &str, content: &str, expires_days: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            title: SnippetTitle::new(title)?,
            content: SnippetContent::new(content)?,
            expires: Expiry::from_days(expires_days)?,
        })
    }
}
