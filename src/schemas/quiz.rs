//! Quiz service request/response types
//!
//! Types exchanged with the upstream quiz-generation service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty sent when the caller does not pick one
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Question type sent when the caller does not pick one
pub const DEFAULT_QUESTION_TYPE: &str = "mcq";

// ============================================================================
// Request
// ============================================================================

/// Parameters for a single quiz-generation request
///
/// All three values are always present. Difficulty and question type are
/// free-form: the upstream service decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequestParams {
    pub topic: String,
    pub difficulty: String,
    #[serde(rename = "q_type")]
    pub question_type: String,
}

impl QuizRequestParams {
    /// Create params for `topic` with the default difficulty and question type
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            question_type: DEFAULT_QUESTION_TYPE.to_string(),
        }
    }

    /// Build params from optional parts, applying defaults for `None`
    pub fn from_parts(
        topic: impl Into<String>,
        difficulty: Option<String>,
        question_type: Option<String>,
    ) -> Self {
        let mut params = Self::new(topic);
        if let Some(difficulty) = difficulty {
            params.difficulty = difficulty;
        }
        if let Some(question_type) = question_type {
            params.question_type = question_type;
        }
        params
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_question_type(mut self, question_type: impl Into<String>) -> Self {
        self.question_type = question_type.into();
        self
    }

    /// Query pairs in the order the service documents them
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("topic", self.topic.as_str()),
            ("difficulty", self.difficulty.as_str()),
            ("q_type", self.question_type.as_str()),
        ]
    }
}

/// Query string accepted by the quiz page and the JSON quiz endpoint
///
/// Blank values count as missing, since an empty form field still submits
/// its name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizQuery {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub q_type: Option<String>,
}

impl QuizQuery {
    pub fn topic(&self) -> Option<&str> {
        non_blank(&self.topic)
    }

    pub fn difficulty(&self) -> Option<&str> {
        non_blank(&self.difficulty)
    }

    pub fn question_type(&self) -> Option<&str> {
        non_blank(&self.q_type)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Response
// ============================================================================

/// Successful body returned by `GET /generate`
///
/// Only the `quiz` field is read; everything else the service sends is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz: String,
}

// ============================================================================
// Known values
// ============================================================================

/// Difficulty levels the service understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question formats the service understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Mcq,
    TrueFalse,
    Image,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::Mcq,
        QuestionType::TrueFalse,
        QuestionType::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::TrueFalse => "true_false",
            QuestionType::Image => "image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "Multiple choice",
            QuestionType::TrueFalse => "True / False",
            QuestionType::Image => "Image based",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
