//! Request and response schemas
//!
//! Data types shared between the quiz service client and the pages.

pub mod quiz;

pub use quiz::{
    Difficulty, QuestionType, QuizQuery, QuizRequestParams, QuizResponse, DEFAULT_DIFFICULTY,
    DEFAULT_QUESTION_TYPE,
};
