//! Question catalog - the externally authored quiz content.
//!
//! A catalog declares its streams up front and every option must point at one
//! of them. Declaration order matters: it is the tie-break order used when a
//! single recommended stream is needed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{AnswerEvent, CatalogError, QuizError, StreamTag};
use crate::domain::foundation::ValidationError;

/// A stream the catalog can recommend, with its user-facing name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDefinition {
    pub tag: StreamTag,
    pub display_name: String,
}

impl StreamDefinition {
    pub fn new(tag: StreamTag, display_name: impl Into<String>) -> Self {
        Self {
            tag,
            display_name: display_name.into(),
        }
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub stream: StreamTag,
    pub points: u32,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, stream: StreamTag, points: u32) -> Self {
        Self {
            text: text.into(),
            stream,
            points,
        }
    }
}

/// A multiple-choice question. Its position in the catalog is its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }
}

/// Ordered list of questions plus the closed set of streams they score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    streams: Vec<StreamDefinition>,
    questions: Vec<Question>,
}

/// Shape of a catalog file before validation.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    streams: Vec<StreamDefinition>,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a validated catalog.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no streams, no questions, or a question
    ///   without options
    /// - `Duplicate` if a stream is declared twice
    /// - `UnknownReference` if an option scores an undeclared stream
    pub fn new(
        streams: Vec<StreamDefinition>,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let catalog = Self { streams, questions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        Ok(Self::new(document.streams, document.questions)?)
    }

    /// Reads, parses and validates a YAML catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// The five-question aptitude quiz shipped with the site.
    pub fn reference() -> Self {
        let science = StreamTag::science;
        let commerce = StreamTag::commerce;
        let arts = StreamTag::arts;
        let vocational = StreamTag::vocational;

        let question = |prompt: &str, texts: [&str; 4], points: u32| {
            Question::new(
                prompt,
                vec![
                    QuizOption::new(texts[0], science(), points),
                    QuizOption::new(texts[1], commerce(), points),
                    QuizOption::new(texts[2], arts(), points),
                    QuizOption::new(texts[3], vocational(), points),
                ],
            )
        };

        Self {
            streams: vec![
                StreamDefinition::new(science(), "Science Stream"),
                StreamDefinition::new(commerce(), "Commerce Stream"),
                StreamDefinition::new(arts(), "Arts Stream"),
                StreamDefinition::new(vocational(), "Vocational Courses"),
            ],
            questions: vec![
                question(
                    "What type of activities do you enjoy most?",
                    [
                        "Solving math problems and experiments",
                        "Managing money and business planning",
                        "Reading, writing, and discussing ideas",
                        "Building and fixing things with hands",
                    ],
                    3,
                ),
                question(
                    "Which subject do you find most interesting?",
                    [
                        "Physics, Chemistry, Biology",
                        "Mathematics, Economics, Accounting",
                        "History, Literature, Psychology",
                        "Computer Skills, Technical Drawing",
                    ],
                    3,
                ),
                question(
                    "What's your preferred learning style?",
                    [
                        "Experiments and logical analysis",
                        "Case studies and data analysis",
                        "Discussions and creative projects",
                        "Hands-on practical training",
                    ],
                    2,
                ),
                question(
                    "What motivates you the most?",
                    [
                        "Making scientific discoveries",
                        "Building successful business",
                        "Helping society and expressing creativity",
                        "Creating something useful with skills",
                    ],
                    2,
                ),
                question(
                    "Where do you see yourself working?",
                    [
                        "Hospital, Lab, or Tech Company",
                        "Bank, Corporate Office, or Startup",
                        "Government, Media, or NGO",
                        "Workshop, Factory, or Field Work",
                    ],
                    3,
                ),
            ],
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn streams(&self) -> &[StreamDefinition] {
        &self.streams
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Resolves an answer to the option it selects.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if either index is out of range
    pub fn option(&self, answer: AnswerEvent) -> Result<&QuizOption, QuizError> {
        let question = self
            .questions
            .get(answer.question)
            .ok_or_else(|| QuizError::invalid_question(answer.question))?;
        question
            .options
            .get(answer.option)
            .ok_or_else(|| QuizError::invalid_option(answer.question, answer.option))
    }

    /// Position of a stream in the declaration order.
    pub fn declaration_index(&self, tag: &StreamTag) -> Option<usize> {
        self.streams.iter().position(|s| &s.tag == tag)
    }

    pub fn display_name(&self, tag: &StreamTag) -> Option<&str> {
        self.streams
            .iter()
            .find(|s| &s.tag == tag)
            .map(|s| s.display_name.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate(&self) -> Result<(), ValidationError> {
        if self.streams.is_empty() {
            return Err(ValidationError::empty_field("streams"));
        }
        if self.questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut declared = HashSet::new();
        for stream in &self.streams {
            if !declared.insert(&stream.tag) {
                return Err(ValidationError::duplicate("streams", stream.tag.as_str()));
            }
        }

        for (q, question) in self.questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(ValidationError::empty_field(format!("questions[{}].options", q)));
            }
            for (o, option) in question.options.iter().enumerate() {
                if !declared.contains(&option.stream) {
                    return Err(ValidationError::unknown_reference(
                        format!("questions[{}].options[{}].stream", q, o),
                        option.stream.as_str(),
                    ));
                }
            }
        }

        Ok(())
    }
}
