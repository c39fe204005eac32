//! Quiz attempt - the sequential answering flow shown to students.
//!
//! One question at a time, no skipping, no going back: pick an option (the
//! pick can change), then advance. The scoring engine underneath does not
//! care about any of this; it is only the presentation policy.

use std::sync::Arc;

use super::{
    AnswerEvent, Question, QuestionCatalog, QuizError, Recommendation, ScoreTally, ScoringEngine,
};

/// What happened when the attempt advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStep {
    /// Moved on to the question at this index.
    NextQuestion(usize),
    /// The last question was answered.
    Finished,
}

/// One student's walk through a catalog.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    catalog: Arc<QuestionCatalog>,
    current: usize,
    selected: Option<usize>,
    answers: Vec<AnswerEvent>,
    tally: ScoreTally,
    finished: bool,
}

impl QuizAttempt {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            catalog,
            current: 0,
            selected: None,
            answers: Vec::new(),
            tally: ScoreTally::new(),
            finished: false,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question awaiting an answer, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.catalog.question(self.current)
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Marks an option of the current question as chosen.
    ///
    /// # Errors
    ///
    /// - `AttemptFinished` after the last question
    /// - `InvalidIndex` if the current question has no such option
    pub fn select_option(&mut self, option: usize) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::AttemptFinished);
        }
        self.catalog
            .option(AnswerEvent::new(self.current, option))?;
        self.selected = Some(option);
        Ok(())
    }

    /// Records the selection and moves to the next question.
    ///
    /// # Errors
    ///
    /// - `AttemptFinished` after the last question
    /// - `NoSelection` if no option is selected
    pub fn advance(&mut self) -> Result<AttemptStep, QuizError> {
        if self.finished {
            return Err(QuizError::AttemptFinished);
        }
        let option = self.selected.ok_or(QuizError::NoSelection)?;
        let answer = AnswerEvent::new(self.current, option);

        let engine = ScoringEngine::new(&self.catalog);
        self.tally = engine.record(std::mem::take(&mut self.tally), answer)?;
        self.answers.push(answer);
        self.selected = None;

        if self.current + 1 < self.catalog.len() {
            self.current += 1;
            Ok(AttemptStep::NextQuestion(self.current))
        } else {
            self.finished = true;
            Ok(AttemptStep::Finished)
        }
    }

    /// Percentage shown on the progress bar: the current question's
    /// one-based position over the question count.
    pub fn progress_percent(&self) -> f64 {
        let total = self.catalog.len();
        if total == 0 {
            return 100.0;
        }
        let position = if self.finished { total } else { self.current + 1 };
        position as f64 / total as f64 * 100.0
    }

    pub fn answers(&self) -> &[AnswerEvent] {
        &self.answers
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Recommendation from the answers recorded so far.
    ///
    /// # Errors
    ///
    /// - `NoAnswers` before the first advance
    pub fn result(&self) -> Result<Recommendation, QuizError> {
        ScoringEngine::new(&self.catalog).recommend(&self.tally)
    }

    /// Starts over on the same catalog.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.answers.clear();
        self.tally = ScoreTally::new();
        self.finished = false;
    }
}
