//! Scoring Engine - additive stream scoring and recommendation.
//!
//! The engine is pure: it never holds answers itself. Callers fold answers
//! into a [`ScoreTally`] one at a time (or replay a batch in any order) and ask
//! for a [`Recommendation`] once at least one answer is in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{QuestionCatalog, QuizError, Recommendation, ScoreTally, StreamTag};

/// A recorded answer: which option was chosen for which question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerEvent {
    pub question: usize,
    pub option: usize,
}

impl AnswerEvent {
    pub fn new(question: usize, option: usize) -> Self {
        Self { question, option }
    }
}

/// Scores answers against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    /// Adds the chosen option's points to its stream.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if `question` or `option` is out of range; the input
    ///   tally is consumed either way
    pub fn record_answer(
        &self,
        tally: ScoreTally,
        question: usize,
        option: usize,
    ) -> Result<ScoreTally, QuizError> {
        self.record(tally, AnswerEvent::new(question, option))
    }

    /// Same as [`record_answer`](Self::record_answer) for an [`AnswerEvent`].
    pub fn record(&self, tally: ScoreTally, answer: AnswerEvent) -> Result<ScoreTally, QuizError> {
        let option = self.catalog.option(answer)?;
        Ok(tally.with_points(&option.stream, option.points))
    }

    /// Folds a batch of answers into a fresh tally, in the order given.
    pub fn replay(&self, answers: &[AnswerEvent]) -> Result<ScoreTally, QuizError> {
        answers
            .iter()
            .try_fold(ScoreTally::new(), |tally, &answer| self.record(tally, answer))
    }

    /// True when the answer count matches the question count.
    pub fn is_complete(answered_count: usize, total_questions: usize) -> bool {
        answered_count == total_questions
    }

    /// True when every catalog question is answered exactly once, in any order.
    pub fn covers_every_question(&self, answers: &[AnswerEvent]) -> bool {
        if !Self::is_complete(answers.len(), self.catalog.len()) {
            return false;
        }
        let mut seen = HashSet::with_capacity(answers.len());
        answers
            .iter()
            .all(|a| a.question < self.catalog.len() && seen.insert(a.question))
    }

    /// Returns every stream tied at the maximum score.
    ///
    /// Leaders are ordered by catalog declaration; tags the catalog does not
    /// declare (hand-built tallies) sort after declared ones, alphabetically.
    ///
    /// # Errors
    ///
    /// - `NoAnswers` if the tally is empty
    pub fn recommend(&self, tally: &ScoreTally) -> Result<Recommendation, QuizError> {
        let top_score = tally.max_score().ok_or(QuizError::NoAnswers)?;

        let mut leaders: Vec<StreamTag> = tally
            .iter()
            .filter(|&(_, score)| score == top_score)
            .map(|(tag, _)| tag.clone())
            .collect();
        leaders.sort_by(|a, b| {
            let rank = |tag: &StreamTag| self.catalog.declaration_index(tag).unwrap_or(usize::MAX);
            rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
        });

        Ok(Recommendation::new(leaders, top_score, tally.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{Question, QuizOption, StreamDefinition};

    /// Five questions, every option worth 3 points, options in
    /// science/commerce/arts/vocational order.
    fn flat_catalog() -> QuestionCatalog {
        let options = || {
            vec![
                QuizOption::new("s", StreamTag::science(), 3),
                QuizOption::new("c", StreamTag::commerce(), 3),
                QuizOption::new("a", StreamTag::arts(), 3),
                QuizOption::new("v", StreamTag::vocational(), 3),
            ]
        };
        QuestionCatalog::new(
            vec![
                StreamDefinition::new(StreamTag::science(), "Science"),
                StreamDefinition::new(StreamTag::commerce(), "Commerce"),
                StreamDefinition::new(StreamTag::arts(), "Arts"),
                StreamDefinition::new(StreamTag::vocational(), "Vocational"),
            ],
            (0..5).map(|i| Question::new(format!("q{}", i), options())).collect(),
        )
        .unwrap()
    }

    mod record_answer {
        use super::*;

        #[test]
        fn adds_option_weight_to_its_stream() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);

            let tally = engine.record_answer(ScoreTally::new(), 2, 3).unwrap();
            assert_eq!(tally.score(&StreamTag::vocational()), Some(2));
        }

        #[test]
        fn rejects_question_out_of_range() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);

            let result = engine.record_answer(ScoreTally::new(), 5, 0);
            assert_eq!(
                result,
                Err(QuizError::InvalidIndex {
                    question: 5,
                    option: None
                })
            );
        }

        #[test]
        fn rejects_option_out_of_range() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);

            let result = engine.record_answer(ScoreTally::new(), 0, 4);
            assert_eq!(
                result,
                Err(QuizError::InvalidIndex {
                    question: 0,
                    option: Some(4)
                })
            );
        }
    }

    mod replay {
        use super::*;

        #[test]
        fn science_heavy_answers_tally_twelve_to_three() {
            let catalog = flat_catalog();
            let engine = ScoringEngine::new(&catalog);
            let answers = [0, 0, 1, 0, 0]
                .iter()
                .enumerate()
                .map(|(q, &o)| AnswerEvent::new(q, o))
                .collect::<Vec<_>>();

            let tally = engine.replay(&answers).unwrap();

            assert_eq!(tally.score(&StreamTag::science()), Some(12));
            assert_eq!(tally.score(&StreamTag::commerce()), Some(3));
            assert_eq!(tally.len(), 2);

            let rec = engine.recommend(&tally).unwrap();
            assert_eq!(rec.leaders(), &[StreamTag::science()]);
        }

        #[test]
        fn maximal_weights_sum_without_loss() {
            let catalog = QuestionCatalog::new(
                vec![StreamDefinition::new(StreamTag::arts(), "Arts")],
                vec![
                    Question::new("q0", vec![QuizOption::new("big", StreamTag::arts(), u32::MAX)]),
                    Question::new("q1", vec![QuizOption::new("small", StreamTag::arts(), 5)]),
                ],
            )
            .unwrap();
            let engine = ScoringEngine::new(&catalog);

            let tally = engine
                .replay(&[AnswerEvent::new(0, 0), AnswerEvent::new(1, 0)])
                .unwrap();

            assert_eq!(tally.total(), u64::from(u32::MAX) + 5);
            let rec = engine.recommend(&tally).unwrap();
            assert_eq!(rec.top_score(), 4_294_967_300);
            assert!(!rec.is_tie());
        }

        #[test]
        fn order_of_answers_does_not_change_tally() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let forward = vec![
                AnswerEvent::new(0, 2),
                AnswerEvent::new(1, 1),
                AnswerEvent::new(2, 2),
                AnswerEvent::new(3, 0),
                AnswerEvent::new(4, 3),
            ];
            let mut backward = forward.clone();
            backward.reverse();

            assert_eq!(engine.replay(&forward), engine.replay(&backward));
        }

        #[test]
        fn stops_at_first_invalid_answer() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);

            let result = engine.replay(&[AnswerEvent::new(0, 0), AnswerEvent::new(9, 0)]);
            assert!(matches!(result, Err(QuizError::InvalidIndex { question: 9, .. })));
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn complete_only_when_counts_match() {
            assert!(ScoringEngine::is_complete(5, 5));
            assert!(!ScoringEngine::is_complete(4, 5));
            assert!(!ScoringEngine::is_complete(0, 5));
        }

        #[test]
        fn covers_every_question_in_any_order() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let shuffled = [3, 0, 4, 1, 2].map(|q| AnswerEvent::new(q, 0));

            assert!(engine.covers_every_question(&shuffled));
        }

        #[test]
        fn duplicate_question_is_not_coverage() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let doubled = [0, 0, 1, 2, 3].map(|q| AnswerEvent::new(q, 0));

            assert!(!engine.covers_every_question(&doubled));
        }
    }

    mod recommend {
        use super::*;

        #[test]
        fn empty_tally_has_no_recommendation() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);

            assert_eq!(engine.recommend(&ScoreTally::new()), Err(QuizError::NoAnswers));
        }

        #[test]
        fn tie_keeps_every_leader() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let tally: ScoreTally = [(StreamTag::vocational(), 6), (StreamTag::arts(), 6)]
                .into_iter()
                .collect();

            let rec = engine.recommend(&tally).unwrap();

            assert!(rec.is_tie());
            assert_eq!(rec.leaders(), &[StreamTag::arts(), StreamTag::vocational()]);
            assert_eq!(rec.top_score(), 6);
        }

        #[test]
        fn primary_is_first_declared_leader() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let tally: ScoreTally = [
                (StreamTag::vocational(), 5),
                (StreamTag::commerce(), 5),
                (StreamTag::science(), 2),
            ]
            .into_iter()
            .collect();

            let rec = engine.recommend(&tally).unwrap();
            assert_eq!(rec.primary(), &StreamTag::commerce());
            assert!(!rec.contains(&StreamTag::science()));
        }

        #[test]
        fn undeclared_tags_sort_after_declared_ones() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let tally: ScoreTally = [
                (StreamTag::new("design").unwrap(), 4),
                (StreamTag::arts(), 4),
            ]
            .into_iter()
            .collect();

            let rec = engine.recommend(&tally).unwrap();
            assert_eq!(rec.primary(), &StreamTag::arts());
        }

        #[test]
        fn all_zero_tally_recommends_every_entry() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let tally = ScoreTally::new()
                .with_points(&StreamTag::science(), 0)
                .with_points(&StreamTag::arts(), 0);

            let rec = engine.recommend(&tally).unwrap();
            assert_eq!(rec.leaders().len(), 2);
            assert_eq!(rec.top_score(), 0);
        }

        #[test]
        fn recommendation_carries_full_tally() {
            let catalog = QuestionCatalog::reference();
            let engine = ScoringEngine::new(&catalog);
            let tally = engine
                .replay(&[AnswerEvent::new(0, 0), AnswerEvent::new(1, 1)])
                .unwrap();

            let rec = engine.recommend(&tally).unwrap();
            assert_eq!(rec.tally(), &tally);
            assert_eq!(rec.leaders().len(), 2);
        }
    }
}
