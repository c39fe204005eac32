//! Property-based tests for the scoring engine.
//!
//! - No points are lost or double counted for any answer sequence
//! - Every leader of a recommendation holds the tally's maximum
//! - Replay order never changes the tally

use proptest::prelude::*;

use super::{
    AnswerEvent, Question, QuestionCatalog, QuizOption, ScoreTally, ScoringEngine,
    StreamDefinition, StreamTag,
};

fn stream_pool() -> Vec<StreamTag> {
    ["science", "commerce", "arts", "vocational", "design", "sports"]
        .iter()
        .map(|t| StreamTag::new(*t).unwrap())
        .collect()
}

/// Catalog with 1-8 questions of 1-6 options, weights 0-5, over 1-6 streams.
fn arb_catalog() -> impl Strategy<Value = QuestionCatalog> {
    (1usize..=6).prop_flat_map(|stream_count| {
        let option = (0..stream_count, 0u32..=5);
        let question = prop::collection::vec(option, 1..=6);
        prop::collection::vec(question, 1..=8).prop_map(move |questions| {
            let pool = stream_pool();
            let streams = pool[..stream_count]
                .iter()
                .map(|t| StreamDefinition::new(t.clone(), t.as_str()))
                .collect();
            let questions = questions
                .into_iter()
                .enumerate()
                .map(|(q, options)| {
                    Question::new(
                        format!("question {}", q),
                        options
                            .into_iter()
                            .map(|(s, points)| QuizOption::new("option", pool[s].clone(), points))
                            .collect(),
                    )
                })
                .collect();
            QuestionCatalog::new(streams, questions).unwrap()
        })
    })
}

/// A catalog plus a sequence of in-range answers (repeats allowed).
fn arb_catalog_and_answers() -> impl Strategy<Value = (QuestionCatalog, Vec<AnswerEvent>)> {
    arb_catalog().prop_flat_map(|catalog| {
        let option_counts: Vec<usize> = catalog.questions().iter().map(|q| q.options.len()).collect();
        let answer = (0..option_counts.len()).prop_flat_map(move |q| {
            (Just(q), 0..option_counts[q]).prop_map(|(q, o)| AnswerEvent::new(q, o))
        });
        (Just(catalog), prop::collection::vec(answer, 0..20))
    })
}

proptest! {
    #[test]
    fn tally_total_equals_selected_weights((catalog, answers) in arb_catalog_and_answers()) {
        let engine = ScoringEngine::new(&catalog);
        let tally = engine.replay(&answers).unwrap();

        let expected: u64 = answers
            .iter()
            .map(|&a| u64::from(catalog.option(a).unwrap().points))
            .sum();
        prop_assert_eq!(tally.total(), expected);
    }

    #[test]
    fn leaders_hold_the_maximum((catalog, answers) in arb_catalog_and_answers()) {
        let engine = ScoringEngine::new(&catalog);
        let tally = engine.replay(&answers).unwrap();

        match engine.recommend(&tally) {
            Ok(rec) => {
                let max = tally.max_score().unwrap();
                prop_assert!(!rec.leaders().is_empty());
                for leader in rec.leaders() {
                    prop_assert_eq!(tally.score(leader), Some(max));
                }
                let tied = tally.iter().filter(|&(_, s)| s == max).count();
                prop_assert_eq!(rec.leaders().len(), tied);
            }
            Err(_) => prop_assert!(answers.is_empty()),
        }
    }

    #[test]
    fn replay_order_is_irrelevant((catalog, answers) in arb_catalog_and_answers()) {
        let engine = ScoringEngine::new(&catalog);
        let mut reversed = answers.clone();
        reversed.reverse();

        prop_assert_eq!(engine.replay(&answers).unwrap(), engine.replay(&reversed).unwrap());
    }

    #[test]
    fn incremental_recording_matches_replay((catalog, answers) in arb_catalog_and_answers()) {
        let engine = ScoringEngine::new(&catalog);
        let mut tally = ScoreTally::new();
        for answer in &answers {
            tally = engine.record_answer(tally, answer.question, answer.option).unwrap();
        }

        prop_assert_eq!(tally, engine.replay(&answers).unwrap());
    }
}
