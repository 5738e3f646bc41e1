//! Quiz scoring: turns answers into ranked path recommendations.
//! Pure over the catalog so the ranking rules are testable without a
//! database.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::quiz::dto::{QuizAnswer, RecommendedPath};

pub const DEFAULT_LEARNING_STYLE: &str = "all";
pub const DEFAULT_TIME_MULTIPLIER: f64 = 1.5;
/// Returned when no answered option scored any path.
pub const DEFAULT_ESTIMATED_WEEKS: i64 = 24;

const SCORE_PER_MATCH: i64 = 10;
const MAX_RECOMMENDATIONS: usize = 3;
const RECOMMENDATION_REASON: &str = "Great fit based on your interests and learning style";

#[derive(Debug)]
pub struct QuizOutcome {
    pub recommendations: Vec<RecommendedPath>,
    pub learning_style: String,
}

/// Scores a submission against the question bank.
///
/// Answers referencing an unknown question id (or an out-of-range
/// option index) are silently skipped. The learning style and time
/// multiplier are last-one-wins. Ranking is by total score descending;
/// ties resolve to catalog order because candidates are collected in
/// catalog order and the sort is stable.
pub fn score_submission(catalog: &Catalog, answers: &[QuizAnswer]) -> QuizOutcome {
    let mut scores: HashMap<&str, i64> = HashMap::new();
    let mut learning_style = DEFAULT_LEARNING_STYLE.to_string();
    let mut time_multiplier = DEFAULT_TIME_MULTIPLIER;

    for answer in answers {
        let Some(question) = catalog.question(&answer.question_id) else {
            continue;
        };
        let Some(option) = question.options.get(answer.selected_option) else {
            continue;
        };

        for path_id in &option.paths {
            *scores.entry(path_id.as_str()).or_insert(0) += SCORE_PER_MATCH;
        }
        if let Some(preference) = &option.preference {
            learning_style = preference.clone();
        }
        if let Some(multiplier) = option.time_multiplier {
            time_multiplier = multiplier;
        }
    }

    let mut ranked: Vec<(&crate::catalog::CareerPath, i64)> = catalog
        .paths
        .iter()
        .filter_map(|path| scores.get(path.id.as_str()).map(|score| (path, *score)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let recommendations = ranked
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(path, score)| RecommendedPath {
            path_id: path.id.clone(),
            path_name: path.name.clone(),
            score,
            estimated_weeks: estimated_weeks(path.total_estimated_days(), time_multiplier),
            reason: RECOMMENDATION_REASON.into(),
        })
        .collect();

    QuizOutcome {
        recommendations,
        learning_style,
    }
}

/// `floor((total_days / 7) * multiplier)` with integer truncation.
pub fn estimated_weeks(total_days: i64, multiplier: f64) -> i64 {
    ((total_days as f64 / 7.0) * multiplier) as i64
}

/// The top pick's estimate, or the fixed default when nothing scored.
pub fn completion_estimate(recommendations: &[RecommendedPath]) -> i64 {
    recommendations
        .first()
        .map(|r| r.estimated_weeks)
        .unwrap_or(DEFAULT_ESTIMATED_WEEKS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        CareerPath, Catalog, Milestone, QuizOption, QuizQuestion,
    };
    use time::OffsetDateTime;

    fn path(id: &str, name: &str, milestone_days: &[i64]) -> CareerPath {
        CareerPath {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            created_at: OffsetDateTime::now_utc(),
            milestones: milestone_days
                .iter()
                .enumerate()
                .map(|(i, days)| Milestone {
                    id: format!("{id}-m{i}"),
                    title: String::new(),
                    description: String::new(),
                    order: i as u32 + 1,
                    resources: vec![],
                    estimated_days: *days,
                })
                .collect(),
        }
    }

    fn option(paths: &[&str], preference: Option<&str>, multiplier: Option<f64>) -> QuizOption {
        QuizOption {
            text: String::new(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            preference: preference.map(Into::into),
            time_multiplier: multiplier,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog {
            paths: vec![
                path("path-a", "Path A", &[35, 35]),
                path("path-b", "Path B", &[14, 14]),
                path("path-c", "Path C", &[7, 7, 7]),
                path("path-d", "Path D", &[21]),
            ],
            questions: vec![
                QuizQuestion {
                    id: "q1".into(),
                    question: String::new(),
                    options: vec![
                        option(&["path-a"], None, None),
                        option(&["path-b", "path-c"], None, None),
                    ],
                },
                QuizQuestion {
                    id: "q2".into(),
                    question: String::new(),
                    options: vec![
                        option(&["path-a"], None, None),
                        option(&["path-d"], None, None),
                    ],
                },
                QuizQuestion {
                    id: "q3".into(),
                    question: String::new(),
                    options: vec![
                        option(&[], Some("video"), None),
                        option(&[], None, Some(1.0)),
                    ],
                },
            ],
            achievements: vec![],
        }
    }

    fn answer(question_id: &str, selected_option: usize) -> QuizAnswer {
        QuizAnswer {
            question_id: question_id.into(),
            selected_option,
        }
    }

    #[test]
    fn highest_score_wins_and_ties_break_by_catalog_order() {
        let catalog = test_catalog();
        // q1 opt0 and q2 opt0 each score A, q1 opt1 scores B and C.
        let outcome = score_submission(
            &catalog,
            &[answer("q1", 0), answer("q2", 0), answer("q1", 1)],
        );
        // A = 20, B = 10, C = 10. Ties keep catalog order: B before C.
        let ids: Vec<&str> = outcome
            .recommendations
            .iter()
            .map(|r| r.path_id.as_str())
            .collect();
        assert_eq!(ids, vec!["path-a", "path-b", "path-c"]);
        assert_eq!(outcome.recommendations[0].score, 20);
        assert_eq!(outcome.recommendations[1].score, 10);
        assert_eq!(outcome.recommendations[2].score, 10);
    }

    #[test]
    fn at_most_three_recommendations() {
        let catalog = test_catalog();
        let outcome = score_submission(
            &catalog,
            &[answer("q1", 0), answer("q1", 1), answer("q2", 1)],
        );
        // Four paths scored; only three survive.
        assert_eq!(outcome.recommendations.len(), 3);
    }

    #[test]
    fn estimated_weeks_truncates() {
        // 70 days at 1.5 → floor(10 * 1.5) = 15
        assert_eq!(estimated_weeks(70, 1.5), 15);
        // 10 days at 1.5 → floor(1.428 * 1.5) = 2
        assert_eq!(estimated_weeks(10, 1.5), 2);
        assert_eq!(estimated_weeks(0, 1.5), 0);
    }

    #[test]
    fn time_multiplier_applies_to_recommendations() {
        let catalog = test_catalog();
        // Path A totals 70 days; default multiplier 1.5 → 15 weeks.
        let outcome = score_submission(&catalog, &[answer("q1", 0)]);
        assert_eq!(outcome.recommendations[0].estimated_weeks, 15);

        // Explicit 1.0 multiplier → 10 weeks.
        let outcome = score_submission(&catalog, &[answer("q1", 0), answer("q3", 1)]);
        assert_eq!(outcome.recommendations[0].estimated_weeks, 10);
    }

    #[test]
    fn learning_style_is_last_one_wins_with_default() {
        let catalog = test_catalog();
        let outcome = score_submission(&catalog, &[answer("q1", 0)]);
        assert_eq!(outcome.learning_style, "all");

        let outcome = score_submission(&catalog, &[answer("q3", 0)]);
        assert_eq!(outcome.learning_style, "video");
    }

    #[test]
    fn unknown_questions_and_options_are_skipped() {
        let catalog = test_catalog();
        let outcome = score_submission(
            &catalog,
            &[answer("no-such-question", 0), answer("q1", 99)],
        );
        assert!(outcome.recommendations.is_empty());
        assert_eq!(outcome.learning_style, "all");
    }

    #[test]
    fn empty_submission_falls_back_to_default_estimate() {
        let catalog = test_catalog();
        let outcome = score_submission(&catalog, &[]);
        assert!(outcome.recommendations.is_empty());
        assert_eq!(completion_estimate(&outcome.recommendations), 24);
    }
}
