use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::RiskResult;

use crate::error::ScoringError;
use crate::mapping::PointTable;
use crate::scoring::{assemble, CategoryTable, Question, RiskCategory};
use crate::Calculator;

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
/// Seven items rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

const ITEMS: [(&str, &str); 7] = [
    ("gad7_q1", "Feeling nervous, anxious, or on edge"),
    ("gad7_q2", "Not being able to stop or control worrying"),
    ("gad7_q3", "Worrying too much about different things"),
    ("gad7_q4", "Trouble relaxing"),
    ("gad7_q5", "Being so restless that it is hard to sit still"),
    ("gad7_q6", "Becoming easily annoyed or irritable"),
    ("gad7_q7", "Feeling afraid, as if something awful might happen"),
];

static FREQUENCY: PointTable = PointTable::new(&[
    ("not", 0),
    ("several", 1),
    ("more_than_half", 2),
    ("nearly_every", 3),
]);

pub static BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Minimal Anxiety", 0.0, 4.0),
    RiskCategory::new("Mild Anxiety", 5.0, 9.0),
    RiskCategory::new("Moderate Anxiety", 10.0, 14.0),
    RiskCategory::new("Severe Anxiety", 15.0, 21.0),
]);

static TABLES: [&CategoryTable; 1] = [&BANDS];

const ADVICE: [&str; 4] = [
    "No treatment is indicated; reassess if symptoms change.",
    "Watchful waiting and reassessment in a few weeks are suggested.",
    "Further evaluation by a clinician is recommended.",
    "Prompt evaluation and active treatment are recommended.",
];

/// Scores of 10 or more are the usual cut point for referral.
const REFERRAL_THRESHOLD: i32 = 10;

impl Calculator for Gad7 {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            ITEMS
                .iter()
                .map(|(id, prompt)| Question::choice(id, prompt, FREQUENCY.tokens()))
                .collect()
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let item_scores: Vec<i32> = ITEMS
            .iter()
            .map(|(id, _)| FREQUENCY.points(answers.resolve(id)).unwrap_or(0))
            .collect();
        let total: i32 = item_scores.iter().sum();
        let frequent = item_scores.iter().filter(|s| **s >= 2).count();

        let index = BANDS.resolve_index(f64::from(total));
        let category = BANDS.resolve(f64::from(total));

        let mut interpretation = format!(
            "GAD-7 score {total}/21 ({}). {}",
            category.label, ADVICE[index]
        );
        if total >= REFERRAL_THRESHOLD {
            interpretation.push_str(
                " A score of 10 or more is the usual threshold for referral to a clinician.",
            );
        }
        interpretation.push_str(&format!(
            " {frequent} of 7 symptoms were reported on more than half the days."
        ));

        Ok(assemble(f64::from(total), category, interpretation))
    }
}
