use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::RiskResult;

use crate::error::ScoringError;
use crate::mapping::PointTable;
use crate::scoring::{assemble, CategoryTable, Question, RiskCategory};
use crate::Calculator;

/// Keele STarT Back screening tool.
/// Eight agree/disagree items and one bothersomeness item, each 0 or 1.
/// Items 5–9 form the psychosocial subscale.
pub struct StartBack;

const AGREEMENT_ITEMS: [(&str, &str); 8] = [
    (
        "start_q1",
        "My back pain has spread down my leg(s) at some time in the last 2 weeks",
    ),
    (
        "start_q2",
        "I have had pain in the shoulder or neck at some time in the last 2 weeks",
    ),
    (
        "start_q3",
        "I have only walked short distances because of my back pain",
    ),
    (
        "start_q4",
        "In the last 2 weeks, I have dressed more slowly than usual because of back pain",
    ),
    (
        "start_q5",
        "It's not really safe for a person with a condition like mine to be physically active",
    ),
    (
        "start_q6",
        "Worrying thoughts have been going through my mind a lot of the time",
    ),
    (
        "start_q7",
        "I feel that my back pain is terrible and it's never going to get any better",
    ),
    (
        "start_q8",
        "In general I have not enjoyed all the things I used to enjoy",
    ),
];

const BOTHERSOME_ITEM: (&str, &str) = (
    "start_q9",
    "Overall, how bothersome has your back pain been in the last 2 weeks?",
);

const PSYCHOSOCIAL_ITEMS: [&str; 5] = ["start_q5", "start_q6", "start_q7", "start_q8", "start_q9"];

static AGREEMENT: PointTable = PointTable::new(&[("agree", 1), ("disagree", 0)]);

static BOTHERSOMENESS: PointTable = PointTable::new(&[
    ("not", 0),
    ("slightly", 0),
    ("moderately", 0),
    ("very", 1),
    ("extremely", 1),
]);

/// Stratification by total score when the psychosocial subscale is below 4.
pub static TOTAL_BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Low Risk", 0.0, 3.0),
    RiskCategory::new("Medium Risk", 4.0, 9.0),
]);

/// A psychosocial subscale of 4 or 5 places the patient in the high-risk
/// group regardless of the total.
pub static PSYCHOSOCIAL_BANDS: CategoryTable =
    CategoryTable::new(&[RiskCategory::new("High Risk", 4.0, 5.0)]);

static TABLES: [&CategoryTable; 2] = [&TOTAL_BANDS, &PSYCHOSOCIAL_BANDS];

const HIGH_RISK_SUBSCALE: i32 = 4;
const MEDIUM_RISK_TOTAL: i32 = 4;

impl StartBack {
    fn item_score(answers: &AnswerSet, id: &str) -> i32 {
        let table = if id == BOTHERSOME_ITEM.0 {
            &BOTHERSOMENESS
        } else {
            &AGREEMENT
        };
        table.points(answers.resolve(id)).unwrap_or(0)
    }

    /// Total of all nine items.
    pub fn total_score(answers: &AnswerSet) -> i32 {
        AGREEMENT_ITEMS
            .iter()
            .map(|(id, _)| *id)
            .chain([BOTHERSOME_ITEM.0])
            .map(|id| Self::item_score(answers, id))
            .sum()
    }

    /// Sum of items 5–9.
    pub fn psychosocial_score(answers: &AnswerSet) -> i32 {
        PSYCHOSOCIAL_ITEMS
            .iter()
            .map(|id| Self::item_score(answers, id))
            .sum()
    }
}

impl Calculator for StartBack {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::StartBack
    }

    fn name(&self) -> &str {
        "STarT Back"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let mut questions: Vec<Question> = AGREEMENT_ITEMS
                .iter()
                .map(|(id, prompt)| Question::choice(id, prompt, AGREEMENT.tokens()))
                .collect();
            questions.push(Question::choice(
                BOTHERSOME_ITEM.0,
                BOTHERSOME_ITEM.1,
                BOTHERSOMENESS.tokens(),
            ));
            questions
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let total = Self::total_score(answers);
        let subscale = Self::psychosocial_score(answers);

        // Subscale check takes precedence over the total.
        let category = if subscale >= HIGH_RISK_SUBSCALE {
            PSYCHOSOCIAL_BANDS.resolve(f64::from(subscale))
        } else {
            TOTAL_BANDS.resolve(f64::from(total))
        };

        let advice = if subscale >= HIGH_RISK_SUBSCALE {
            "High levels of psychosocial factors are present; psychologically informed physiotherapy is recommended."
        } else if total >= MEDIUM_RISK_TOTAL {
            "Physical factors predominate; physiotherapy to address pain and function is recommended."
        } else {
            "Good prognosis; reassurance, advice and simple analgesia are usually sufficient."
        };

        let interpretation = format!(
            "STarT Back total {total}/9, psychosocial subscale {subscale}/5 ({}). {advice}",
            category.label
        );

        Ok(assemble(f64::from(total), category, interpretation))
    }
}
