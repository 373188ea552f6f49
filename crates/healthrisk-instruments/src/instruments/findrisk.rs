use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::{RiskResult, StandardRiskLevel};

use crate::error::ScoringError;
use crate::mapping::{PointTable, Sex};
use crate::scoring::{assemble, CategoryTable, Question, RiskCategory};
use crate::Calculator;

/// FINDRISC: Finnish Diabetes Risk Score.
/// Eight factors, each worth a fixed number of points. Total 0–26 predicts
/// the 10-year risk of type 2 diabetes.
pub struct Findrisk;

static AGE: PointTable =
    PointTable::new(&[("under_45", 0), ("45-54", 2), ("55-64", 3), ("65_plus", 4)]);

static BMI: PointTable = PointTable::new(&[("under_25", 0), ("25-30", 1), ("over_30", 3)]);

static WAIST_MALE: PointTable =
    PointTable::new(&[("under_94", 0), ("94-102", 3), ("over_102", 4)]);

static WAIST_FEMALE: PointTable =
    PointTable::new(&[("under_80", 0), ("80-88", 3), ("over_88", 4)]);

static PHYSICAL_ACTIVITY: PointTable = PointTable::new(&[("yes", 0), ("no", 2)]);

static VEGETABLES: PointTable = PointTable::new(&[("every_day", 0), ("not_every_day", 1)]);

static BP_MEDICATION: PointTable = PointTable::new(&[("no", 0), ("yes", 2)]);

static HIGH_GLUCOSE: PointTable = PointTable::new(&[("no", 0), ("yes", 5)]);

static FAMILY_HISTORY: PointTable =
    PointTable::new(&[("no", 0), ("second_degree", 3), ("first_degree", 5)]);

/// Factors scored independently of sex, with their question text.
static FACTORS: [(&str, &str, &PointTable); 7] = [
    ("age", "Age group", &AGE),
    ("bmi", "Body mass index (kg/m²)", &BMI),
    (
        "physical_activity",
        "Do you usually have at least 30 minutes of physical activity daily?",
        &PHYSICAL_ACTIVITY,
    ),
    (
        "vegetables_fruit",
        "How often do you eat vegetables, fruit or berries?",
        &VEGETABLES,
    ),
    (
        "bp_medication",
        "Have you ever taken medication for high blood pressure regularly?",
        &BP_MEDICATION,
    ),
    (
        "high_glucose",
        "Have you ever been found to have high blood glucose?",
        &HIGH_GLUCOSE,
    ),
    (
        "family_history",
        "Have any of your relatives been diagnosed with diabetes?",
        &FAMILY_HISTORY,
    ),
];

pub static BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Low Risk", 0.0, 6.0),
    RiskCategory::new("Slightly Elevated Risk", 7.0, 11.0),
    RiskCategory::new("Moderate Risk", 12.0, 14.0),
    RiskCategory::new("High Risk", 15.0, 20.0),
    RiskCategory::new("Very High Risk", 21.0, 26.0).with_level(StandardRiskLevel::Severe),
]);

static TABLES: [&CategoryTable; 1] = [&BANDS];

/// Approximate share of people in each band who develop diabetes within 10 years.
const TEN_YEAR_RISK_PERCENT: [u32; 5] = [1, 4, 17, 33, 50];

const ADVICE: [&str; 5] = [
    "Keep up a healthy diet and regular physical activity.",
    "Pay attention to weight and activity and reassess in a few years.",
    "Lifestyle changes are recommended; consider discussing a glucose test with a clinician.",
    "A blood glucose test (fasting glucose or HbA1c) is recommended.",
    "A blood glucose test is strongly recommended; diabetes may already be present.",
];

impl Findrisk {
    fn waist_points(answers: &AnswerSet) -> i32 {
        let waist = answers.resolve("waist_circumference");
        match Sex::from_answer(answers.resolve("sex")) {
            Some(Sex::Male) => WAIST_MALE.points(waist),
            Some(Sex::Female) => WAIST_FEMALE.points(waist),
            None => WAIST_MALE.points(waist).or_else(|| WAIST_FEMALE.points(waist)),
        }
        .unwrap_or(0)
    }

    pub fn total_points(answers: &AnswerSet) -> i32 {
        let factors: i32 = FACTORS
            .iter()
            .map(|(id, _, table)| table.points(answers.resolve(id)).unwrap_or(0))
            .sum();
        factors + Self::waist_points(answers)
    }
}

impl Calculator for Findrisk {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Findrisk
    }

    fn name(&self) -> &str {
        "FINDRISC"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let mut questions = vec![
                Question::choice("sex", "Sex", Sex::OPTIONS),
                Question::choice(
                    "waist_circumference",
                    "Waist circumference measured below the ribs (cm)",
                    WAIST_MALE.tokens().chain(WAIST_FEMALE.tokens()),
                ),
            ];
            questions.extend(
                FACTORS
                    .iter()
                    .map(|(id, prompt, table)| Question::choice(id, prompt, table.tokens())),
            );
            questions
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let total = Self::total_points(answers);
        let index = BANDS.resolve_index(f64::from(total));
        let category = BANDS.resolve(f64::from(total));

        let interpretation = format!(
            "FINDRISC score {total}/26 ({}). About {}% of people with this score develop \
             type 2 diabetes within 10 years. {}",
            category.label, TEN_YEAR_RISK_PERCENT[index], ADVICE[index]
        );

        Ok(assemble(f64::from(total), category, interpretation))
    }
}
