use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::{RiskResult, StandardRiskLevel};

use crate::error::ScoringError;
use crate::mapping::{PointTable, Sex};
use crate::scoring::{assemble, round_to, CategoryTable, Question, RiskCategory};
use crate::Calculator;

/// Cancer risk index in the style of the Harvard Cancer Risk Index.
///
/// Sums points across independent risk and protective factors and compares
/// the total with the average for the same age band and sex. The result is
/// a relative risk, so its bands are multiplicative rather than evenly spaced.
pub struct Hcri;

const AGE_BANDS: [&str; 6] = ["under_30", "30-39", "40-49", "50-59", "60-69", "70_plus"];

/// Used when the age answer is missing or unrecognized.
const DEFAULT_AGE_BAND: &str = "50-59";

static AGE_POINTS: PointTable = PointTable::new(&[
    ("under_30", 10),
    ("30-39", 20),
    ("40-49", 35),
    ("50-59", 55),
    ("60-69", 80),
    ("70_plus", 110),
]);

/// Average index score per age band: (band, male, female).
const POPULATION_AVERAGE: [(&str, f64, f64); 6] = [
    ("under_30", 65.0, 70.0),
    ("30-39", 80.0, 90.0),
    ("40-49", 105.0, 110.0),
    ("50-59", 135.0, 130.0),
    ("60-69", 170.0, 155.0),
    ("70_plus", 200.0, 180.0),
];

const MALE_POINTS: i32 = 5;

/// Individual scores never drop below this floor.
const MIN_INDIVIDUAL_SCORE: i32 = 50;

struct Factor {
    id: &'static str,
    prompt: &'static str,
    /// Short name used when listing contributors.
    name: &'static str,
    points: PointTable,
    modifiable: bool,
    female_only: bool,
}

const FACTORS: [Factor; 13] = [
    Factor {
        id: "race",
        prompt: "Race or ethnicity",
        name: "ancestry",
        points: PointTable::new(&[
            ("african_american", 10),
            ("white", 0),
            ("hispanic", -5),
            ("asian", -10),
            ("other", 0),
        ]),
        modifiable: false,
        female_only: false,
    },
    Factor {
        id: "family_history",
        prompt: "Close relatives diagnosed with cancer",
        name: "family history",
        points: PointTable::new(&[
            ("none", 0),
            ("one_relative", 20),
            ("multiple_relatives", 40),
        ]),
        modifiable: false,
        female_only: false,
    },
    Factor {
        id: "genetic_testing",
        prompt: "Result of genetic testing for inherited cancer risk",
        name: "inherited mutation",
        points: PointTable::new(&[("not_tested", 0), ("negative", 0), ("positive", 50)]),
        modifiable: false,
        female_only: false,
    },
    Factor {
        id: "smoking",
        prompt: "Smoking status",
        name: "smoking",
        points: PointTable::new(&[
            ("never", 0),
            ("former", 15),
            ("current_light", 40),
            ("current_heavy", 70),
        ]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "alcohol",
        prompt: "Alcohol consumption",
        name: "alcohol",
        points: PointTable::new(&[("none", 0), ("light", 5), ("moderate", 15), ("heavy", 30)]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "diet",
        prompt: "Overall diet (fruit, vegetables, fibre, red and processed meat)",
        name: "diet",
        points: PointTable::new(&[("healthy", 0), ("average", 10), ("poor", 25)]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "physical_activity",
        prompt: "Physical activity",
        name: "physical inactivity",
        points: PointTable::new(&[("active", 0), ("moderate", 10), ("sedentary", 20)]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "bmi",
        prompt: "Body mass index (kg/m²)",
        name: "body weight",
        points: PointTable::new(&[
            ("under_25", 0),
            ("25-30", 10),
            ("30-35", 20),
            ("over_35", 30),
        ]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "environmental_exposure",
        prompt: "Occupational or environmental exposure to carcinogens",
        name: "carcinogen exposure",
        points: PointTable::new(&[("none", 0), ("some", 15), ("significant", 30)]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "reproductive_history",
        prompt: "Age at first live birth",
        name: "reproductive history",
        points: PointTable::new(&[
            ("first_birth_before_30", 0),
            ("first_birth_30_plus", 10),
            ("no_births", 10),
        ]),
        modifiable: false,
        female_only: true,
    },
    Factor {
        id: "hormone_use",
        prompt: "Postmenopausal hormone therapy",
        name: "hormone therapy",
        points: PointTable::new(&[("never", 0), ("past", 5), ("current", 20)]),
        modifiable: true,
        female_only: true,
    },
    Factor {
        id: "vitamin_use",
        prompt: "Multivitamin or folate use",
        name: "vitamin use",
        points: PointTable::new(&[("none", 0), ("occasional", -2), ("daily", -5)]),
        modifiable: true,
        female_only: false,
    },
    Factor {
        id: "cancer_screening",
        prompt: "Recommended cancer screening",
        name: "screening",
        points: PointTable::new(&[("none", 0), ("partial", -5), ("up_to_date", -15)]),
        modifiable: true,
        female_only: false,
    },
];

pub static BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Minimal Risk", 0.0, 0.49),
    RiskCategory::new("Low Risk", 0.5, 0.79),
    RiskCategory::new("Moderate Risk", 0.8, 1.24),
    RiskCategory::new("High Risk", 1.25, 1.99),
    RiskCategory::new("Very High Risk", 2.0, 100.0).with_level(StandardRiskLevel::Severe),
]);

static TABLES: [&CategoryTable; 1] = [&BANDS];

const ADVICE: [&str; 5] = [
    "Risk is well below average; keep up current habits and routine screening.",
    "Risk is below average; continue healthy habits and recommended screening.",
    "Risk is close to average; addressing modifiable factors can lower it further.",
    "Risk is above average; discuss risk reduction and screening frequency with a clinician.",
    "Risk is well above average; a clinician review is recommended, with genetic counselling where family history is strong.",
];

const TOP_CONTRIBUTORS: usize = 3;

/// Score breakdown behind an HCRI result.
#[derive(Debug, Clone, PartialEq)]
pub struct HcriScore {
    pub individual: f64,
    pub population_average: f64,
    pub relative_risk: f64,
    /// Modifiable factors that added points, largest first.
    pub modifiable_contributors: Vec<(&'static str, i32)>,
}

impl Hcri {
    fn age_band(value: &str) -> &'static str {
        let value = value.trim();
        if let Some(band) = AGE_BANDS.into_iter().find(|b| b.eq_ignore_ascii_case(value)) {
            return band;
        }
        match value.parse::<f64>() {
            Ok(age) if age.is_finite() => match age {
                a if a < 30.0 => "under_30",
                a if a < 40.0 => "30-39",
                a if a < 50.0 => "40-49",
                a if a < 60.0 => "50-59",
                a if a < 70.0 => "60-69",
                _ => "70_plus",
            },
            _ => DEFAULT_AGE_BAND,
        }
    }

    fn population_average(band: &str, sex: Sex) -> f64 {
        let (_, male, female) = POPULATION_AVERAGE
            .iter()
            .find(|(b, _, _)| *b == band)
            .copied()
            .unwrap_or(POPULATION_AVERAGE[3]);
        match sex {
            Sex::Male => male,
            Sex::Female => female,
        }
    }

    pub fn index_score(answers: &AnswerSet) -> HcriScore {
        let band = Self::age_band(answers.resolve("age"));
        let sex = Sex::from_answer(answers.resolve("sex")).unwrap_or(Sex::Male);

        let mut total = AGE_POINTS.points(band).unwrap_or(0);
        if sex == Sex::Male {
            total += MALE_POINTS;
        }

        let mut contributors = Vec::new();
        for factor in FACTORS.iter() {
            if factor.female_only && sex != Sex::Female {
                continue;
            }
            let points = factor.points.points(answers.resolve(factor.id)).unwrap_or(0);
            total += points;
            if factor.modifiable && points > 0 {
                contributors.push((factor.name, points));
            }
        }
        contributors.sort_by(|a, b| b.1.cmp(&a.1));

        let individual = f64::from(total.max(MIN_INDIVIDUAL_SCORE));
        let population_average = Self::population_average(band, sex);

        HcriScore {
            individual,
            population_average,
            relative_risk: round_to(individual / population_average, 2),
            modifiable_contributors: contributors,
        }
    }
}

impl Calculator for Hcri {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Hcri
    }

    fn name(&self) -> &str {
        "Cancer Risk Index"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let mut questions = vec![
                Question::choice("age", "Age group", AGE_BANDS).numeric(),
                Question::choice("sex", "Sex", Sex::OPTIONS),
            ];
            questions.extend(
                FACTORS
                    .iter()
                    .map(|f| Question::choice(f.id, f.prompt, f.points.tokens())),
            );
            questions
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let score = Self::index_score(answers);
        let index = BANDS.resolve_index(score.relative_risk);
        let category = BANDS.resolve(score.relative_risk);

        let mut interpretation = format!(
            "Estimated cancer risk is {:.2} times the average for your age and sex ({}). {}",
            score.relative_risk, category.label, ADVICE[index]
        );
        if !score.modifiable_contributors.is_empty() {
            let names: Vec<&str> = score
                .modifiable_contributors
                .iter()
                .take(TOP_CONTRIBUTORS)
                .map(|(name, _)| *name)
                .collect();
            interpretation.push_str(&format!(
                " Largest modifiable contributors: {}.",
                names.join(", ")
            ));
        }

        Ok(assemble(score.relative_risk, category, interpretation))
    }
}
