use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::{RiskResult, StandardRiskLevel};

use crate::error::ScoringError;
use crate::mapping::{is_yes, BucketTable, Sex, YES_NO};
use crate::scoring::{assemble, round_to, CategoryTable, Question, RiskCategory};
use crate::Calculator;

/// Fracture risk approximation in the style of FRAX.
/// Base 10-year probabilities come from an age/sex/BMI model; clinical risk
/// factors and bone density act multiplicatively on top.
pub struct Frax;

static AGE: BucketTable = BucketTable::new(
    &[
        ("under_40", 35.0),
        ("40-44", 42.0),
        ("45-49", 47.0),
        ("50-54", 52.0),
        ("55-59", 57.0),
        ("60-64", 62.0),
        ("65-69", 67.0),
        ("70-74", 72.0),
        ("75-79", 77.0),
        ("80-84", 82.0),
        ("85-89", 87.0),
        ("90_plus", 92.0),
    ],
    50.0,
);

static BMI: BucketTable = BucketTable::new(
    &[
        ("under_18.5", 17.0),
        ("18.5-25", 22.0),
        ("25-30", 27.5),
        ("30-35", 32.5),
        ("over_35", 37.5),
    ],
    25.0,
);

/// Representative T-score per bone density bucket. Unknown means no
/// bone density adjustment.
static BMD_T_SCORE: BucketTable = BucketTable::new(
    &[
        ("above_-1", -0.5),
        ("-1_to_-1.5", -1.25),
        ("-1.5_to_-2", -1.75),
        ("-2_to_-2.5", -2.25),
        ("-2.5_to_-3", -2.75),
        ("below_-3", -3.5),
    ],
    0.0,
);

/// Clinical risk factors: question id, prompt, hazard ratio on major fracture risk.
const RISK_FACTORS: [(&str, &str, f64); 7] = [
    ("prior_fracture", "Previous fragility fracture", 1.86),
    ("parent_hip_fracture", "Parent fractured a hip", 1.54),
    ("current_smoking", "Current smoking", 1.25),
    ("glucocorticoids", "Oral glucocorticoids for 3 months or more", 1.61),
    ("rheumatoid_arthritis", "Rheumatoid arthritis", 1.38),
    ("secondary_osteoporosis", "Secondary osteoporosis", 1.30),
    ("alcohol", "Alcohol, 3 or more units per day", 1.38),
];

/// Hip-specific evidence is weaker, so hazard ratios are capped for hip risk.
const HIP_HAZARD_CAP: f64 = 1.4;

const MAJOR_RISK_CAP: f64 = 60.0;
const HIP_RISK_CAP: f64 = 30.0;

const REFERENCE_BMI: f64 = 25.0;

/// Estimates are not validated below this age.
const MIN_VALIDATED_AGE: f64 = 40.0;

/// `exp(intercept + age_slope * age + bmi_slope * (bmi - 25))`, in percent.
struct BaseRiskModel {
    intercept: f64,
    age_slope: f64,
    bmi_slope: f64,
}

impl BaseRiskModel {
    fn risk(&self, age: f64, bmi: f64) -> f64 {
        (self.intercept + self.age_slope * age + self.bmi_slope * (bmi - REFERENCE_BMI)).exp()
    }
}

const FEMALE_MAJOR: BaseRiskModel = BaseRiskModel {
    intercept: -2.55,
    age_slope: 0.07,
    bmi_slope: -0.03,
};

const FEMALE_HIP: BaseRiskModel = BaseRiskModel {
    intercept: -6.5,
    age_slope: 0.10,
    bmi_slope: -0.05,
};

const MALE_MAJOR: BaseRiskModel = BaseRiskModel {
    intercept: -3.3,
    age_slope: 0.07,
    bmi_slope: -0.03,
};

const MALE_HIP: BaseRiskModel = BaseRiskModel {
    intercept: -7.2,
    age_slope: 0.10,
    bmi_slope: -0.05,
};

// Piecewise slopes of the bone density multiplier.
const BMD_UPPER_BREAK: f64 = -1.0;
const BMD_LOWER_BREAK: f64 = -2.5;
const BMD_SLOPE_NORMAL: f64 = 0.20;
const BMD_SLOPE_OSTEOPENIA: f64 = 0.45;
const BMD_SLOPE_OSTEOPOROSIS: f64 = 0.80;

/// Relative risk for a bone density T-score.
///
/// Exponential in T with a gentle slope above -1, a steeper one between
/// -1 and -2.5, and the steepest below -2.5. Continuous at both breakpoints
/// and equal to 1 at T = -1.
pub fn bmd_multiplier(t_score: f64) -> f64 {
    if t_score >= BMD_UPPER_BREAK {
        (-BMD_SLOPE_NORMAL * (t_score - BMD_UPPER_BREAK)).exp()
    } else if t_score >= BMD_LOWER_BREAK {
        (-BMD_SLOPE_OSTEOPENIA * (t_score - BMD_UPPER_BREAK)).exp()
    } else {
        let at_break = -BMD_SLOPE_OSTEOPENIA * (BMD_LOWER_BREAK - BMD_UPPER_BREAK);
        (at_break - BMD_SLOPE_OSTEOPOROSIS * (t_score - BMD_LOWER_BREAK)).exp()
    }
}

pub static MAJOR_BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Low Risk", 0.0, 9.9),
    RiskCategory::new("Moderate Risk", 10.0, 20.0),
    RiskCategory::new("High Risk", 20.1, 100.0),
]);

pub static HIP_BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Low Risk", 0.0, 2.9),
    RiskCategory::new("Moderate Risk", 3.0, 5.0),
    RiskCategory::new("High Risk", 5.1, 100.0),
]);

static TABLES: [&CategoryTable; 2] = [&MAJOR_BANDS, &HIP_BANDS];

/// 10-year fracture probabilities in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct FractureRisk {
    pub major: f64,
    pub hip: f64,
    pub age: f64,
    pub bmd_applied: bool,
    pub risk_factors: Vec<&'static str>,
}

impl Frax {
    pub fn fracture_risk(answers: &AnswerSet) -> FractureRisk {
        let age = AGE.value(answers.resolve("age"));
        let bmi = BMI.value(answers.resolve("bmi"));
        let sex = Sex::from_answer(answers.resolve("sex")).unwrap_or(Sex::Female);

        let (major_model, hip_model) = match sex {
            Sex::Female => (&FEMALE_MAJOR, &FEMALE_HIP),
            Sex::Male => (&MALE_MAJOR, &MALE_HIP),
        };
        let mut major = major_model.risk(age, bmi);
        let mut hip = hip_model.risk(age, bmi);

        let mut risk_factors = Vec::new();
        for (id, prompt, hazard_ratio) in RISK_FACTORS {
            if is_yes(answers.resolve(id)) {
                major *= hazard_ratio;
                hip *= hazard_ratio.min(HIP_HAZARD_CAP);
                risk_factors.push(prompt);
            }
        }

        let bmd = BMD_T_SCORE.lookup(answers.resolve("bmd_t_score"));
        if let Some(t_score) = bmd {
            let multiplier = bmd_multiplier(t_score);
            major *= multiplier;
            hip *= multiplier;
        }

        FractureRisk {
            major: round_to(major.min(MAJOR_RISK_CAP), 1),
            hip: round_to(hip.min(HIP_RISK_CAP), 1),
            age,
            bmd_applied: bmd.is_some(),
            risk_factors,
        }
    }
}

impl Calculator for Frax {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Frax
    }

    fn name(&self) -> &str {
        "FRAX"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let mut questions = vec![
                Question::choice("age", "Age (years)", AGE.tokens()).numeric(),
                Question::choice("sex", "Sex", Sex::OPTIONS),
                Question::choice("bmi", "Body mass index (kg/m²)", BMI.tokens()).numeric(),
            ];
            questions.extend(
                RISK_FACTORS
                    .iter()
                    .map(|(id, prompt, _)| Question::choice(id, prompt, YES_NO)),
            );
            questions.push(
                Question::choice(
                    "bmd_t_score",
                    "Femoral neck bone density T-score, if known",
                    BMD_T_SCORE.tokens().chain(["unknown"]),
                )
                .numeric(),
            );
            questions
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let risk = Self::fracture_risk(answers);
        let major_category = MAJOR_BANDS.resolve(risk.major);
        let hip_category = HIP_BANDS.resolve(risk.hip);

        let overall = if hip_category.standard_level() > major_category.standard_level() {
            hip_category
        } else {
            major_category
        };

        let mut interpretation = format!(
            "Estimated 10-year probability of a major osteoporotic fracture: {}% ({}); \
             hip fracture: {}% ({}).",
            risk.major, major_category.label, risk.hip, hip_category.label
        );

        if risk.age < MIN_VALIDATED_AGE {
            interpretation.push_str(
                " Fracture probabilities are not validated below age 40; these figures are \
                 informational only and do not support a treatment recommendation.",
            );
        } else {
            let advice = match overall.standard_level() {
                StandardRiskLevel::High | StandardRiskLevel::Severe => {
                    "Treatment to reduce fracture risk should be discussed with a clinician."
                }
                StandardRiskLevel::Moderate => {
                    "Consider a bone density scan if not already done, and discuss options with a clinician."
                }
                _ => {
                    "Calcium, vitamin D and weight-bearing exercise are recommended; reassess in about 5 years."
                }
            };
            interpretation.push(' ');
            interpretation.push_str(advice);
        }

        if !risk.risk_factors.is_empty() {
            interpretation.push_str(&format!(
                " Risk factors included: {}.",
                risk.risk_factors.join(", ").to_lowercase()
            ));
        }
        if !risk.bmd_applied {
            interpretation.push_str(" Bone density was not provided; adding a T-score refines this estimate.");
        }

        Ok(assemble(risk.major, overall, interpretation))
    }
}
