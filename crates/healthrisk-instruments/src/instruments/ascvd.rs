//! 10-year atherosclerotic cardiovascular disease risk.
//!
//! Implements the 2013 ACC/AHA Pooled Cohort Equations. Continuous inputs
//! arrive as bucketed answers and are mapped to bucket midpoints. The model
//! is undefined outside its derivation ranges, so out-of-range inputs are
//! rejected instead of extrapolated.

use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::RiskResult;

use crate::error::ScoringError;
use crate::mapping::{is_yes, BucketTable, Sex, YES_NO};
use crate::scoring::{assemble, round_to, CategoryTable, Question, RiskCategory};
use crate::Calculator;

pub struct Ascvd;

static AGE: BucketTable = BucketTable::new(
    &[
        ("under_20", 18.0),
        ("20-24", 22.0),
        ("25-29", 27.0),
        ("30-34", 32.0),
        ("35-39", 37.0),
        ("40-44", 42.0),
        ("45-49", 47.0),
        ("50-54", 52.0),
        ("55-59", 57.0),
        ("60-64", 62.0),
        ("65-69", 67.0),
        ("70-74", 72.0),
        ("75-79", 77.0),
        ("80_plus", 82.0),
    ],
    50.0,
);

static TOTAL_CHOLESTEROL: BucketTable = BucketTable::new(
    &[
        ("under_130", 120.0),
        ("130-159", 145.0),
        ("160-199", 180.0),
        ("200-239", 220.0),
        ("240-279", 260.0),
        ("280-320", 300.0),
        ("over_320", 330.0),
    ],
    200.0,
);

static HDL_CHOLESTEROL: BucketTable = BucketTable::new(
    &[
        ("under_20", 15.0),
        ("20-39", 30.0),
        ("40-59", 50.0),
        ("60-79", 70.0),
        ("80-100", 90.0),
        ("over_100", 110.0),
    ],
    50.0,
);

static SYSTOLIC_BP: BucketTable = BucketTable::new(
    &[
        ("under_90", 85.0),
        ("90-109", 100.0),
        ("110-129", 120.0),
        ("130-139", 135.0),
        ("140-159", 150.0),
        ("160-179", 170.0),
        ("180-200", 190.0),
        ("over_200", 210.0),
    ],
    120.0,
);

const RACE_OPTIONS: [&str; 3] = ["white", "african_american", "other"];
const SMOKER_OPTIONS: [&str; 3] = ["current", "former", "never"];

/// Inclusive validity ranges of the continuous inputs.
const AGE_RANGE: (f64, f64) = (20.0, 79.0);
const TOTAL_CHOLESTEROL_RANGE: (f64, f64) = (130.0, 320.0);
const HDL_RANGE: (f64, f64) = (20.0, 100.0);
const SYSTOLIC_BP_RANGE: (f64, f64) = (90.0, 200.0);

/// Below this age the younger-adult bands and the age-40 projection apply.
const STANDARD_MIN_AGE: f64 = 40.0;

/// Coefficients of one Pooled Cohort Equation. A zero coefficient means
/// the equation has no such term.
struct PooledCohortCoefficients {
    ln_age: f64,
    ln_age_squared: f64,
    ln_total_chol: f64,
    ln_age_x_ln_total_chol: f64,
    ln_hdl: f64,
    ln_age_x_ln_hdl: f64,
    ln_treated_sbp: f64,
    ln_age_x_ln_treated_sbp: f64,
    ln_untreated_sbp: f64,
    ln_age_x_ln_untreated_sbp: f64,
    smoker: f64,
    ln_age_x_smoker: f64,
    diabetes: f64,
    baseline_survival: f64,
    mean_sum: f64,
}

const WHITE_FEMALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: -29.799,
    ln_age_squared: 4.884,
    ln_total_chol: 13.540,
    ln_age_x_ln_total_chol: -3.114,
    ln_hdl: -13.578,
    ln_age_x_ln_hdl: 3.149,
    ln_treated_sbp: 2.019,
    ln_age_x_ln_treated_sbp: 0.0,
    ln_untreated_sbp: 1.957,
    ln_age_x_ln_untreated_sbp: 0.0,
    smoker: 7.574,
    ln_age_x_smoker: -1.665,
    diabetes: 0.661,
    baseline_survival: 0.9665,
    mean_sum: -29.18,
};

const AFRICAN_AMERICAN_FEMALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 17.114,
    ln_age_squared: 0.0,
    ln_total_chol: 0.940,
    ln_age_x_ln_total_chol: 0.0,
    ln_hdl: -18.920,
    ln_age_x_ln_hdl: 4.475,
    ln_treated_sbp: 29.291,
    ln_age_x_ln_treated_sbp: -6.432,
    ln_untreated_sbp: 27.820,
    ln_age_x_ln_untreated_sbp: -6.087,
    smoker: 0.691,
    ln_age_x_smoker: 0.0,
    diabetes: 0.874,
    baseline_survival: 0.9533,
    mean_sum: 86.61,
};

const WHITE_MALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 12.344,
    ln_age_squared: 0.0,
    ln_total_chol: 11.853,
    ln_age_x_ln_total_chol: -2.664,
    ln_hdl: -7.990,
    ln_age_x_ln_hdl: 1.769,
    ln_treated_sbp: 1.797,
    ln_age_x_ln_treated_sbp: 0.0,
    ln_untreated_sbp: 1.764,
    ln_age_x_ln_untreated_sbp: 0.0,
    smoker: 7.837,
    ln_age_x_smoker: -1.795,
    diabetes: 0.658,
    baseline_survival: 0.9144,
    mean_sum: 61.18,
};

const AFRICAN_AMERICAN_MALE: PooledCohortCoefficients = PooledCohortCoefficients {
    ln_age: 2.469,
    ln_age_squared: 0.0,
    ln_total_chol: 0.302,
    ln_age_x_ln_total_chol: 0.0,
    ln_hdl: -0.307,
    ln_age_x_ln_hdl: 0.0,
    ln_treated_sbp: 1.916,
    ln_age_x_ln_treated_sbp: 0.0,
    ln_untreated_sbp: 1.809,
    ln_age_x_ln_untreated_sbp: 0.0,
    smoker: 0.549,
    ln_age_x_smoker: 0.0,
    diabetes: 0.645,
    baseline_survival: 0.8954,
    mean_sum: 19.54,
};

/// Bands for adults 40 and over (ACC/AHA primary prevention thresholds).
pub static STANDARD_BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Low Risk", 0.0, 4.9),
    RiskCategory::new("Borderline Risk", 5.0, 7.4),
    RiskCategory::new("Intermediate Risk", 7.5, 19.9),
    RiskCategory::new("High Risk", 20.0, 100.0),
]);

/// Lower thresholds for adults under 40, whose absolute risk is small.
pub static YOUNG_ADULT_BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Minimal Risk", 0.0, 0.9),
    RiskCategory::new("Low Risk", 1.0, 2.9),
    RiskCategory::new("Borderline Risk", 3.0, 4.9),
    RiskCategory::new("High Risk", 5.0, 100.0),
]);

static TABLES: [&CategoryTable; 2] = [&STANDARD_BANDS, &YOUNG_ADULT_BANDS];

const STANDARD_ADVICE: [&str; 4] = [
    "Emphasize a heart-healthy lifestyle to keep risk low.",
    "Lifestyle changes are recommended; risk-enhancing factors may favor discussing statin therapy with a clinician.",
    "Discuss moderate-intensity statin therapy and lifestyle changes with a clinician.",
    "Discuss high-intensity statin therapy and aggressive risk-factor management with a clinician.",
];

const YOUNG_ADULT_ADVICE: [&str; 4] = [
    "Current risk is very low; maintain a heart-healthy lifestyle.",
    "Current risk is low; focus on preventing risk factors from developing.",
    "Risk is elevated for your age; lifestyle changes are recommended.",
    "Risk is high for your age; discuss risk-factor management with a clinician.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Race {
    AfricanAmerican,
    White,
    Other,
}

impl Race {
    fn from_answer(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "african_american" | "black" => Self::AfricanAmerican,
            "white" => Self::White,
            _ => Self::Other,
        }
    }
}

/// Model inputs after bucket-to-midpoint mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscvdInputs {
    pub age: f64,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub systolic_bp: f64,
    pub bp_treated: bool,
    pub diabetic: bool,
    pub smoker: bool,
    pub sex: Sex,
    pub race: Race,
}

impl AscvdInputs {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let smoking = answers.resolve("smoker");
        Self {
            age: AGE.value(answers.resolve("age")),
            total_cholesterol: TOTAL_CHOLESTEROL.value(answers.resolve("total_cholesterol")),
            hdl_cholesterol: HDL_CHOLESTEROL.value(answers.resolve("hdl_cholesterol")),
            systolic_bp: SYSTOLIC_BP.value(answers.resolve("systolic_bp")),
            bp_treated: is_yes(answers.resolve("bp_medication")),
            diabetic: is_yes(answers.resolve("diabetes")),
            smoker: smoking.trim().eq_ignore_ascii_case("current") || is_yes(smoking),
            sex: Sex::from_answer(answers.resolve("sex")).unwrap_or(Sex::Male),
            race: Race::from_answer(answers.resolve("race")),
        }
    }

    /// Reject inputs outside the ranges the equations were derived on.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let checks = [
            ("age", self.age, AGE_RANGE),
            ("total_cholesterol", self.total_cholesterol, TOTAL_CHOLESTEROL_RANGE),
            ("hdl_cholesterol", self.hdl_cholesterol, HDL_RANGE),
            ("systolic_bp", self.systolic_bp, SYSTOLIC_BP_RANGE),
        ];
        for (field, value, (min, max)) in checks {
            if !(min..=max).contains(&value) {
                return Err(ScoringError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    fn coefficients(&self) -> &'static PooledCohortCoefficients {
        // Races without their own equation use the white coefficients.
        match (self.sex, self.race) {
            (Sex::Female, Race::AfricanAmerican) => &AFRICAN_AMERICAN_FEMALE,
            (Sex::Female, _) => &WHITE_FEMALE,
            (Sex::Male, Race::AfricanAmerican) => &AFRICAN_AMERICAN_MALE,
            (Sex::Male, _) => &WHITE_MALE,
        }
    }

    /// 10-year risk in percent at the given age, clamped to [0, 100] and
    /// rounded to one decimal.
    pub fn ten_year_risk_at(&self, age: f64) -> f64 {
        let c = self.coefficients();
        let ln_age = age.ln();
        let ln_total_chol = self.total_cholesterol.ln();
        let ln_hdl = self.hdl_cholesterol.ln();
        let ln_sbp = self.systolic_bp.ln();

        let (sbp, age_x_sbp) = if self.bp_treated {
            (c.ln_treated_sbp, c.ln_age_x_ln_treated_sbp)
        } else {
            (c.ln_untreated_sbp, c.ln_age_x_ln_untreated_sbp)
        };

        let mut sum = c.ln_age * ln_age
            + c.ln_age_squared * ln_age * ln_age
            + c.ln_total_chol * ln_total_chol
            + c.ln_age_x_ln_total_chol * ln_age * ln_total_chol
            + c.ln_hdl * ln_hdl
            + c.ln_age_x_ln_hdl * ln_age * ln_hdl
            + sbp * ln_sbp
            + age_x_sbp * ln_age * ln_sbp;
        if self.smoker {
            sum += c.smoker + c.ln_age_x_smoker * ln_age;
        }
        if self.diabetic {
            sum += c.diabetes;
        }

        let risk = (1.0 - c.baseline_survival.powf((sum - c.mean_sum).exp())) * 100.0;
        round_to(risk.clamp(0.0, 100.0), 1)
    }

    pub fn ten_year_risk(&self) -> f64 {
        self.ten_year_risk_at(self.age)
    }

    /// Names of the major risk factors present.
    pub fn significant_risk_factors(&self) -> Vec<&'static str> {
        [
            (self.diabetic, "diabetes"),
            (self.smoker, "current smoking"),
            (self.total_cholesterol >= 240.0, "total cholesterol of 240 mg/dL or more"),
            (self.hdl_cholesterol < 40.0, "HDL cholesterol below 40 mg/dL"),
            (self.systolic_bp >= 140.0, "systolic blood pressure of 140 mmHg or more"),
            (self.bp_treated, "treated hypertension"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

impl Calculator for Ascvd {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Ascvd
    }

    fn name(&self) -> &str {
        "ASCVD 10-Year Risk"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::choice("age", "Age (years)", AGE.tokens()).numeric(),
                Question::choice("sex", "Sex", Sex::OPTIONS),
                Question::choice("race", "Race", RACE_OPTIONS),
                Question::choice(
                    "total_cholesterol",
                    "Total cholesterol (mg/dL)",
                    TOTAL_CHOLESTEROL.tokens(),
                )
                .numeric(),
                Question::choice(
                    "hdl_cholesterol",
                    "HDL cholesterol (mg/dL)",
                    HDL_CHOLESTEROL.tokens(),
                )
                .numeric(),
                Question::choice("systolic_bp", "Systolic blood pressure (mmHg)", SYSTOLIC_BP.tokens())
                    .numeric(),
                Question::choice(
                    "bp_medication",
                    "Are you taking medication for high blood pressure?",
                    YES_NO,
                ),
                Question::choice("diabetes", "Have you been diagnosed with diabetes?", YES_NO),
                Question::choice("smoker", "Smoking status", SMOKER_OPTIONS),
            ]
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let inputs = AscvdInputs::from_answers(answers);
        if let Err(e) = inputs.validate() {
            tracing::warn!(error = %e, "ASCVD inputs outside the validated range");
            return Err(e);
        }

        let risk = inputs.ten_year_risk();
        let young = inputs.age < STANDARD_MIN_AGE;
        let (bands, advice) = if young {
            (&YOUNG_ADULT_BANDS, &YOUNG_ADULT_ADVICE)
        } else {
            (&STANDARD_BANDS, &STANDARD_ADVICE)
        };
        let index = bands.resolve_index(risk);
        let category = bands.resolve(risk);

        let mut interpretation = format!(
            "Estimated 10-year risk of a first atherosclerotic cardiovascular event: {risk}% ({}). {}",
            category.label, advice[index]
        );

        if young {
            let projected = inputs.ten_year_risk_at(STANDARD_MIN_AGE);
            interpretation.push_str(&format!(
                " The equations are validated for ages 40–79, so this estimate is approximate. \
                 Projected 10-year risk at age 40 with the same risk factors: {projected}%."
            ));
            let factors = inputs.significant_risk_factors();
            if factors.len() >= 2 {
                interpretation.push_str(&format!(
                    " Significant risk factors present: {}. Lifetime risk is likely elevated.",
                    factors.join(", ")
                ));
            }
        }

        if inputs.race == Race::Other {
            interpretation.push_str(
                " Risk was estimated with the white/other equations, which may over- or \
                 under-estimate risk for some populations.",
            );
        }

        Ok(assemble(risk, category, interpretation))
    }
}
