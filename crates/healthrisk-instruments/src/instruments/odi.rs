use std::sync::LazyLock;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::{RiskResult, StandardRiskLevel};

use crate::error::ScoringError;
use crate::mapping::PointTable;
use crate::scoring::{
    assemble, check_options, AnswerIssue, CategoryTable, IssueKind, Question, RiskCategory,
};
use crate::Calculator;

/// ODI: Oswestry Disability Index.
/// Ten sections scored 0–5. Disability is expressed as a percentage of the
/// maximum possible score over the sections actually answered.
pub struct Odi;

struct Section {
    id: &'static str,
    prompt: &'static str,
    scores: PointTable,
}

const SECTIONS: [Section; 10] = [
    Section {
        id: "pain_intensity",
        prompt: "Pain intensity",
        scores: PointTable::new(&[
            ("no_pain", 0),
            ("very_mild", 1),
            ("moderate", 2),
            ("fairly_severe", 3),
            ("very_severe", 4),
            ("worst_imaginable", 5),
        ]),
    },
    Section {
        id: "personal_care",
        prompt: "Personal care (washing, dressing, etc.)",
        scores: PointTable::new(&[
            ("normal_no_pain", 0),
            ("normal_with_pain", 1),
            ("slow_and_careful", 2),
            ("some_help", 3),
            ("daily_help", 4),
            ("cannot_dress", 5),
        ]),
    },
    Section {
        id: "lifting",
        prompt: "Lifting",
        scores: PointTable::new(&[
            ("heavy_no_pain", 0),
            ("heavy_with_pain", 1),
            ("heavy_if_positioned", 2),
            ("light_if_positioned", 3),
            ("very_light_only", 4),
            ("cannot_lift", 5),
        ]),
    },
    Section {
        id: "walking",
        prompt: "Walking",
        scores: PointTable::new(&[
            ("unrestricted", 0),
            ("under_1_mile", 1),
            ("under_half_mile", 2),
            ("under_100_yards", 3),
            ("stick_or_crutches", 4),
            ("mostly_in_bed", 5),
        ]),
    },
    Section {
        id: "sitting",
        prompt: "Sitting",
        scores: PointTable::new(&[
            ("any_chair", 0),
            ("favourite_chair", 1),
            ("under_1_hour", 2),
            ("under_30_minutes", 3),
            ("under_10_minutes", 4),
            ("cannot_sit", 5),
        ]),
    },
    Section {
        id: "standing",
        prompt: "Standing",
        scores: PointTable::new(&[
            ("no_extra_pain", 0),
            ("extra_pain", 1),
            ("under_1_hour", 2),
            ("under_30_minutes", 3),
            ("under_10_minutes", 4),
            ("cannot_stand", 5),
        ]),
    },
    Section {
        id: "sleeping",
        prompt: "Sleeping",
        scores: PointTable::new(&[
            ("never_disturbed", 0),
            ("occasionally_disturbed", 1),
            ("under_6_hours", 2),
            ("under_4_hours", 3),
            ("under_2_hours", 4),
            ("prevented", 5),
        ]),
    },
    Section {
        id: "sex_life",
        prompt: "Sex life (if applicable)",
        scores: PointTable::new(&[
            ("normal_no_pain", 0),
            ("normal_with_pain", 1),
            ("nearly_normal_painful", 2),
            ("severely_restricted", 3),
            ("nearly_absent", 4),
            ("prevented", 5),
        ]),
    },
    Section {
        id: "social_life",
        prompt: "Social life",
        scores: PointTable::new(&[
            ("normal_no_pain", 0),
            ("normal_more_pain", 1),
            ("limits_energetic", 2),
            ("restricted_less_often", 3),
            ("restricted_to_home", 4),
            ("none", 5),
        ]),
    },
    Section {
        id: "travelling",
        prompt: "Travelling",
        scores: PointTable::new(&[
            ("anywhere_no_pain", 0),
            ("anywhere_with_pain", 1),
            ("over_2_hours", 2),
            ("under_1_hour", 3),
            ("under_30_minutes", 4),
            ("only_for_treatment", 5),
        ]),
    },
];

const MAX_SECTION_SCORE: i32 = 5;

/// Fewer answered sections than this make the percentage unreliable.
pub const MIN_VALID_SECTIONS: usize = 8;

pub static BANDS: CategoryTable = CategoryTable::new(&[
    RiskCategory::new("Minimal Disability", 0.0, 20.0).with_level(StandardRiskLevel::Minimal),
    RiskCategory::new("Moderate Disability", 21.0, 40.0).with_level(StandardRiskLevel::Low),
    RiskCategory::new("Severe Disability", 41.0, 60.0).with_level(StandardRiskLevel::Moderate),
    RiskCategory::new("Crippled", 61.0, 80.0).with_level(StandardRiskLevel::High),
    RiskCategory::new("Bed-bound", 81.0, 100.0).with_level(StandardRiskLevel::Severe),
]);

static TABLES: [&CategoryTable; 1] = [&BANDS];

const ADVICE: [&str; 5] = [
    "Most activities of daily living are manageable; advice on lifting, sitting and exercise is usually all that is needed.",
    "Pain and difficulty with sitting, lifting and standing; conservative management is usually sufficient.",
    "Pain is the main problem and daily activities are affected; detailed investigation is indicated.",
    "Back pain affects all aspects of daily life; active intervention is required.",
    "Symptoms are at the extreme of the scale; careful clinical evaluation is recommended.",
];

/// Per-section breakdown of an ODI answer set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OdiSummary {
    pub answered_sections: usize,
    pub raw_total: i32,
    /// `None` when no section was answered.
    pub percentage: Option<f64>,
}

impl Odi {
    pub fn summarize(answers: &AnswerSet) -> OdiSummary {
        let scored: Vec<i32> = SECTIONS
            .iter()
            .filter_map(|s| s.scores.points(answers.resolve(s.id)))
            .collect();
        let answered_sections = scored.len();
        let raw_total: i32 = scored.iter().sum();

        // Unanswered sections shrink the denominator rather than counting as zero.
        let percentage = (answered_sections > 0).then(|| {
            let max_possible = answered_sections as f64 * f64::from(MAX_SECTION_SCORE);
            (f64::from(raw_total) / max_possible * 100.0).round()
        });

        OdiSummary {
            answered_sections,
            raw_total,
            percentage,
        }
    }

    pub fn is_valid(answers: &AnswerSet) -> bool {
        Self::summarize(answers).answered_sections >= MIN_VALID_SECTIONS
    }
}

impl Calculator for Odi {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Odi
    }

    fn name(&self) -> &str {
        "Oswestry Disability Index"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            SECTIONS
                .iter()
                .map(|s| Question::choice(s.id, s.prompt, s.scores.tokens()))
                .collect()
        });
        &QUESTIONS
    }

    fn category_tables(&self) -> &[&'static CategoryTable] {
        &TABLES
    }

    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
        let summary = Self::summarize(answers);
        let percentage = summary.percentage.unwrap_or(0.0);
        let index = BANDS.resolve_index(percentage);
        let category = BANDS.resolve(percentage);

        let interpretation = if summary.percentage.is_none() {
            "No ODI sections were answered, so this result is not valid. \
             Complete at least 8 of the 10 sections and score again."
                .to_string()
        } else {
            let mut text = format!(
                "ODI disability {percentage}% ({}), based on {} of {} sections. {}",
                category.label,
                summary.answered_sections,
                SECTIONS.len(),
                ADVICE[index]
            );
            if summary.answered_sections < MIN_VALID_SECTIONS {
                text.push_str(" Fewer than 8 sections were answered; interpret with caution.");
            }
            text
        };

        Ok(assemble(percentage, category, interpretation))
    }

    fn validate_answers(&self, answers: &AnswerSet) -> Vec<AnswerIssue> {
        let mut issues = check_options(self.name(), self.questions(), answers);
        let answered = Self::summarize(answers).answered_sections;
        if answered < MIN_VALID_SECTIONS {
            issues.push(AnswerIssue {
                question_id: String::new(),
                value: answered.to_string(),
                kind: IssueKind::Incomplete,
                message: format!(
                    "{}: {answered} of {} sections answered; at least {MIN_VALID_SECTIONS} are required for a valid score",
                    self.name(),
                    SECTIONS.len(),
                ),
            });
        }
        issues
    }
}
