use pretty_assertions::assert_eq;

use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::StandardRiskLevel::{self, High, Low, Minimal, Moderate, Severe};
use healthrisk_instruments::calculator;
use healthrisk_instruments::standardize::keyword_level;

#[test]
fn plain_labels() {
    assert_eq!(keyword_level("Minimal"), Minimal);
    assert_eq!(keyword_level("Not at all"), Minimal);
    assert_eq!(keyword_level("Low Risk"), Low);
    assert_eq!(keyword_level("Very Low"), Low);
    assert_eq!(keyword_level("Borderline Risk"), Moderate);
    assert_eq!(keyword_level("Intermediate Risk"), Moderate);
    assert_eq!(keyword_level("Slightly Elevated Risk"), Moderate);
    assert_eq!(keyword_level("Mild Anxiety"), Moderate);
    assert_eq!(keyword_level("High Risk"), High);
    assert_eq!(keyword_level("Severe Anxiety"), Severe);
    assert_eq!(keyword_level("Extremely"), Severe);
}

#[test]
fn matching_ignores_case() {
    assert_eq!(keyword_level("HIGH"), High);
    assert_eq!(keyword_level("mInImAl"), Minimal);
}

#[test]
fn unmatched_label_defaults_to_low() {
    assert_eq!(keyword_level(""), Low);
    assert_eq!(keyword_level("Crippled"), Low);
    assert_eq!(keyword_level("Bed-bound"), Low);
}

#[test]
fn moderately_high_resolves_to_moderate() {
    assert_eq!(keyword_level("Moderately High Risk"), Moderate);
}

#[test]
fn moderately_severe_resolves_to_moderate() {
    assert_eq!(keyword_level("Moderately Severe"), Moderate);
}

#[test]
fn very_high_is_shadowed_by_high() {
    // "high" is tested before "very high".
    assert_eq!(keyword_level("Very High Risk"), High);
}

#[test]
fn medium_high_is_shadowed_by_medium() {
    assert_eq!(keyword_level("Medium-High"), Moderate);
}

#[test]
fn every_category_label_round_trips() {
    let expected: [(AssessmentKind, &str, StandardRiskLevel); 31] = [
        (AssessmentKind::Gad7, "Minimal Anxiety", Minimal),
        (AssessmentKind::Gad7, "Mild Anxiety", Moderate),
        (AssessmentKind::Gad7, "Moderate Anxiety", Moderate),
        (AssessmentKind::Gad7, "Severe Anxiety", Severe),
        (AssessmentKind::StartBack, "Low Risk", Low),
        (AssessmentKind::StartBack, "Medium Risk", Moderate),
        (AssessmentKind::StartBack, "High Risk", High),
        (AssessmentKind::Odi, "Minimal Disability", Minimal),
        (AssessmentKind::Odi, "Moderate Disability", Low),
        (AssessmentKind::Odi, "Severe Disability", Moderate),
        (AssessmentKind::Odi, "Crippled", High),
        (AssessmentKind::Odi, "Bed-bound", Severe),
        (AssessmentKind::Findrisk, "Low Risk", Low),
        (AssessmentKind::Findrisk, "Slightly Elevated Risk", Moderate),
        (AssessmentKind::Findrisk, "Moderate Risk", Moderate),
        (AssessmentKind::Findrisk, "High Risk", High),
        (AssessmentKind::Findrisk, "Very High Risk", Severe),
        (AssessmentKind::Ascvd, "Minimal Risk", Minimal),
        (AssessmentKind::Ascvd, "Low Risk", Low),
        (AssessmentKind::Ascvd, "Borderline Risk", Moderate),
        (AssessmentKind::Ascvd, "Intermediate Risk", Moderate),
        (AssessmentKind::Ascvd, "High Risk", High),
        (AssessmentKind::Frax, "Low Risk", Low),
        (AssessmentKind::Frax, "Moderate Risk", Moderate),
        (AssessmentKind::Frax, "High Risk", High),
        (AssessmentKind::Hcri, "Minimal Risk", Minimal),
        (AssessmentKind::Hcri, "Low Risk", Low),
        (AssessmentKind::Hcri, "Moderate Risk", Moderate),
        (AssessmentKind::Hcri, "High Risk", High),
        (AssessmentKind::Hcri, "Very High Risk", Severe),
        (AssessmentKind::Hcri, "very high risk", Severe),
    ];
    for (kind, label, level) in expected {
        assert_eq!(calculator(kind).standardize(label), level, "{kind}: {label}");
    }
}

#[test]
fn every_declared_category_is_covered() {
    for kind in AssessmentKind::ALL {
        let calc = calculator(kind);
        for table in calc.category_tables() {
            for category in table.categories() {
                assert_eq!(
                    calc.standardize(category.label),
                    category.standard_level(),
                    "{kind}: {}",
                    category.label
                );
            }
        }
    }
}

#[test]
fn foreign_label_uses_keywords() {
    assert_eq!(calculator(AssessmentKind::Odi).standardize("Moderately High Risk"), Moderate);
}
