use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::risk::StandardRiskLevel;
use healthrisk_instruments::instruments::odi::{Odi, MIN_VALID_SECTIONS};
use healthrisk_instruments::scoring::IssueKind;
use healthrisk_instruments::Calculator;

/// Answer the first `scores.len()` sections with the option worth each score.
/// Options are listed in score order, 0 through 5.
fn answers(scores: &[usize]) -> AnswerSet {
    Odi.questions()
        .iter()
        .zip(scores)
        .map(|(q, s)| (q.id.clone(), q.options[*s].clone()))
        .collect()
}

#[test]
fn ten_sections_use_denominator_of_fifty() {
    let set = answers(&[1; 10]);
    let summary = Odi::summarize(&set);
    assert_eq!(summary.answered_sections, 10);
    assert_eq!(summary.raw_total, 10);

    let result = Odi.calculate_risk(&set).unwrap();
    assert_eq!(result.score, 20.0);
    assert_eq!(result.raw_risk_label, "Minimal Disability");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::Minimal);
}

#[test]
fn eight_sections_use_denominator_of_forty() {
    let result = Odi.calculate_risk(&answers(&[5; 8])).unwrap();
    // 40 / 40, not 40 / 50.
    assert_eq!(result.score, 100.0);
    assert_eq!(result.raw_risk_label, "Bed-bound");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::Severe);
}

#[test]
fn percentage_bands_map_to_standard_levels() {
    // 21 / 50 = 42%
    let set = answers(&[3, 3, 3, 3, 3, 2, 2, 2, 0, 0]);
    let result = Odi.calculate_risk(&set).unwrap();
    assert_eq!(result.score, 42.0);
    assert_eq!(result.raw_risk_label, "Severe Disability");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::Moderate);

    // 35 / 50 = 70%
    let set = answers(&[4, 4, 4, 4, 4, 3, 3, 3, 3, 3]);
    let result = Odi.calculate_risk(&set).unwrap();
    assert_eq!(result.score, 70.0);
    assert_eq!(result.raw_risk_label, "Crippled");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::High);
}

#[test]
fn unrecognized_answer_drops_out_of_denominator() {
    let mut pairs: Vec<(String, String)> = answers(&[5; 9])
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.push(("travelling".to_string(), "bogus".to_string()));
    let set: AnswerSet = pairs.into_iter().collect();

    assert_eq!(Odi::summarize(&set).answered_sections, 9);
    assert_eq!(Odi.calculate_risk(&set).unwrap().score, 100.0);
}

#[test]
fn no_sections_answered_is_zero_and_flagged() {
    let set = AnswerSet::new();
    let summary = Odi::summarize(&set);
    assert_eq!(summary.answered_sections, 0);
    assert_eq!(summary.percentage, None);

    let result = Odi.calculate_risk(&set).unwrap();
    assert_eq!(result.score, 0.0);
    assert!(result.interpretation.contains("not valid"));

    let issues = Odi.validate_answers(&set);
    assert!(issues.iter().any(|i| i.kind == IssueKind::Incomplete));
}

#[test]
fn validity_requires_eight_sections() {
    assert!(!Odi::is_valid(&answers(&[2; 7])));
    assert!(Odi::is_valid(&answers(&[2; MIN_VALID_SECTIONS])));

    let result = Odi.calculate_risk(&answers(&[2; 7])).unwrap();
    assert!(result.interpretation.contains("interpret with caution"));
}

#[test]
fn complete_answers_have_no_issues() {
    assert!(Odi.validate_answers(&answers(&[0; 10])).is_empty());
}
