use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::risk::StandardRiskLevel;
use healthrisk_instruments::instruments::hcri::Hcri;
use healthrisk_instruments::Calculator;

#[test]
fn defaults_are_below_average() {
    let score = Hcri::index_score(&AnswerSet::new());
    // 50-59 band, male.
    assert_eq!(score.individual, 60.0);
    assert_eq!(score.population_average, 135.0);
    assert_eq!(score.relative_risk, 0.44);

    let result = Hcri.calculate_risk(&AnswerSet::new()).unwrap();
    assert_eq!(result.raw_risk_label, "Minimal Risk");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::Minimal);
    assert!(!result.interpretation.contains("modifiable contributors"));
}

#[test]
fn individual_score_is_floored() {
    let set = AnswerSet::from([
        ("age", "under_30"),
        ("sex", "male"),
        ("cancer_screening", "up_to_date"),
        ("vitamin_use", "daily"),
    ]);
    let score = Hcri::index_score(&set);
    assert_eq!(score.individual, 50.0);
    assert_eq!(score.relative_risk, 0.77);
    assert_eq!(Hcri.calculate_risk(&set).unwrap().raw_risk_label, "Low Risk");
}

#[test]
fn female_only_factors_are_ignored_for_men() {
    let female = AnswerSet::from([("age", "50-59"), ("sex", "female"), ("hormone_use", "current")]);
    let score = Hcri::index_score(&female);
    assert_eq!(score.individual, 75.0);
    assert_eq!(score.population_average, 130.0);
    assert_eq!(score.relative_risk, 0.58);

    let male = AnswerSet::from([("age", "50-59"), ("sex", "male"), ("hormone_use", "current")]);
    assert_eq!(Hcri::index_score(&male).individual, 60.0);
}

#[test]
fn lifestyle_factors_move_the_band() {
    let smoker = AnswerSet::from([("age", "50-59"), ("sex", "male"), ("smoking", "current_heavy")]);
    let result = Hcri.calculate_risk(&smoker).unwrap();
    assert_eq!(result.score, 0.96);
    assert_eq!(result.raw_risk_label, "Moderate Risk");

    let worse = AnswerSet::from([
        ("age", "50-59"),
        ("sex", "male"),
        ("smoking", "current_heavy"),
        ("physical_activity", "sedentary"),
        ("diet", "poor"),
    ]);
    let result = Hcri.calculate_risk(&worse).unwrap();
    assert_eq!(result.score, 1.3);
    assert_eq!(result.raw_risk_label, "High Risk");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::High);
}

#[test]
fn very_high_lists_top_modifiable_contributors() {
    let set = AnswerSet::from([
        ("age", "60-69"),
        ("sex", "male"),
        ("family_history", "multiple_relatives"),
        ("genetic_testing", "positive"),
        ("smoking", "current_heavy"),
        ("alcohol", "heavy"),
        ("diet", "poor"),
        ("physical_activity", "sedentary"),
        ("bmi", "over_35"),
        ("environmental_exposure", "significant"),
    ]);
    let score = Hcri::index_score(&set);
    assert_eq!(score.individual, 380.0);
    assert_eq!(score.relative_risk, 2.24);
    // Family history and genetics are not modifiable.
    assert_eq!(score.modifiable_contributors.len(), 6);
    assert_eq!(score.modifiable_contributors[0], ("smoking", 70));

    let result = Hcri.calculate_risk(&set).unwrap();
    assert_eq!(result.raw_risk_label, "Very High Risk");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::Severe);
    assert!(result
        .interpretation
        .contains("Largest modifiable contributors: smoking, alcohol, body weight."));
}

#[test]
fn numeric_age_maps_to_band() {
    let numeric = Hcri::index_score(&AnswerSet::from([("age", "45"), ("sex", "female")]));
    let banded = Hcri::index_score(&AnswerSet::from([("age", "40-49"), ("sex", "female")]));
    assert_eq!(numeric, banded);
    assert_eq!(numeric.population_average, 110.0);
}
