use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::risk::StandardRiskLevel;
use healthrisk_instruments::instruments::frax::{bmd_multiplier, Frax};
use healthrisk_instruments::Calculator;

#[test]
fn base_risk_for_older_woman() {
    let set = AnswerSet::from([("age", "65-69"), ("sex", "female")]);
    let risk = Frax::fracture_risk(&set);
    assert_eq!(risk.major, 8.5);
    assert_eq!(risk.hip, 1.2);
    assert!(!risk.bmd_applied);

    let result = Frax.calculate_risk(&set).unwrap();
    assert_eq!(result.score, 8.5);
    assert_eq!(result.raw_risk_label, "Low Risk");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::Low);
    assert!(result.interpretation.contains("Bone density was not provided"));
}

#[test]
fn sex_defaults_to_female() {
    let unspecified = Frax::fracture_risk(&AnswerSet::from([("age", "65-69")]));
    assert_eq!(unspecified.major, 8.5);
}

#[test]
fn prior_fracture_raises_major_risk() {
    let set = AnswerSet::from([("age", "65-69"), ("prior_fracture", "yes")]);
    let risk = Frax::fracture_risk(&set);
    assert_eq!(risk.major, 15.8);
    assert_eq!(risk.hip, 1.7);
    assert_eq!(risk.risk_factors, vec!["Previous fragility fracture"]);

    let result = Frax.calculate_risk(&set).unwrap();
    assert_eq!(result.raw_risk_label, "Moderate Risk");
    assert!(result.interpretation.contains("previous fragility fracture"));
}

#[test]
fn hip_hazard_ratio_is_capped() {
    let prior = Frax::fracture_risk(&AnswerSet::from([("age", "65-69"), ("prior_fracture", "yes")]));
    let parent =
        Frax::fracture_risk(&AnswerSet::from([("age", "65-69"), ("parent_hip_fracture", "yes")]));
    assert_eq!(parent.major, 13.1);
    assert!(prior.major > parent.major);
    // Both hazard ratios exceed the hip cap, so hip risk is the same.
    assert_eq!(prior.hip, parent.hip);
}

#[test]
fn overall_label_takes_the_worse_site() {
    let set = AnswerSet::from([
        ("age", "80-84"),
        ("sex", "male"),
        ("bmi", "under_18.5"),
        ("bmd_t_score", "-1.5"),
    ]);
    let risk = Frax::fracture_risk(&set);
    assert_eq!(risk.major, 18.3);
    assert_eq!(risk.hip, 5.1);
    assert!(risk.bmd_applied);

    let result = Frax.calculate_risk(&set).unwrap();
    // Major is moderate, hip is high.
    assert_eq!(result.score, 18.3);
    assert_eq!(result.raw_risk_label, "High Risk");
    assert_eq!(result.standard_risk_level, StandardRiskLevel::High);
    assert!(!result.interpretation.contains("Bone density was not provided"));
}

#[test]
fn under_forty_is_informational_only() {
    let result = Frax
        .calculate_risk(&AnswerSet::from([("age", "under_40")]))
        .unwrap();
    assert_eq!(result.score, 0.9);
    assert!(result.interpretation.contains("not validated below age 40"));
    assert!(!result.interpretation.contains("recommended"));
}

#[test]
fn probabilities_are_capped() {
    let set = AnswerSet::from([
        ("age", "90_plus"),
        ("bmi", "under_18.5"),
        ("prior_fracture", "yes"),
        ("parent_hip_fracture", "yes"),
        ("current_smoking", "yes"),
        ("glucocorticoids", "yes"),
        ("rheumatoid_arthritis", "yes"),
        ("secondary_osteoporosis", "yes"),
        ("alcohol", "yes"),
        ("bmd_t_score", "below_-3"),
    ]);
    let risk = Frax::fracture_risk(&set);
    assert_eq!(risk.major, 60.0);
    assert_eq!(risk.hip, 30.0);
    assert_eq!(risk.risk_factors.len(), 7);
}

#[test]
fn unknown_bone_density_is_ignored() {
    let set = AnswerSet::from([("age", "65-69"), ("bmd_t_score", "unknown")]);
    let risk = Frax::fracture_risk(&set);
    assert!(!risk.bmd_applied);
    assert_eq!(risk.major, 8.5);
}

#[test]
fn bmd_multiplier_is_one_at_minus_one_and_continuous() {
    assert!((bmd_multiplier(-1.0) - 1.0).abs() < 1e-12);
    assert!(bmd_multiplier(0.0) < 1.0);
    assert!(bmd_multiplier(-2.0) > 1.0);

    let eps = 1e-9;
    assert!((bmd_multiplier(-1.0 + eps) - bmd_multiplier(-1.0 - eps)).abs() < 1e-6);
    assert!((bmd_multiplier(-2.5 + eps) - bmd_multiplier(-2.5 - eps)).abs() < 1e-6);
}

#[test]
fn bmd_multiplier_grows_as_density_falls() {
    let t_scores = [1.0, 0.0, -1.0, -1.5, -2.0, -2.5, -3.0, -3.5];
    for pair in t_scores.windows(2) {
        assert!(bmd_multiplier(pair[1]) > bmd_multiplier(pair[0]));
    }
}
