use healthrisk_core::models::risk::StandardRiskLevel;

/// Keyword groups, tested in order against the lower-cased label.
///
/// The first group with a matching substring wins, so a keyword listed in
/// a later group is shadowed whenever an earlier group also matches
/// (`"very high"` contains `"high"` and therefore classifies as High).
const KEYWORD_RULES: [(StandardRiskLevel, &[&str]); 5] = [
    (StandardRiskLevel::Minimal, &["minimal", "not at all"]),
    (StandardRiskLevel::Low, &["low", "very low"]),
    (
        StandardRiskLevel::Moderate,
        &[
            "moderate",
            "medium",
            "borderline",
            "intermediate",
            "slightly elevated",
            "mild",
        ],
    ),
    (StandardRiskLevel::High, &["high", "medium-high"]),
    (StandardRiskLevel::Severe, &["severe", "very high", "extremely"]),
];

/// Classify a free-text risk label into the canonical taxonomy.
/// Labels matching no keyword classify as Low.
pub fn keyword_level(raw_label: &str) -> StandardRiskLevel {
    let label = raw_label.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| label.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or(StandardRiskLevel::Low)
}
