//! Lookup tables that turn categorical answer tokens into numbers.
//!
//! Unknown or missing tokens never fail: bucket tables fall back to a
//! neutral default and point tables report `None` so the caller decides.

/// Maps bucket tokens (e.g. `"55-59"`) to a representative value.
#[derive(Debug, Clone, Copy)]
pub struct BucketTable {
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl BucketTable {
    pub const fn new(entries: &'static [(&'static str, f64)], default: f64) -> Self {
        Self { entries, default }
    }

    /// The mapped value for a token, a plain number given as-is, or `None`.
    pub fn lookup(&self, token: &str) -> Option<f64> {
        let token = token.trim();
        self.entries
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(token))
            .map(|(_, v)| *v)
            .or_else(|| token.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    pub fn value(&self, token: &str) -> f64 {
        self.lookup(token).unwrap_or(self.default)
    }

    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(t, _)| *t)
    }
}

/// Maps answer tokens to integer points.
#[derive(Debug, Clone, Copy)]
pub struct PointTable {
    entries: &'static [(&'static str, i32)],
}

impl PointTable {
    pub const fn new(entries: &'static [(&'static str, i32)]) -> Self {
        Self { entries }
    }

    pub fn points(&self, token: &str) -> Option<i32> {
        let token = token.trim();
        self.entries
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(token))
            .map(|(_, p)| *p)
    }

    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(t, _)| *t)
    }
}

pub const YES_NO: [&str; 2] = ["yes", "no"];

pub fn is_yes(value: &str) -> bool {
    let value = value.trim();
    ["yes", "y", "true"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const OPTIONS: [&'static str; 2] = ["male", "female"];

    pub fn from_answer(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}
