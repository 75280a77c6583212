use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One candidate ortholog pair: a sparrow gene, the butterfly gene presumed to
/// share its ancestor, their sequence identity and a free-text grouping label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneOrthologRecord {
    #[serde(rename = "sparrow")]
    pub sparrow_gene: String,
    #[serde(rename = "butterfly")]
    pub butterfly_gene: String,
    #[serde(rename = "identity", serialize_with = "serialize_identity")]
    pub identity_percent: f64,
    pub category: String,
}

impl GeneOrthologRecord {
    pub fn new(
        sparrow_gene: impl Into<String>,
        butterfly_gene: impl Into<String>,
        identity_percent: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            sparrow_gene: sparrow_gene.into(),
            butterfly_gene: butterfly_gene.into(),
            identity_percent,
            category: category.into(),
        }
    }
}

impl fmt::Display for GeneOrthologRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ↔ {} ({}%)",
            self.sparrow_gene,
            self.butterfly_gene,
            format_identity(self.identity_percent)
        )
    }
}

/// 整數值保留一位小數 (90 -> "90.0")，其餘使用最短可還原表示
pub fn format_identity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn serialize_identity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_identity(*value))
}

/// Result of one project check. Checks never fail the run; they report here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub details: Vec<String>,
}

impl CheckOutcome {
    pub fn pass(name: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            details,
        }
    }

    pub fn fail(name: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let record = GeneOrthologRecord::new("MYH7", "Mhc", 87.5, "muscle");
        assert_eq!(record.to_string(), "MYH7 ↔ Mhc (87.5%)");
    }

    #[test]
    fn test_format_identity() {
        assert_eq!(format_identity(65.8), "65.8");
        assert_eq!(format_identity(90.0), "90.0");
        assert_eq!(format_identity(0.0), "0.0");
        assert_eq!(format_identity(71.25), "71.25");
    }
}
