use serde::{Deserialize, Serialize};

/// Allowed arrival offset after the shift start. Arrivals inside the
/// offset are on time; lateness counts from its end.
/// Only these five values exist, there is no free-form duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedOffset {
    #[serde(rename = "1h")]
    M60,
    #[serde(rename = "1.5h")]
    M90,
    #[serde(rename = "2h")]
    M120,
    #[serde(rename = "2.5h")]
    M150,
    #[serde(rename = "3h")]
    M180,
}

impl ExpectedOffset {
    pub fn minutes(&self) -> i64 {
        match self {
            ExpectedOffset::M60 => 60,
            ExpectedOffset::M90 => 90,
            ExpectedOffset::M120 => 120,
            ExpectedOffset::M150 => 150,
            ExpectedOffset::M180 => 180,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpectedOffset::M60 => "1h",
            ExpectedOffset::M90 => "1.5h",
            ExpectedOffset::M120 => "2h",
            ExpectedOffset::M150 => "2.5h",
            ExpectedOffset::M180 => "3h",
        }
    }

    /// Helper: convert input label from CLI ("1.5h" or bare "1.5")
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "1" | "1h" => Some(ExpectedOffset::M60),
            "1.5" | "1.5h" => Some(ExpectedOffset::M90),
            "2" | "2h" => Some(ExpectedOffset::M120),
            "2.5" | "2.5h" => Some(ExpectedOffset::M150),
            "3" | "3h" => Some(ExpectedOffset::M180),
            _ => None,
        }
    }
}

impl Default for ExpectedOffset {
    fn default() -> Self {
        ExpectedOffset::M60
    }
}
