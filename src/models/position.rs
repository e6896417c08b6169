use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Unknown,       // U
    Engineer,      // E
    Manager,       // M
    Technician,    // T
    Administrator, // A
    Director,      // D
}

impl Position {
    pub fn code(&self) -> &str {
        match self {
            Position::Unknown => "U",
            Position::Engineer => "E",
            Position::Manager => "M",
            Position::Technician => "T",
            Position::Administrator => "A",
            Position::Director => "D",
        }
    }

    /// Human-readable label, also the stored form in the snapshot file.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Unknown => "Unknown",
            Position::Engineer => "Engineer",
            Position::Manager => "Manager",
            Position::Technician => "Technician",
            Position::Administrator => "Administrator",
            Position::Director => "Director",
        }
    }

    /// Helper: convert input code from CLI (single letter or full word,
    /// any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "u" | "unknown" => Some(Position::Unknown),
            "e" | "engineer" => Some(Position::Engineer),
            "m" | "manager" => Some(Position::Manager),
            "t" | "technician" => Some(Position::Technician),
            "a" | "administrator" => Some(Position::Administrator),
            "d" | "director" => Some(Position::Director),
            _ => None,
        }
    }
}
