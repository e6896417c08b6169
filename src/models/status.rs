use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Present,
    Sick,
    Travel,
}

impl Status {
    pub fn code(&self) -> &str {
        match self {
            Status::Present => "P",
            Status::Sick => "S",
            Status::Travel => "T",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Sick => "Sick",
            Status::Travel => "Travel",
        }
    }

    /// Helper: convert input code from CLI (single letter or full word,
    /// any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "p" | "present" => Some(Status::Present),
            "s" | "sick" => Some(Status::Sick),
            "t" | "travel" => Some(Status::Travel),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Status::Present)
    }
}
