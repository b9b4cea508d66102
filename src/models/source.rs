use serde::Serialize;

/// How a check-in entered the system.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum CheckInSource {
    /// Typed in by an operator.
    Manual,
    /// Handed over by the QR-scan producer.
    Scan,
}

impl CheckInSource {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CheckInSource::Manual => "manual",
            CheckInSource::Scan => "scan",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "manual" => Some(CheckInSource::Manual),
            "scan" => Some(CheckInSource::Scan),
            _ => None,
        }
    }
}
