//! Profession catalogue and user-profession links

use std::fmt;

use serde::{Deserialize, Serialize};

/// Global catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// A profession linked to the current user (`GET /user/professions`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfession {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    /// Raw status code as sent by the backend; see [`UserProfession::status`]
    #[serde(rename = "situacao")]
    pub raw_status: String,
    /// Rating label computed by the backend
    #[serde(rename = "avaliacao")]
    pub rating: String,
}

impl UserProfession {
    pub fn status(&self) -> ProfessionStatus {
        ProfessionStatus::parse(&self.raw_status)
    }
}

/// Lifecycle of a user-profession link, controlled by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessionStatus {
    Active,
    Inactive,
    Pending,
    /// Any code the client does not know; shown verbatim
    Other(String),
}

/// Visual emphasis for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Neutral,
    Warning,
}

impl ProfessionStatus {
    /// Case-insensitive; accepts both the one-letter and the long codes.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "A" | "ATIVO" => Self::Active,
            "I" | "INATIVO" => Self::Inactive,
            "P" | "PENDENTE" => Self::Pending,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Pending => "Pendente",
            Self::Other(raw) => raw,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Active => StatusTone::Success,
            Self::Pending => StatusTone::Warning,
            Self::Inactive | Self::Other(_) => StatusTone::Neutral,
        }
    }
}

impl fmt::Display for ProfessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
