//! Search results and reviews

use serde::{Deserialize, Serialize};

/// Read-only projection returned by `GET /search/professionals`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: i64,
    #[serde(rename = "idProfissao")]
    pub profession_id: i64,
    #[serde(rename = "contato")]
    pub contact: String,
    #[serde(rename = "nome")]
    pub name: String,
    /// Rating label computed by the backend
    #[serde(rename = "nota")]
    pub rating: String,
}

/// Body of `POST /reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Review {
    #[serde(rename = "idProfissao")]
    pub profession_id: i64,
    #[serde(rename = "idPrestador")]
    pub professional_id: i64,
    /// 1 to 5; 0 while the user has not picked a rating
    #[serde(rename = "avaliacao")]
    pub rating: u8,
    #[serde(rename = "comentario")]
    pub comment: String,
}

impl Review {
    /// Empty draft addressed to `professional`
    pub fn draft_for(professional: &Professional) -> Self {
        Self {
            profession_id: professional.profession_id,
            professional_id: professional.id,
            rating: 0,
            comment: String::new(),
        }
    }
}
