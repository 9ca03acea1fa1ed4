//! Location catalogue types

use serde::{Deserialize, Serialize};

/// Brazilian federative unit (`GET /locations/states`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub uf: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Municipality within a state (`GET /locations/cities/{uf}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}
