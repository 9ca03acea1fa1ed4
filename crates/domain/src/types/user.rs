//! User and session types

use serde::{Deserialize, Serialize};

/// The user record returned by `POST /auth/login` and persisted under the
/// `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub name: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Token and user returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    pub user: SessionUser,
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Profile as owned by the backend (`GET /user/profile`)
///
/// `email` and `tax_id` are fixed at registration; the editable subset is
/// [`ProfileUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// State code (UF)
    #[serde(rename = "estado")]
    pub state: String,
    /// City id; 0 means none selected
    #[serde(rename = "cidade", default)]
    pub city: i64,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    /// CPF or CNPJ
    #[serde(rename = "cpfCnpj")]
    pub tax_id: String,
}

impl UserProfile {
    /// The fields `PUT /user/profile` is allowed to change
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            phone: self.phone.clone(),
            state: self.state.clone(),
            city: self.city,
            neighborhood: self.neighborhood.clone(),
        }
    }
}

/// Partial profile body for `PUT /user/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: i64,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
}

/// Registration body for `POST /user/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Registration {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}
