//! Wire shapes of the backend responses
//!
//! Every endpoint answers `{ success, ... }`, but the payload field differs
//! (`token`/`user` on login, `user` on profile, `data` on lists, nothing on
//! acknowledgements). Each shape decodes on its own and converts into the
//! endpoint's [`Envelope`].

use euindico_domain::{Ack, Envelope, LoginGrant, SessionUser, UserProfile};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A response body that can be read as an envelope
pub trait WireEnvelope: DeserializeOwned {
    type Payload;

    fn into_envelope(self) -> Envelope<Self::Payload>;
}

fn refused<T>(message: Option<String>) -> Envelope<T> {
    Envelope::Failure { message }
}

/// `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WireEnvelope for LoginBody {
    type Payload = LoginGrant;

    fn into_envelope(self) -> Envelope<LoginGrant> {
        match (self.success, self.token, self.user) {
            (true, Some(token), Some(user)) => Envelope::Success(LoginGrant { token, user }),
            _ => refused(self.message),
        }
    }
}

/// Endpoints that only acknowledge
#[derive(Debug, Deserialize)]
pub struct AckBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl WireEnvelope for AckBody {
    type Payload = Ack;

    fn into_envelope(self) -> Envelope<Ack> {
        if self.success {
            Envelope::Success(Ack { message: self.message })
        } else {
            refused(self.message)
        }
    }
}

/// `GET /user/profile`
#[derive(Debug, Deserialize)]
pub struct ProfileBody {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WireEnvelope for ProfileBody {
    type Payload = UserProfile;

    fn into_envelope(self) -> Envelope<UserProfile> {
        match (self.success, self.user) {
            (true, Some(user)) => Envelope::Success(user),
            _ => refused(self.message),
        }
    }
}

/// List endpoints (`data: [...]`); a missing list reads as empty
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ListBody<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T: DeserializeOwned> WireEnvelope for ListBody<T> {
    type Payload = Vec<T>;

    fn into_envelope(self) -> Envelope<Vec<T>> {
        if self.success {
            Envelope::Success(self.data)
        } else {
            refused(self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use euindico_domain::State;

    use super::*;

    fn decode<W: WireEnvelope>(json: &str) -> Envelope<W::Payload> {
        serde_json::from_str::<W>(json).unwrap().into_envelope()
    }

    #[test]
    fn login_success_needs_token_and_user() {
        let ok = decode::<LoginBody>(
            r#"{"success":true,"token":"t1","user":{"username":"a@b.com","name":"A","isAdmin":false}}"#,
        );
        assert!(matches!(ok, Envelope::Success(LoginGrant { ref token, .. }) if token == "t1"));

        let missing = decode::<LoginBody>(r#"{"success":true,"token":"t1"}"#);
        assert_eq!(missing, Envelope::Failure { message: None });
    }

    #[test]
    fn login_failure_keeps_message() {
        let failed = decode::<LoginBody>(r#"{"success":false,"message":"Usuário não encontrado"}"#);
        assert_eq!(failed, Envelope::failure("Usuário não encontrado"));
    }

    #[test]
    fn ack_carries_optional_message() {
        let ok = decode::<AckBody>(r#"{"success":true,"message":"Cadastro criado com sucesso!"}"#);
        assert_eq!(ok, Envelope::Success(Ack { message: Some("Cadastro criado com sucesso!".into()) }));
        assert_eq!(decode::<AckBody>(r#"{"success":false}"#), Envelope::bare_failure());
    }

    #[test]
    fn list_without_data_is_empty() {
        let ok = decode::<ListBody<State>>(r#"{"success":true}"#);
        assert_eq!(ok, Envelope::Success(Vec::new()));
    }

    #[test]
    fn non_envelope_bodies_do_not_decode() {
        assert!(serde_json::from_str::<AckBody>(r#"{"error":"boom"}"#).is_err());
        assert!(serde_json::from_str::<AckBody>("<html></html>").is_err());
    }
}
