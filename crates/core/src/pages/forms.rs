//! Editable form models and their validation schemas

use euindico_common::{FieldRules, FieldValue, FormSchema, FormValues};
use euindico_domain::constants::{
    messages, DEFAULT_STATE_UF, MAX_RATING, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_RATING,
};
use euindico_domain::{ProfileUpdate, Registration, Review, UserProfile};

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl FormValues for LoginForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "username" => Some(FieldValue::Text(&self.username)),
            "password" => Some(FieldValue::Text(&self.password)),
            _ => None,
        }
    }
}

pub fn login_schema() -> FormSchema {
    FormSchema::new()
        .field(
            FieldRules::new("username")
                .required(messages::EMAIL_REQUIRED)
                .email(messages::EMAIL_INVALID),
        )
        .field(FieldRules::new("password").required(messages::PASSWORD_REQUIRED))
}

/// Sign-up form; starts on the default state with no city picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub state: String,
    pub city: i64,
    pub neighborhood: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            tax_id: String::new(),
            state: DEFAULT_STATE_UF.to_string(),
            city: 0,
            neighborhood: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl RegisterForm {
    pub fn to_registration(&self) -> Registration {
        Registration {
            profile: UserProfile {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                state: self.state.clone(),
                city: self.city,
                neighborhood: self.neighborhood.clone(),
                tax_id: self.tax_id.clone(),
            },
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

impl FormValues for RegisterForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value = match field {
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "tax_id" => FieldValue::Text(&self.tax_id),
            "state" => FieldValue::Text(&self.state),
            "city" => FieldValue::Number(self.city),
            "neighborhood" => FieldValue::Text(&self.neighborhood),
            "password" => FieldValue::Text(&self.password),
            "confirm_password" => FieldValue::Text(&self.confirm_password),
            _ => return None,
        };
        Some(value)
    }
}

fn contact_fields(schema: FormSchema) -> FormSchema {
    schema
        .field(
            FieldRules::new("name")
                .required(messages::NAME_REQUIRED)
                .min_length(MIN_NAME_LENGTH, messages::NAME_TOO_SHORT),
        )
        .field(
            FieldRules::new("email")
                .required(messages::EMAIL_REQUIRED)
                .email(messages::EMAIL_INVALID),
        )
        .field(FieldRules::new("phone").required(messages::PHONE_REQUIRED))
        .field(FieldRules::new("tax_id").required(messages::TAX_ID_REQUIRED))
        .field(FieldRules::new("state").required(messages::STATE_REQUIRED))
        .field(FieldRules::new("city").min(1, messages::CITY_REQUIRED))
        .field(FieldRules::new("neighborhood").required(messages::NEIGHBORHOOD_REQUIRED))
}

pub fn register_schema() -> FormSchema {
    contact_fields(FormSchema::new())
        .field(
            FieldRules::new("password")
                .required(messages::PASSWORD_REQUIRED)
                .min_length(MIN_PASSWORD_LENGTH, messages::PASSWORD_TOO_SHORT),
        )
        .field(
            FieldRules::new("confirm_password")
                .required(messages::PASSWORD_CONFIRMATION_REQUIRED)
                .equals_field("password", messages::PASSWORDS_DO_NOT_MATCH),
        )
}

/// Editable copy of the profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub profile: UserProfile,
}

impl ProfileForm {
    pub fn to_update(&self) -> ProfileUpdate {
        self.profile.to_update()
    }
}

impl FormValues for ProfileForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let profile = &self.profile;
        let value = match field {
            "name" => FieldValue::Text(&profile.name),
            "email" => FieldValue::Text(&profile.email),
            "phone" => FieldValue::Text(&profile.phone),
            "tax_id" => FieldValue::Text(&profile.tax_id),
            "state" => FieldValue::Text(&profile.state),
            "city" => FieldValue::Number(profile.city),
            "neighborhood" => FieldValue::Text(&profile.neighborhood),
            _ => return None,
        };
        Some(value)
    }
}

pub fn profile_schema() -> FormSchema {
    contact_fields(FormSchema::new())
}

/// New catalogue entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionForm {
    pub name: String,
}

impl FormValues for ProfessionForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        (field == "name").then_some(FieldValue::Text(&self.name))
    }
}

pub fn profession_schema() -> FormSchema {
    FormSchema::new().field(
        FieldRules::new("name")
            .required(messages::PROFESSION_NAME_REQUIRED)
            .min_length(MIN_NAME_LENGTH, messages::NAME_TOO_SHORT),
    )
}

/// Profession picked to add to the user's own list; 0 means none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddProfessionForm {
    pub profession_id: i64,
}

impl FormValues for AddProfessionForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        (field == "profession_id").then_some(FieldValue::Number(self.profession_id))
    }
}

pub fn add_profession_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldRules::new("profession_id").min(1, messages::PROFESSION_REQUIRED))
}

/// Search filters; 0 means unset for both
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub profession_id: i64,
    pub city_id: i64,
}

impl SearchForm {
    /// City filter to send, if any
    pub fn city(&self) -> Option<i64> {
        (self.city_id > 0).then_some(self.city_id)
    }
}

impl FormValues for SearchForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "profession_id" => Some(FieldValue::Number(self.profession_id)),
            "city_id" => Some(FieldValue::Number(self.city_id)),
            _ => None,
        }
    }
}

pub fn search_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldRules::new("profession_id").min(1, messages::SELECT_PROFESSION))
}

/// Review being written in the dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub review: Review,
}

impl FormValues for ReviewForm {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "rating" => Some(FieldValue::Number(i64::from(self.review.rating))),
            "comment" => Some(FieldValue::Text(&self.review.comment)),
            _ => None,
        }
    }
}

pub fn review_schema() -> FormSchema {
    FormSchema::new().field(FieldRules::new("rating").range(
        i64::from(MIN_RATING),
        i64::from(MAX_RATING),
        messages::RATING_REQUIRED,
    ))
}
