// File: usermgmt-server/src/models/users.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use usermgmt_common::models::User;

use super::LogListItemViewModel;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserListItemViewModel {
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub is_active: bool,
}

impl From<&User> for UserListItemViewModel {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            forename: user.forename.clone(),
            surname: user.surname.clone(),
            date_of_birth: user.date_of_birth,
            email: user.email.clone(),
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserListViewModel {
    pub items: Vec<UserListItemViewModel>,
}

impl UserListViewModel {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            items: users.iter().map(UserListItemViewModel::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserLogsViewModel {
    pub user: UserListItemViewModel,
    pub logs: Vec<LogListItemViewModel>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<i64>,
}

/// Submitted add/edit form. Every field is kept as text so a failed
/// submission can be shown back exactly as it was typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub id: Option<i64>,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_active: bool,
}

/// A form that passed validation, with its date parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidUser {
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

impl ValidUser {
    pub fn into_new_user(self) -> User {
        User::new(&self.forename, &self.surname, self.date_of_birth, &self.email, self.is_active)
    }

    /// Copies the editable fields onto an existing record; the id is left alone.
    pub fn apply_to(self, user: &mut User) {
        user.forename = self.forename;
        user.surname = self.surname;
        user.date_of_birth = self.date_of_birth;
        user.email = self.email;
        user.is_active = self.is_active;
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            forename: user.forename.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            date_of_birth: user.date_of_birth.format(DATE_FORMAT).to_string(),
            is_active: user.is_active,
        }
    }
}

impl UserForm {
    pub fn validate(&self) -> Result<ValidUser, BTreeMap<&'static str, String>> {
        let mut errors = BTreeMap::new();

        let forename = self.forename.trim();
        if forename.is_empty() {
            errors.insert("forename", "The Forename field is required.".to_string());
        }
        let surname = self.surname.trim();
        if surname.is_empty() {
            errors.insert("surname", "The Surname field is required.".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", "The Email field is required.".to_string());
        } else if !looks_like_email(email) {
            errors.insert("email", "The Email field is not a valid e-mail address.".to_string());
        }

        let date_of_birth = match self.date_of_birth.trim() {
            "" => {
                errors.insert("date_of_birth", "The DateOfBirth field is required.".to_string());
                None
            }
            raw => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert(
                        "date_of_birth",
                        "The DateOfBirth field must be a date in YYYY-MM-DD format.".to_string(),
                    );
                    None
                }
            },
        };

        match date_of_birth {
            Some(date_of_birth) if errors.is_empty() => Ok(ValidUser {
                forename: forename.to_string(),
                surname: surname.to_string(),
                email: email.to_string(),
                date_of_birth,
                is_active: self.is_active,
            }),
            _ => Err(errors),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// HTML checkboxes submit "on"; other clients tend to send "true" or "1".
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes"))
}

/// The add/edit form as shown to the client, with any validation messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserFormViewModel {
    pub form: UserForm,
    pub errors: BTreeMap<&'static str, String>,
}

impl UserFormViewModel {
    pub fn with_errors(form: UserForm, errors: BTreeMap<&'static str, String>) -> Self {
        Self { form, errors }
    }
}
