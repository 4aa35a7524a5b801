use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// Gender choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(s.to_string()),
        }
    }
}

/// Represents one employee on the roster.
///
/// The same shape doubles as the form draft, so every field may be empty
/// until the record is submitted and validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Employee {
    /// Creates a record with every required field set and no image.
    #[cfg(test)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        gender: Gender,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            gender: Some(gender),
            position: position.into(),
            image: None,
        }
    }

    #[cfg(test)]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// True when every field is blank, i.e. there is no draft in progress.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Search predicate: case-sensitive substring match on name or id.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.id.contains(query)
    }
}

impl Entity for Employee {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

/// Form fields that can be edited on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Gender,
    Position,
    Id,
    Image,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "gender" => Ok(Field::Gender),
            "position" => Ok(Field::Position),
            "id" => Ok(Field::Id),
            "image" => Ok(Field::Image),
            _ => Err(s.to_string()),
        }
    }
}

/// A single keystroke-level change to the draft: one variant per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Email(String),
    Phone(String),
    Gender(Option<Gender>),
    Position(String),
    Id(String),
    Image(Option<String>),
}

impl DraftEdit {
    pub fn field(&self) -> Field {
        match self {
            DraftEdit::Name(_) => Field::Name,
            DraftEdit::Email(_) => Field::Email,
            DraftEdit::Phone(_) => Field::Phone,
            DraftEdit::Gender(_) => Field::Gender,
            DraftEdit::Position(_) => Field::Position,
            DraftEdit::Id(_) => Field::Id,
            DraftEdit::Image(_) => Field::Image,
        }
    }

    /// Replaces exactly one field of `draft`.
    pub fn apply(self, draft: &mut Employee) {
        match self {
            DraftEdit::Name(name) => draft.name = name,
            DraftEdit::Email(email) => draft.email = email,
            DraftEdit::Phone(phone) => draft.phone = phone,
            DraftEdit::Gender(gender) => draft.gender = gender,
            DraftEdit::Position(position) => draft.position = position,
            DraftEdit::Id(id) => draft.id = id,
            DraftEdit::Image(image) => draft.image = image,
        }
    }
}
