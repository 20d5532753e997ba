use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Named columns of a card record, in prompt and CSV order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    Name,
    Gender,
    Dob,
    Mobile,
    Address,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Company,
        Field::Name,
        Field::Gender,
        Field::Dob,
        Field::Mobile,
        Field::Address,
    ];

    /// Column / flag name as it appears in CSV headers and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Name => "name",
            Field::Gender => "gender",
            Field::Dob => "dob",
            Field::Mobile => "mobile",
            Field::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw, untrimmed values as they arrive from CSV, flags or prompts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub company: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
}

impl RawRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => self.company.as_deref(),
            Field::Name => self.name.as_deref(),
            Field::Gender => self.gender.as_deref(),
            Field::Dob => self.dob.as_deref(),
            Field::Mobile => self.mobile.as_deref(),
            Field::Address => self.address.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Name => &mut self.name,
            Field::Gender => &mut self.gender,
            Field::Dob => &mut self.dob,
            Field::Mobile => &mut self.mobile,
            Field::Address => &mut self.address,
        };
        *slot = Some(value.into());
    }
}

/// One person's card data. Every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    company: String,
    name: String,
    gender: String,
    dob: String,
    mobile: String,
    address: String,
}

impl CardRecord {
    /// Build a record from raw values, trimming each one.
    ///
    /// Absent and blank values are both reported, in [`Field::ALL`] order.
    pub fn new(raw: &RawRecord) -> Result<Self, RecordError> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| raw.get(*f).map(str::trim).unwrap_or("").is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(RecordError::MissingFields(missing));
        }
        let take = |f: Field| raw.get(f).unwrap_or("").trim().to_string();
        Ok(Self {
            company: take(Field::Company),
            name: take(Field::Name),
            gender: take(Field::Gender),
            dob: take(Field::Dob),
            mobile: take(Field::Mobile),
            address: take(Field::Address),
        })
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Company => &self.company,
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Dob => &self.dob,
            Field::Mobile => &self.mobile,
            Field::Address => &self.address,
        }
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label/value pairs drawn in the card body, top to bottom.
    pub fn labelled_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Name", self.name.as_str()),
            ("Gender", self.gender.as_str()),
            ("D.O.B.", self.dob.as_str()),
            ("Mobile", self.mobile.as_str()),
            ("Address", self.address.as_str()),
        ]
    }
}
