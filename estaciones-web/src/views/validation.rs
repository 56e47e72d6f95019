//! Form fields and the validation rules of the create and edit forms.
//!
//! The two forms are deliberately not equally strict. Creating only needs a
//! name and both coordinates; editing additionally needs a full date and
//! treats a zero coordinate as unset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Station, StationDraft};

/// One input of a station form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Day,
    Month,
    Year,
    Latitude,
    Longitude,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Day,
        Field::Month,
        Field::Year,
        Field::Latitude,
        Field::Longitude,
    ];

    /// Input name, identical to the JSON key sent to the backend.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Day => "dia",
            Field::Month => "mes",
            Field::Year => "anio",
            Field::Latitude => "latitud",
            Field::Longitude => "longitud",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Why a form refused to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field {0} is empty")]
    Missing(Field),

    #[error("field {0} is not a valid number")]
    Invalid(Field),

    #[error("field {0} must not be zero")]
    Zero(Field),
}

/// The raw text of the six form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFields {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "dia", default)]
    pub day: String,
    #[serde(rename = "mes", default)]
    pub month: String,
    #[serde(rename = "anio", default)]
    pub year: String,
    #[serde(rename = "latitud", default)]
    pub latitude: String,
    #[serde(rename = "longitud", default)]
    pub longitude: String,
}

impl DraftFields {
    /// Form text for a loaded station. Absent date parts become empty.
    pub fn from_station(station: &Station) -> Self {
        let text = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            name: station.name.clone(),
            day: text(station.day),
            month: text(station.month),
            year: text(station.year),
            latitude: station.latitude.to_string(),
            longitude: station.longitude.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Latitude => &self.latitude,
            Field::Longitude => &self.longitude,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
            Field::Latitude => &mut self.latitude,
            Field::Longitude => &mut self.longitude,
        };
        *slot = value.into();
    }
}

/// Rules for a new station.
///
/// Name and coordinates must be non-empty as typed, and coordinates must
/// not be whitespace only. Blank date parts are sent as absent. Zero
/// coordinates are accepted.
pub fn validate_create(fields: &DraftFields) -> Result<StationDraft, ValidationError> {
    for field in [Field::Name, Field::Latitude, Field::Longitude] {
        if fields.get(field).is_empty() {
            return Err(ValidationError::Missing(field));
        }
    }

    Ok(StationDraft {
        name: fields.name.clone(),
        day: optional_integer(fields, Field::Day)?,
        month: optional_integer(fields, Field::Month)?,
        year: optional_integer(fields, Field::Year)?,
        latitude: required_decimal(fields, Field::Latitude)?,
        longitude: required_decimal(fields, Field::Longitude)?,
    })
}

/// Rules for updating an existing station.
///
/// The trimmed name must be non-empty; every date part and both coordinates
/// must be non-zero, where blank counts as zero. A station at latitude or
/// longitude 0 therefore cannot be saved from the edit form.
pub fn validate_edit(fields: &DraftFields) -> Result<StationDraft, ValidationError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Missing(Field::Name));
    }

    Ok(StationDraft {
        name: name.to_string(),
        day: Some(nonzero_integer(fields, Field::Day)?),
        month: Some(nonzero_integer(fields, Field::Month)?),
        year: Some(nonzero_integer(fields, Field::Year)?),
        latitude: nonzero_decimal(fields, Field::Latitude)?,
        longitude: nonzero_decimal(fields, Field::Longitude)?,
    })
}

fn optional_integer(fields: &DraftFields, field: Field) -> Result<Option<u32>, ValidationError> {
    let text = fields.get(field).trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| ValidationError::Invalid(field))
}

fn nonzero_integer(fields: &DraftFields, field: Field) -> Result<u32, ValidationError> {
    match optional_integer(fields, field)? {
        None | Some(0) => Err(ValidationError::Zero(field)),
        Some(n) => Ok(n),
    }
}

fn optional_decimal(fields: &DraftFields, field: Field) -> Result<Option<f64>, ValidationError> {
    let text = fields.get(field).trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ValidationError::Invalid(field)),
    }
}

fn required_decimal(fields: &DraftFields, field: Field) -> Result<f64, ValidationError> {
    optional_decimal(fields, field)?.ok_or(ValidationError::Missing(field))
}

fn nonzero_decimal(fields: &DraftFields, field: Field) -> Result<f64, ValidationError> {
    match optional_decimal(fields, field)? {
        None => Err(ValidationError::Zero(field)),
        Some(v) if v == 0.0 => Err(ValidationError::Zero(field)),
        Some(v) => Ok(v),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any draft the edit rules accept is also accepted on create
        #[test]
        fn edit_is_stricter_than_create(
            name in "[A-Za-z ]{0,8}",
            day in "[0-9]{0,2}",
            lat in "-?[0-9]{0,3}(\\.[0-9]{0,6})?",
            lon in "-?[0-9]{0,3}(\\.[0-9]{0,6})?",
        ) {
            let fields = DraftFields {
                name,
                day: day.clone(),
                month: day.clone(),
                year: day,
                latitude: lat,
                longitude: lon,
            };
            if validate_edit(&fields).is_ok() {
                prop_assert!(validate_create(&fields).is_ok());
            }
        }

        /// Accepted edits never carry a zero coordinate
        #[test]
        fn edit_never_sends_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let fields = DraftFields {
                name: "X".into(),
                day: "1".into(),
                month: "1".into(),
                year: "2024".into(),
                latitude: lat.to_string(),
                longitude: lon.to_string(),
            };
            if let Ok(draft) = validate_edit(&fields) {
                prop_assert!(draft.latitude != 0.0);
                prop_assert!(draft.longitude != 0.0);
            }
        }
    }
}
