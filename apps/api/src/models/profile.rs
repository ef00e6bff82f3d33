use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An athlete profile as supplied by the data layer.
///
/// Every field is optional. Values of the wrong JSON shape are dropped to
/// `None` during deserialization so a partially malformed document still
/// scores instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub primary_sport: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_picture: Option<String>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub date_of_birth: Option<DateValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub languages: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<Measurement>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<Measurement>,
    #[serde(default, deserialize_with = "lenient")]
    pub preferred_foot: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub years_of_experience: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_club: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub previous_clubs: Option<Vec<ClubStint>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub achievements: Option<Vec<Achievement>>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub photos: Option<Vec<MediaItem>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub videos: Option<Vec<MediaItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
}

/// A numeric reading with its unit, e.g. `{ "value": 182, "unit": "cm" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<String>,
}

/// A date as entered. Strings in a recognised format are parsed; anything
/// else is kept verbatim so an unusual format still counts as filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Parsed(NaiveDate),
    Raw(String),
}

impl DateValue {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Parsed(date) => Some(*date),
            DateValue::Raw(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DateValue::Raw(raw) if raw.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubStint {
    pub name: String,
    #[serde(default)]
    pub from_year: Option<i32>,
    #[serde(default)]
    pub to_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Keeps well-formed elements of an array and drops the rest.
/// Anything other than an array is treated as absent.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Accepts a JSON number or a string holding one, as form inputs send them.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Parses common date and timestamp shapes. Any other string or number is
/// kept as [`DateValue::Raw`]; only `null` and non-scalars are absent.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => return Ok(Some(DateValue::Raw(n.to_string()))),
        _ => return Ok(None),
    };
    Ok(Some(parse_date(&raw).map_or(DateValue::Raw(raw), DateValue::Parsed)))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|fmt| {
                NaiveDateTime::parse_from_str(raw, fmt)
                    .map(|dt| dt.date())
                    .or_else(|_| DateTime::parse_from_str(raw, fmt).map(|dt| dt.date_naive()))
                    .ok()
            })
        })
}
