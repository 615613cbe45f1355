use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::prelude::{AppError, Field};

/// Textual form a birthday is parsed from and rendered back into.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

pub enum ValidationReq {}

impl ValidationReq {
    pub fn phone_req() -> String {
        "Not correct: phone number must contain exactly 10 digits and nothing else".to_string()
    }

    pub fn birthday_req() -> String {
        "Birthday must be a valid calendar date in YYYY-MM-DD format".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number that is known to be exactly ten decimal digits.
///
/// The only way to obtain a `Phone` is through [`Phone::new`] (or deserialization,
/// which goes through the same check), so an invalid number can never be stored.
/// Only ASCII `0-9` count as digits; other Unicode decimal digits are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, AppError> {
        if !Self::is_valid(value)? {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> Result<bool, AppError> {
        // Ten ASCII digits, no country code, no separators
        let re = Regex::new(r"^[0-9]{10}$")?;
        Ok(re.is_match(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(text: &str) -> Result<Self, AppError> {
        // chrono tolerates padding, signs and short years, so pin the shape first
        let re = Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$")?;
        if !re.is_match(text) {
            return Err(AppError::Validation(ValidationReq::birthday_req()));
        }

        let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The first anniversary of this birthday falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary_in(self.0, today.year());

        if this_year < today {
            anniversary_in(self.0, today.year() + 1)
        } else {
            this_year
        }
    }

    /// Whole calendar days from `today` to the next occurrence, never negative.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

// Feb 29 has no counterpart in common years, celebrate on Feb 28 instead
fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

impl FromStr for Birthday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Birthday::parse(s)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}
