use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::{AppError, Birthday, Name, Phone};

/// One address book entry: a name, any number of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// An empty `birthday` string is treated the same as `None`.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, AppError> {
        let birthday = match birthday {
            Some(text) if !text.is_empty() => Some(Birthday::parse(text)?),
            _ => None,
        };

        Ok(Record {
            name: Name::new(name),
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a validated phone. The same number may be added more than once.
    pub fn add_phone(&mut self, phone: &str) -> Result<&Phone, AppError> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "phone added");

        self.phones.push(phone);
        let index = self.phones.len() - 1;
        Ok(&self.phones[index])
    }

    /// Replaces any birthday already set.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<&Birthday, AppError> {
        let birthday = Birthday::parse(birthday)?;
        debug!(name = %self.name, birthday = %birthday, "birthday set");

        Ok(self.birthday.insert(birthday))
    }

    /// Removes the first phone equal to `phone`; later duplicates stay.
    pub fn remove_phone(&mut self, phone: &str) -> Result<String, AppError> {
        match self.phone_index(phone) {
            Some(index) => {
                self.phones.remove(index);
                debug!(name = %self.name, phone, "phone removed");
                Ok(format!("Phone {} has been deleted", phone))
            }
            None => Err(AppError::NotFound(format!("Phone {}", phone))),
        }
    }

    /// Swaps the first phone equal to `old_phone` for `new_phone`, keeping its position.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<String, AppError> {
        let Some(index) = self.phone_index(old_phone) else {
            return Err(AppError::NotFound(format!("Phone {}", old_phone)));
        };

        self.phones[index] = Phone::new(new_phone)?;
        debug!(name = %self.name, old_phone, new_phone, "phone edited");

        Ok(format!("Phone number has been updated for {}", self.name))
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Days until the next birthday counted from the local calendar date,
    /// or `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }

    fn phone_index(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<&str>>()
            .join(", ");

        match &self.birthday {
            Some(birthday) => write!(f, "{} - {}, birthday - {}", self.name, phones, birthday),
            None => write!(f, "{} - {}, birthday - not set", self.name, phones),
        }
    }
}
