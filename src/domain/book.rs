use indexmap::IndexMap;
use tracing::debug;

use crate::prelude::{AppError, PageCursor, Pages, Record, parse_page_size};

/// Records keyed by name, remembering the order names were first inserted in.
#[derive(Debug, Clone)]
pub struct AddressBook {
    data: IndexMap<String, Record>,
    page_size: usize,
}

impl AddressBook {
    /// Page size comes from `BOOK_PAGE_SIZE` (see [`parse_page_size`]).
    pub fn new() -> Self {
        AddressBook {
            data: IndexMap::new(),
            page_size: parse_page_size(),
        }
    }

    pub fn with_page_size(page_size: usize) -> Result<Self, AppError> {
        if page_size == 0 {
            return Err(AppError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }

        Ok(AddressBook {
            data: IndexMap::new(),
            page_size,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Inserts `record` under its name. A record already stored under that name is
    /// replaced wholesale and returned; the name keeps its original position.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str().to_string();
        debug!(name = %name, replacing = self.data.contains_key(&name), "record stored");

        self.data.insert(name, record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.data.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.data.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<String, AppError> {
        match self.data.shift_remove(name) {
            Some(_) => {
                debug!(name, "record deleted");
                Ok(format!("{} has been deleted from the AddressBook", name))
            }
            None => Err(AppError::NotFound(format!("{} in the AddressBook", name))),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.data.values()
    }

    /// Pages of the configured size.
    pub fn pages(&self) -> Pages<'_> {
        Pages::from_cursor(self, self.page_cursor())
    }

    pub fn pages_of(&self, page_size: usize) -> Result<Pages<'_>, AppError> {
        Pages::new(self, page_size)
    }

    /// A detached cursor that tolerates changes to the book between pages.
    pub fn page_cursor(&self) -> PageCursor {
        PageCursor::from_names(self.names(), self.page_size)
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Vec<&'a Record>;
    type IntoIter = Pages<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    fn record(name: &str, phone: &str) -> Result<Record, AppError> {
        let mut record = Record::new(name, None)?;
        record.add_phone(phone)?;
        Ok(record)
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            AddressBook::with_page_size(0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn find_returns_inserted_record() -> Result<(), AppError> {
        let mut book = AddressBook::with_page_size(10)?;
        book.add_record(record("Jane", "9876543210")?);

        let jane = book.find("Jane").expect("Jane was just added");
        assert_eq!(jane.phones()[0].as_str(), "9876543210");
        assert!(book.find("jane").is_none());
        Ok(())
    }

    #[test]
    fn add_record_overwrites_same_name_in_place() -> Result<(), AppError> {
        let mut book = AddressBook::with_page_size(10)?;
        book.add_record(record("John", "1234567890")?);
        book.add_record(record("Jane", "9876543210")?);

        let replaced = book.add_record(record("John", "5555555555")?);

        assert_eq!(
            replaced.map(|r| r.phones()[0].as_str().to_string()),
            Some("1234567890".to_string())
        );
        assert_eq!(book.len(), 2);
        assert_eq!(book.names().collect::<Vec<&str>>(), vec!["John", "Jane"]);

        let john = book.find("John").expect("John is stored");
        assert_eq!(john.to_string(), "John - 5555555555, birthday - not set");
        Ok(())
    }

    #[test]
    fn delete_reports_outcome() -> Result<(), AppError> {
        let mut book = AddressBook::with_page_size(10)?;
        book.add_record(record("Jane", "9876543210")?);

        assert_eq!(book.delete("Jane")?, "Jane has been deleted from the AddressBook");
        assert!(book.find("Jane").is_none());
        assert!(book.is_empty());

        let err = book.delete("Jane").unwrap_err();
        assert_eq!(err.to_string(), "Jane in the AddressBook not found");
        Ok(())
    }

    #[test]
    fn find_mut_edits_stored_record() -> Result<(), AppError> {
        let mut book = AddressBook::with_page_size(10)?;
        book.add_record(record("John", "1234567890")?);

        if let Some(john) = book.find_mut("John") {
            john.edit_phone("1234567890", "1112223333")?;
        }

        let john = book.find("John").expect("John is stored");
        assert!(john.find_phone("1234567890").is_none());
        assert!(john.find_phone("1112223333").is_some());
        Ok(())
    }

    #[test]
    fn records_follow_insertion_order_after_delete() -> Result<(), AppError> {
        let mut book = AddressBook::with_page_size(10)?;
        for (name, phone) in [("C", "1111111111"), ("A", "2222222222"), ("B", "3333333333")] {
            book.add_record(record(name, phone)?);
        }
        book.delete("A")?;

        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
        Ok(())
    }

    #[test]
    fn re_added_name_moves_to_the_end() -> Result<(), AppError> {
        let mut book = AddressBook::with_page_size(10)?;
        for (name, phone) in [("C", "1111111111"), ("A", "2222222222"), ("B", "3333333333")] {
            book.add_record(record(name, phone)?);
        }
        book.delete("C")?;
        book.add_record(record("C", "4444444444")?);

        assert_eq!(book.names().collect::<Vec<&str>>(), vec!["A", "B", "C"]);
        assert_eq!(book.len(), 3);
        Ok(())
    }
}
