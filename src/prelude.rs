pub use crate::config::{self, parse_page_size};
pub use crate::domain::{
    book::AddressBook,
    fields::{self, BIRTHDAY_FORMAT, Birthday, Name, Phone, ValidationReq},
    paging::{DEFAULT_PAGE_SIZE, PageCursor, Pages},
    record::Record,
};
pub use crate::errors::AppError;
pub use crate::traits::Field;
pub use chrono::NaiveDate;
