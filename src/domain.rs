pub mod book;
pub mod fields;
pub mod paging;
pub mod record;
