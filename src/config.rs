use dotenv::dotenv;
use std::env;
use tracing::warn;

use crate::prelude::DEFAULT_PAGE_SIZE;

/// Environment variable (or `.env` entry) holding the default page size.
pub const PAGE_SIZE_VAR: &str = "BOOK_PAGE_SIZE";

pub fn parse_page_size() -> usize {
    dotenv().ok();

    match env::var(PAGE_SIZE_VAR) {
        Ok(raw) => page_size_from(&raw),
        Err(_) => DEFAULT_PAGE_SIZE,
    }
}

/// Falls back to the default for anything that is not a positive integer.
pub fn page_size_from(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => {
            warn!(
                value = raw,
                default = DEFAULT_PAGE_SIZE,
                "invalid {PAGE_SIZE_VAR}, using default page size"
            );
            DEFAULT_PAGE_SIZE
        }
    }
}
