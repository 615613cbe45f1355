pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod traits;
