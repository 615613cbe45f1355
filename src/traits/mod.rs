use std::fmt::Display;

/// A typed attribute of a record that knows how to display itself.
pub trait Field: Display {
    type Value;

    fn value(&self) -> &Self::Value;
}
