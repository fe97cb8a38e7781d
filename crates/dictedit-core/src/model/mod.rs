pub mod entry;
pub mod field;

pub use entry::DictionaryValue;
pub use field::EntryField;
