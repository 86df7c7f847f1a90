// Profile sanitization — the Zero-PII display layer.
//
// Minor authors get a truncated name, an emoji avatar keyed on their id and
// a categorical age label. Adults get their full name and photo. Email and
// birth date never reach the output for anyone.

pub mod emoji;
pub mod names;
pub mod profile;
