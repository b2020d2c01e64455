pub mod json;

pub use json::{JsonFileEndpoint, import_quiz, parse_quiz};
