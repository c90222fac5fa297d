pub mod generation;
pub mod markdown;
pub mod prompt;
