pub mod notes;
pub mod say;
