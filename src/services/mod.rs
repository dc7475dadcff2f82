pub mod catalog;
pub mod categorizer;
pub mod submission;
pub mod verifier;
