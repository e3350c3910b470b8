pub mod answers;
pub mod questions;
