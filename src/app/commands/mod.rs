pub mod generate;
pub mod remove;
