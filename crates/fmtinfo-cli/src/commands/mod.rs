pub mod dump;
pub mod generate;
