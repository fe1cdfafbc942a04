pub mod config;
pub mod four_in_a_row;
pub mod logger;
