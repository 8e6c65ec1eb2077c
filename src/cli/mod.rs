pub mod commands;
pub mod parser;
pub mod session_parser;
