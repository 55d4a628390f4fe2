pub mod environment;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod utils;
