pub mod error;
pub mod lexer;
pub mod token;

pub mod prelude {
    pub use super::{error::*, lexer::*, token::*};
}
