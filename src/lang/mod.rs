/*!
# Rust Language Module

This Rust module splits source text into tokens and resolves labels.

*/

#[macro_use]
mod error;
mod lex;
mod program;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use program::Program;
pub use token::Token;
