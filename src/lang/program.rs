use super::lex::lex;
use super::token::Token;
use super::Error;
use crate::mach::Address;
use std::collections::HashMap;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## A loaded program
///
/// The token stream together with its label table. Nothing changes
/// after `load`; the runtime only reads from it.

#[derive(Debug, Default)]
pub struct Program {
    tokens: Vec<Token>,
    labels: HashMap<String, Address>,
}

impl Program {
    pub fn from_source(s: &str) -> Result<Program> {
        Program::load(lex(s))
    }

    /// Resolve labels. Every `name:` token maps `name` to its own index.
    pub fn load(tokens: Vec<Token>) -> Result<Program> {
        let mut labels: HashMap<String, Address> = HashMap::new();
        for (addr, token) in tokens.iter().enumerate() {
            if let Some(name) = token.label_definition() {
                if labels.contains_key(name) {
                    return Err(error!(DuplicateLabel, addr, token.as_str(); &format!(
                        "LABEL `{}` ALREADY DEFINED AT {}",
                        name, labels[name]
                    )));
                }
                labels.insert(name.to_string(), addr);
            }
        }
        debug!(tokens = tokens.len(), labels = labels.len(), "program loaded");
        Ok(Program { tokens, labels })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, addr: Address) -> Option<&Token> {
        self.tokens.get(addr)
    }

    pub fn label(&self, name: &str) -> Option<Address> {
        self.labels.get(name).copied()
    }
}
