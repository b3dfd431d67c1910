use crate::mach::Direction;
use std::rc::Rc;

/// ## A single space-separated word of source
///
/// Tokens are kept as written. What a token means is decided when the
/// runtime reaches it: a label definition, an opcode with or without a
/// direction marker, an integer literal, or a label reference.

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(Rc<str>);

impl Token {
    pub fn new(s: &str) -> Token {
        Token(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `name:` defines a label called `name`.
    pub fn label_definition(&self) -> Option<&str> {
        self.0.strip_suffix(':')
    }

    /// A leading `!` selects the left end, a trailing `!` the right end.
    /// The prefix is checked first so `!x!` is `x!` on the left.
    pub fn split_direction(&self) -> (Option<Direction>, &str) {
        if let Some(word) = self.0.strip_prefix('!') {
            (Some(Direction::Left), word)
        } else if let Some(word) = self.0.strip_suffix('!') {
            (Some(Direction::Right), word)
        } else {
            (None, &self.0)
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
