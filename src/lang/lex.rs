use super::token::Token;

/// Split source into the token stream.
///
/// Only the space character separates tokens; tabs stay inside a token.
/// A line whose first non-blank character is `#` is a comment and is
/// dropped whole.
pub fn lex(s: &str) -> Vec<Token> {
    s.lines()
        .filter(|line| !is_comment(line))
        .flat_map(|line| line.split(' '))
        .filter(|word| !word.is_empty())
        .map(Token::new)
        .collect()
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
