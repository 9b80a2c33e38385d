//! Lexical tokenizer for source code.
//!
//! Splits text into tokens line by line:
//! - Maximal runs of word characters (letters, digits, underscore)
//! - Fixed multi-character operators (`==`, `->`, `++`, ...)
//! - Any other non-whitespace character on its own
//! - One newline token after every line
//!
//! Whitespace is dropped. Tokens borrow from the input and never span lines.

use std::iter::FusedIterator;
use std::str::Lines;

use crate::constants::NEWLINE_TOKEN;

/// Multi-character operators, longest first so the first match is the longest.
pub const OPERATORS: &[&str] = &[
    "===", "!==", "<=>", "...", "**=", "//=", ">>=", "<<=", // 3 chars
    "==", "!=", "<=", ">=", "->", "=>", "++", "--", "&&", "||", "::", "<<", ">>", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", "**", "//", "/*", "*/", ":=", "..", "?.", "??", "<-",
];

/// Returns `true` for characters that form identifiers and numbers.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns `true` if the token is made only of word characters.
#[inline]
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_word_char)
}

/// Source code tokenizer.
///
/// Stateless; the same tokenizer can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Lazily tokenize `text`.
    ///
    /// Calling this again on the same text restarts from the beginning.
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens {
            lines: text.lines(),
            current: None,
        }
    }

    /// Tokenize `text` into a vector.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokens(text).collect()
    }
}

/// Lazy token stream over a text.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    lines: Lines<'a>,
    /// Unconsumed remainder of the current line.
    current: Option<&'a str>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(rest) = self.current else {
                self.current = Some(self.lines.next()?);
                continue;
            };

            let rest = rest.trim_start();
            if rest.is_empty() {
                self.current = None;
                return Some(NEWLINE_TOKEN);
            }

            let (token, remainder) = split_first_token(rest);
            self.current = Some(remainder);
            return Some(token);
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split the leading token off a line that starts with a non-whitespace char.
fn split_first_token(line: &str) -> (&str, &str) {
    let mut chars = line.char_indices();
    let Some((_, first)) = chars.next() else {
        return (line, "");
    };

    let end = if is_word_char(first) {
        chars
            .find(|(_, c)| !is_word_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    } else {
        OPERATORS
            .iter()
            .find(|op| line.starts_with(**op))
            .map(|op| op.len())
            .unwrap_or_else(|| first.len_utf8())
    };

    line.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<&str> {
        Tokenizer::new().tokenize(text)
    }

    #[test]
    fn test_python_loop() {
        let tokens = tokenize("for x in range(10):\n    print(x)");
        assert_eq!(
            tokens,
            vec![
                "for", "x", "in", "range", "(", "10", ")", ":", "\n", "print", "(", "x", ")", "\n"
            ]
        );
    }

    #[test]
    fn test_c_function() {
        let text = "\n    int * last(int *tab, int size)\n    {\n    \treturn tab + (size - 1);\n    }\n";
        let tokens = tokenize(text);
        assert_eq!(
            tokens,
            vec![
                "\n", "int", "*", "last", "(", "int", "*", "tab", ",", "int", "size", ")", "\n",
                "{", "\n", "return", "tab", "+", "(", "size", "-", "1", ")", ";", "\n", "}",
                "\n"
            ]
        );
    }

    #[test]
    fn test_operators_are_single_tokens() {
        let tokens = tokenize("a == b -> c++ && d !== e");
        assert_eq!(
            tokens,
            vec!["a", "==", "b", "->", "c", "++", "&&", "d", "!==", "e", "\n"]
        );
    }

    #[test]
    fn test_unknown_symbols_split_per_char() {
        let tokens = tokenize("@#$");
        assert_eq!(tokens, vec!["@", "#", "$", "\n"]);
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_blank_lines_emit_newline_only() {
        assert_eq!(tokenize("\n   \n\t\n"), vec!["\n", "\n", "\n"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(tokenize("a\r\nb\r\n"), vec!["a", "\n", "b", "\n"]);
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(tokenize("café = naïve"), vec!["café", "=", "naïve", "\n"]);
    }

    #[test]
    fn test_replacement_char_is_symbol() {
        assert_eq!(tokenize("a\u{FFFD}b"), vec!["a", "\u{FFFD}", "b", "\n"]);
    }

    #[test]
    fn test_tokens_restartable() {
        let tokenizer = Tokenizer::new();
        let text = "let x = 1;";
        let first: Vec<_> = tokenizer.tokens(text).collect();
        let second: Vec<_> = tokenizer.tokens(text).collect();
        assert_eq!(first, second);

        let stream = tokenizer.tokens(text);
        let cloned = stream.clone();
        assert_eq!(stream.count(), cloned.count());
    }

    #[test]
    fn test_no_token_spans_lines() {
        for token in tokenize("a+\n+b\n==\n=") {
            assert!(token == NEWLINE_TOKEN || !token.contains('\n'));
        }
        assert_eq!(tokenize("a+\n+b"), vec!["a", "+", "\n", "+", "b", "\n"]);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("foo_bar1"));
        assert!(is_word("42"));
        assert!(!is_word(""));
        assert!(!is_word("a-b"));
        assert!(!is_word("\n"));
    }
}
