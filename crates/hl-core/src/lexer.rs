//! Lexer for HL reserved words and symbols.
//!
//! Uses the `logos` crate. Symbols are matched leftmost-longest, so `:=` is
//! never reported as `:` followed by `=`.

use std::collections::BTreeSet;

use logos::Logos;

/// Reserved words, case-sensitive.
pub const RESERVED_WORDS: [&str; 4] = ["integer", "double", "output", "If"];

/// Symbols in matching priority order.
pub const SYMBOLS: [&str; 14] = [
    "<<", ":=", "==", "!=", ">", "<", ":", ";", "+", "-", "=", "(", ")", "\"",
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Token kinds for HL.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Keywords
    #[token("integer")]
    Integer,

    #[token("double")]
    Double,

    #[token("output")]
    Output,

    #[token("If")]
    If,

    // Symbols
    #[token("<<")]
    Shl,

    #[token(":=")]
    Assign,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token(">")]
    Gt,

    #[token("<")]
    Lt,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("=")]
    Equals,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("\"")]
    Quote,

    // Any other run of word characters: identifiers, numbers, and words that
    // merely contain a reserved word. Unicode-aware, like the identifier
    // grammar, so `Ifé` stays one word.
    #[regex(r"\w+")]
    Word,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Double | TokenKind::Output | TokenKind::If
        )
    }

    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            TokenKind::Shl
                | TokenKind::Assign
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Gt
                | TokenKind::Lt
                | TokenKind::Colon
                | TokenKind::Semicolon
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Equals
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Quote
        )
    }
}

/// A token with its kind and text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Lexer for HL text.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Get the next token, skipping characters HL has no token for.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            match self.inner.next()? {
                Ok(kind) => {
                    return Some(Token {
                        kind,
                        text: self.inner.slice(),
                    })
                }
                Err(_) => continue,
            }
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// Distinct reserved words and symbols occurring in `source`, sorted.
pub fn reserved_and_symbols(source: &str) -> BTreeSet<String> {
    Lexer::new(source)
        .tokenize()
        .into_iter()
        .filter(|token| token.kind.is_reserved() || token.kind.is_symbol())
        .map(|token| token.text.to_string())
        .collect()
}
