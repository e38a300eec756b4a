//! Statement shapes of the HL grammar.
//!
//! Each HL statement occupies one line. The matchers below recognise the
//! four shapes and capture their fields; they do not consult the symbol
//! table. Whitespace is allowed between any two parts of a statement.

use crate::symbols::TypeName;

/// A numeric literal: optional `-`, digits, and at most two fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLiteral<'a> {
    pub text: &'a str,
}

impl<'a> NumberLiteral<'a> {
    /// Literals without a decimal point are integer literals.
    pub fn is_integer(&self) -> bool {
        !self.text.contains('.')
    }

    /// Whether the part before the decimal point, sign removed, is made of
    /// digits only.
    pub fn whole_part_is_digits(&self) -> bool {
        let unsigned = self.text.strip_prefix('-').unwrap_or(self.text);
        let whole = unsigned.split('.').next().unwrap_or_default();
        !whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit())
    }
}

/// A recognised statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `name : integer ;`
    Declaration { name: &'a str, ty: TypeName },
    /// `name := -1.25 ;`
    Assignment {
        name: &'a str,
        literal: NumberLiteral<'a>,
    },
    /// `output << content ;` with `content` trimmed
    Output { content: &'a str },
    /// `If ( condition )`
    Conditional { condition: &'a str },
}

impl<'a> Statement<'a> {
    /// Match `line` against the statement shapes in priority order:
    /// declaration, assignment, output, conditional.
    pub fn parse(line: &'a str) -> Option<Self> {
        match_declaration(line)
            .or_else(|| match_assignment(line))
            .or_else(|| match_output(line))
            .or_else(|| match_conditional(line))
    }

    /// Match a conditional body, which may only be an assignment or an
    /// output statement.
    pub fn parse_body(line: &'a str) -> Option<Self> {
        match_assignment(line).or_else(|| match_output(line))
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Statement::Declaration { .. } => "declaration",
            Statement::Assignment { .. } => "assignment",
            Statement::Output { .. } => "output",
            Statement::Conditional { .. } => "conditional",
        }
    }
}

/// Whether `content` starts and ends with a double quote. A lone `"`
/// qualifies.
pub fn is_string_literal(content: &str) -> bool {
    content.starts_with('"') && content.ends_with('"')
}

pub fn match_declaration(line: &str) -> Option<Statement<'_>> {
    let mut s = Scanner::new(line);
    s.skip_whitespace();
    let name = s.identifier()?;
    s.skip_whitespace();
    s.expect(":")?;
    s.skip_whitespace();
    let ty = TypeName::from_keyword(s.word())?;
    s.skip_whitespace();
    s.expect(";")?;
    s.finish()?;
    Some(Statement::Declaration { name, ty })
}

pub fn match_assignment(line: &str) -> Option<Statement<'_>> {
    let mut s = Scanner::new(line);
    s.skip_whitespace();
    let name = s.identifier()?;
    s.skip_whitespace();
    s.expect(":=")?;
    s.skip_whitespace();
    let literal = s.number()?;
    s.skip_whitespace();
    s.expect(";")?;
    s.finish()?;
    Some(Statement::Assignment { name, literal })
}

pub fn match_output(line: &str) -> Option<Statement<'_>> {
    let mut s = Scanner::new(line);
    s.skip_whitespace();
    s.expect("output")?;
    s.skip_whitespace();
    s.expect("<<")?;
    let content = s.rest().trim_end().strip_suffix(';')?;
    Some(Statement::Output {
        content: content.trim(),
    })
}

pub fn match_conditional(line: &str) -> Option<Statement<'_>> {
    let mut s = Scanner::new(line);
    s.skip_whitespace();
    s.expect("If")?;
    s.skip_whitespace();
    s.expect("(")?;
    let condition = s.rest().trim_end().strip_suffix(')')?;
    Some(Statement::Conditional { condition })
}

/// Cursor over a single line.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn expect(&mut self, literal: &str) -> Option<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Some(())
        } else {
            None
        }
    }

    /// Take characters while `pred` holds.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// A run of word characters (letters, digits, underscore).
    fn word(&mut self) -> &'a str {
        self.take_while(is_word_char)
    }

    /// An ASCII letter followed by word characters.
    fn identifier(&mut self) -> Option<&'a str> {
        if !self.rest().starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(self.word())
    }

    fn number(&mut self) -> Option<NumberLiteral<'a>> {
        let start = self.pos;
        let _ = self.expect("-");
        if self.take_while(|c| c.is_ascii_digit()).is_empty() {
            return None;
        }
        if self.expect(".").is_some() {
            let fraction = self.take_while(|c| c.is_ascii_digit());
            if fraction.is_empty() || fraction.len() > 2 {
                return None;
            }
        }
        Some(NumberLiteral {
            text: &self.text[start..self.pos],
        })
    }

    /// Succeeds when only whitespace remains.
    fn finish(&mut self) -> Option<()> {
        self.skip_whitespace();
        self.rest().is_empty().then_some(())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
