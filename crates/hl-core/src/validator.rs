//! Line-by-line validation of HL sources.

use log::debug;

use crate::error::ValidationError;
use crate::grammar::{is_string_literal, NumberLiteral, Statement};
use crate::references::ReferenceChecker;
use crate::source::{SourceFile, SourceLine};
use crate::symbols::{SymbolTable, TypeName};

/// Validates one source unit. State is consumed by [`Validator::validate`],
/// so every run starts from an empty symbol table.
#[derive(Debug, Default)]
pub struct Validator {
    symbols: SymbolTable,
    references: ReferenceChecker,
    cursor: usize,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            references: ReferenceChecker::new(),
            cursor: 0,
        }
    }

    /// Validate every line of `source`, stopping at the first error.
    ///
    /// Returns the symbol table built along the way.
    pub fn validate(mut self, source: &SourceFile) -> Result<SymbolTable, ValidationError> {
        while self.cursor < source.len() {
            match self.step(source) {
                Ok(consumed) => self.cursor += consumed,
                Err(e) => {
                    debug!(
                        "{}: validation stopped at line {}: {}",
                        source.name(),
                        e.span().start.line,
                        e
                    );
                    return Err(e);
                }
            }
        }
        debug!(
            "{}: {} lines valid, {} variables declared",
            source.name(),
            source.len(),
            self.symbols.len()
        );
        Ok(self.symbols)
    }

    /// Validate the construct at the cursor and return how many lines it
    /// consumed.
    fn step(&mut self, source: &SourceFile) -> Result<usize, ValidationError> {
        let line = &source.lines()[self.cursor];
        let Some(statement) = Statement::parse(&line.text) else {
            return Err(ValidationError::UnrecognizedStatement {
                text: line.text.clone(),
                span: line.span(),
            });
        };
        debug!("line {}: {}", line.raw_index + 1, statement.shape());

        match statement {
            Statement::Declaration { name, ty } => {
                self.symbols
                    .declare(name, ty)
                    .map_err(|_| ValidationError::Redeclaration {
                        name: name.to_string(),
                        span: line.span(),
                    })?;
                Ok(1)
            }
            Statement::Assignment { name, literal } => {
                let declared = self.declared_type(name, line)?;
                if !literal_fits(declared, literal) {
                    return Err(ValidationError::TypeMismatch {
                        name: name.to_string(),
                        declared,
                        literal: literal.text.to_string(),
                        span: line.span(),
                    });
                }
                Ok(1)
            }
            Statement::Output { content } => {
                self.check_output(content, line)?;
                Ok(1)
            }
            Statement::Conditional { condition } => {
                self.check_references(condition, line)?;
                let body = source
                    .line(self.cursor + 1)
                    .ok_or_else(|| ValidationError::MissingBody { span: line.span() })?;
                let indented = source
                    .raw_line_after(self.cursor)
                    .is_some_and(|raw| raw.starts_with(|c: char| c == ' ' || c == '\t'));
                if !indented {
                    return Err(ValidationError::MissingIndentation { span: body.span() });
                }
                self.check_body(body)?;
                Ok(2)
            }
        }
    }

    /// A conditional body: an assignment to a declared variable or an
    /// output statement. Literal types are not checked here.
    fn check_body(&self, body: &SourceLine) -> Result<(), ValidationError> {
        match Statement::parse_body(&body.text) {
            Some(Statement::Assignment { name, .. }) => {
                self.declared_type(name, body)?;
                Ok(())
            }
            Some(Statement::Output { content }) => self.check_output(content, body),
            _ => Err(ValidationError::UnrecognizedStatement {
                text: body.text.clone(),
                span: body.span(),
            }),
        }
    }

    fn check_output(&self, content: &str, line: &SourceLine) -> Result<(), ValidationError> {
        if is_string_literal(content) {
            return Ok(());
        }
        self.check_references(content, line)
    }

    fn check_references(&self, text: &str, line: &SourceLine) -> Result<(), ValidationError> {
        match self.references.first_undeclared(text, &self.symbols) {
            Some(name) => Err(ValidationError::UndeclaredVariable {
                name: name.to_string(),
                span: line.span(),
            }),
            None => Ok(()),
        }
    }

    fn declared_type(&self, name: &str, line: &SourceLine) -> Result<TypeName, ValidationError> {
        self.symbols
            .get(name)
            .ok_or_else(|| ValidationError::UndeclaredVariable {
                name: name.to_string(),
                span: line.span(),
            })
    }
}

/// Literal compatibility. `integer` rejects any fractional literal. `double`
/// accepts fractional literals as-is and integer literals only when their
/// digits, sign aside, are plain digits.
fn literal_fits(declared: TypeName, literal: NumberLiteral<'_>) -> bool {
    match declared {
        TypeName::Integer => literal.is_integer(),
        TypeName::Double => !literal.is_integer() || literal.whole_part_is_digits(),
    }
}

/// Validate `source` with a fresh [`Validator`].
pub fn validate(source: &SourceFile) -> Result<SymbolTable, ValidationError> {
    Validator::new().validate(source)
}
