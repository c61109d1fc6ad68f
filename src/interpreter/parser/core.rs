use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, Token, TokenKind},
        options::IntWordSize,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser that evaluates while it parses.
///
/// There is no syntax tree: every grammar rule returns the value of what it
/// parsed. The parser keeps one token of lookahead in `current` and borrows
/// the session context, which it reads for the configuration and variables
/// and writes through assignments, `delete` and options.
pub struct Parser<'src, 'ctx> {
    pub(super) lexer:   Lexer<'src>,
    pub(super) current: Token<'src>,
    pub(super) context: &'ctx mut Context,
}

impl<'src, 'ctx> Parser<'src, 'ctx> {
    /// Creates a parser over one input line and scans its first token.
    ///
    /// # Errors
    /// A lexical error in the first token.
    pub fn new(input: &'src str, context: &'ctx mut Context) -> ParseResult<Self> {
        let mut lexer = Lexer::new(input, context.config().default_number_radix);
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  context })
    }

    /// Consumes the current token, scans the next one and returns the
    /// consumed token.
    pub(super) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let token = self.current;
        self.current = self.lexer.next_token()?;
        Ok(token)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// A token-expected error naming `kind` otherwise.
    pub(super) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(ParseError::expected(kind))
        }
    }

    pub(super) fn word_size(&self) -> IntWordSize {
        self.context.word_size()
    }
}
