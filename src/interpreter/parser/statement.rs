use log::debug;

use crate::{
    error::ParseErrorKind,
    interpreter::{
        evaluator::{core::Evaluation, function::is_reserved_identifier},
        lexer::TokenKind,
        options::INLINE_INTRODUCER,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
};

impl Parser<'_, '_> {
    /// Parses and evaluates a whole input line.
    ///
    /// Grammar:
    /// ```text
    ///     line := option* ( "help" | "delete" identifier | expression )? end
    /// ```
    ///
    /// Options are applied as they are read, so they affect the rest of the
    /// line. `help` and `delete` must make up the whole statement.
    ///
    /// # Returns
    /// What the line produced.
    ///
    /// # Errors
    /// - `InvalidOption` for an option token the option grammar rejects.
    /// - `ReservedIdentifier` when assigning to `help` or `delete`.
    /// - `UnknownIdentifier` when deleting a name that is not a variable.
    /// - A token-expected error naming `end` when tokens are left over.
    /// - Propagates any errors from expression parsing.
    pub fn parse_line(&mut self) -> ParseResult<Evaluation> {
        let help_requests = self.context.options.counts.help;
        let mut configured = false;
        while self.current.kind == TokenKind::Option {
            self.apply_option()?;
            configured = true;
        }

        if matches!(self.current.kind, TokenKind::Help | TokenKind::Delete)
           && self.lexer.peek_token()?.kind == TokenKind::Assign
        {
            return Err(ParseErrorKind::ReservedIdentifier.into());
        }

        let evaluation = match self.current.kind {
            TokenKind::End if self.context.options.counts.help > help_requests => Evaluation::Help,
            TokenKind::End if configured => Evaluation::Configured,
            TokenKind::End => Evaluation::Empty,
            TokenKind::Help => {
                self.advance()?;
                Evaluation::Help
            },
            TokenKind::Delete => {
                self.advance()?;
                let name = self.expect(TokenKind::Identifier)?.text;
                self.context.delete(name)?;
                Evaluation::Deleted
            },
            _ => Evaluation::Value(self.parse_expression()?),
        };

        self.expect(TokenKind::End)?;
        Ok(evaluation)
    }

    /// Applies the option in the current token to the session configuration.
    ///
    /// The lexer switches to the new literal radix before the next token is
    /// scanned.
    fn apply_option(&mut self) -> ParseResult<()> {
        let text = self.current.text;
        if !self.context.options.interpret_arg(text, INLINE_INTRODUCER) {
            return Err(ParseErrorKind::InvalidOption.into());
        }
        debug!("applied option {text}");
        self.lexer
            .set_default_radix(self.context.config().default_number_radix);
        self.advance()?;
        Ok(())
    }

    /// Parses an expression, which may be an assignment.
    ///
    /// Grammar:
    /// ```text
    ///     expression := identifier "=" expression | bit_or
    /// ```
    ///
    /// Assignment is right associative and yields the assigned value.
    ///
    /// # Errors
    /// `ReservedIdentifier` when assigning to a builtin name.
    pub fn parse_expression(&mut self) -> ParseResult<Value> {
        if self.current.kind == TokenKind::Identifier
           && self.lexer.peek_token()?.kind == TokenKind::Assign
        {
            let name = self.advance()?.text;
            if is_reserved_identifier(name) {
                return Err(ParseErrorKind::ReservedIdentifier.into());
            }
            self.advance()?;
            let value = self.parse_expression()?;
            self.context.assign(name, value.clone());
            return Ok(value);
        }
        self.parse_bit_or()
    }
}
