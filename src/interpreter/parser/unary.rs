use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        evaluator::{core::Context, function::builtin_function},
        lexer::TokenKind,
        literal,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    operator::UnaryOperator,
};

impl Parser<'_, '_> {
    /// Parses prefix operators.
    ///
    /// The rule is: `unary := ("-" | "~") unary | postfix`
    ///
    /// Postfix operators bind tighter, so `-4!` is `-(4!)`.
    pub(super) fn parse_unary(&mut self) -> ParseResult<Value> {
        if let Some(op) = UnaryOperator::prefix_from_token(self.current.kind) {
            self.advance()?;
            let operand = self.parse_unary()?;
            return Context::eval_unary(op, &operand, self.word_size());
        }
        let primary = self.parse_primary()?;
        self.parse_postfix(primary)
    }

    /// Parses the right operand of `^`.
    ///
    /// The rule is: `power_operand := ("-" | "~") power_operand | power`
    ///
    /// A prefix operator here applies to the whole remaining power, so
    /// `2^-1^2` is `2^(-(1^2))`.
    pub(super) fn parse_power_operand(&mut self) -> ParseResult<Value> {
        if let Some(op) = UnaryOperator::prefix_from_token(self.current.kind) {
            self.advance()?;
            let operand = self.parse_power_operand()?;
            return Context::eval_unary(op, &operand, self.word_size());
        }
        self.parse_power()
    }

    /// Applies any number of factorial operators to `value`.
    ///
    /// The rule is: `postfix := primary ("!" | "!!" | "!!!"+)*`
    fn parse_postfix(&mut self, mut value: Value) -> ParseResult<Value> {
        loop {
            let step = match self.current.kind {
                TokenKind::Factorial => 1,
                TokenKind::DoubleFactorial => 2,
                TokenKind::MultiFactorial => {
                    u32::try_from(self.current.text.len()).map_err(|_| {
                                                              ParseErrorKind::InvalidFactorialOperand
                                                          })?
                },
                _ => return Ok(value),
            };
            self.advance()?;
            value = Context::eval_unary(UnaryOperator::Factorial(step), &value, self.word_size())?;
        }
    }

    /// Parses a primary expression.
    ///
    /// The rule is:
    /// ```text
    ///     primary := number
    ///              | identifier "(" expression ")"
    ///              | identifier
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UnknownIdentifier` for a name that is neither a variable nor a
    ///   builtin.
    /// - A token-expected error naming `number` at the end of the input.
    /// - `UnexpectedToken` for any other token.
    fn parse_primary(&mut self) -> ParseResult<Value> {
        match self.current.kind {
            TokenKind::Number => {
                let text = self.advance()?.text;
                let config = self.context.config();
                let value = literal::split(text, config.default_number_radix)?.to_value(config)?;
                Ok(value)
            },
            TokenKind::Identifier => {
                let name = self.advance()?.text;
                if builtin_function(name).is_some() {
                    self.expect(TokenKind::LParen)?;
                    let argument = self.parse_expression()?;
                    self.expect(TokenKind::RParen)?;
                    return Context::eval_function(name, &argument);
                }
                self.context.lookup(name)
            },
            TokenKind::LParen => {
                self.advance()?;
                let value = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(value)
            },
            TokenKind::End => Err(ParseError::expected(TokenKind::Number)),
            _ => Err(ParseErrorKind::UnexpectedToken.into()),
        }
    }
}
