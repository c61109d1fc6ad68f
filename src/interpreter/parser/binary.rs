use crate::{
    interpreter::{
        evaluator::core::Context,
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Parser<'_, '_> {
    /// Parses bitwise or and exclusive or.
    ///
    /// The rule is: `bit_or := bit_and (("|" | "^|") bit_and)*`
    pub(super) fn parse_bit_or(&mut self) -> ParseResult<Value> {
        self.parse_left_associative(&[BinaryOperator::BitOr, BinaryOperator::BitXor],
                                    Self::parse_bit_and)
    }

    /// The rule is: `bit_and := shift ("&" shift)*`
    fn parse_bit_and(&mut self) -> ParseResult<Value> {
        self.parse_left_associative(&[BinaryOperator::BitAnd], Self::parse_shift)
    }

    /// The rule is: `shift := additive (("<<" | ">>") additive)*`
    fn parse_shift(&mut self) -> ParseResult<Value> {
        self.parse_left_associative(&[BinaryOperator::ShiftLeft, BinaryOperator::ShiftRight],
                                    Self::parse_additive)
    }

    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Value> {
        self.parse_left_associative(&[BinaryOperator::Add, BinaryOperator::Sub],
                                    Self::parse_multiplicative)
    }

    /// The rule is: `multiplicative := power (("*" | "/" | "%") power)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Value> {
        self.parse_left_associative(&[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                                    Self::parse_power)
    }

    /// Parses exponentiation, which is right associative.
    ///
    /// The rule is: `power := unary ("^" power_operand)?`
    ///
    /// The base is a full unary expression, so `-2^2` is `(-2)^2`.
    pub(super) fn parse_power(&mut self) -> ParseResult<Value> {
        let base = self.parse_unary()?;
        if self.current.kind != TokenKind::Pow {
            return Ok(base);
        }
        self.advance()?;
        let exponent = self.parse_power_operand()?;
        Context::eval_pow(&base, &exponent, self.word_size())
    }

    /// Folds a run of operators from `operators` over operands parsed by
    /// `next`, from left to right.
    fn parse_left_associative(&mut self,
                              operators: &[BinaryOperator],
                              next: fn(&mut Self) -> ParseResult<Value>)
                              -> ParseResult<Value> {
        let mut left = next(self)?;
        while let Some(op) = BinaryOperator::from_token(self.current.kind)
              && operators.contains(&op)
        {
            self.advance()?;
            let right = next(self)?;
            left = Context::eval_binary(op, &left, &right, self.word_size())?;
        }
        Ok(left)
    }
}
