use crate::interpreter::lexer::TokenKind;

/// Represents a binary operator.
///
/// Every binary operator is left associative except [`BinaryOperator::Pow`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^|`)
    BitXor,
}

impl BinaryOperator {
    /// Maps a token kind to the binary operator it spells, if any.
    ///
    /// # Example
    /// ```
    /// use radixcalc::{interpreter::lexer::TokenKind, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::from_token(TokenKind::BitXor), Some(BinaryOperator::BitXor));
    /// assert_eq!(BinaryOperator::from_token(TokenKind::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Mod => Some(Self::Mod),
            TokenKind::Pow => Some(Self::Pow),
            TokenKind::ShiftLeft => Some(Self::ShiftLeft),
            TokenKind::ShiftRight => Some(Self::ShiftRight),
            TokenKind::BitAnd => Some(Self::BitAnd),
            TokenKind::BitOr => Some(Self::BitOr),
            TokenKind::BitXor => Some(Self::BitXor),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^|",
        };
        write!(f, "{symbol}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Bitwise complement (e.g. `~x`).
    BitNot,
    /// Multifactorial with the given step: `x!` is 1, `x!!` is 2, `x!!!` is 3.
    Factorial(u32),
}

impl UnaryOperator {
    /// Maps a token kind to the prefix operator it spells, if any.
    #[must_use]
    pub const fn prefix_from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Sub => Some(Self::Negate),
            TokenKind::BitNot => Some(Self::BitNot),
            _ => None,
        }
    }
}
