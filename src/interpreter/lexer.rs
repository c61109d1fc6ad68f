use logos::Logos;

use crate::interpreter::{literal, options::Radix};

/// The kinds of token produced by the [`Lexer`].
///
/// Kinds carry no payload; the scanned text lives in [`Token::text`]. `End` is
/// never matched by a pattern, the lexer synthesizes it once the input is
/// exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// End of input.
    End,
    /// Numeric literals such as `42`, `.5`, `0x1.8p3`, `1e-3` or `2i`.
    ///
    /// Only the first character is matched by the pattern; the rest of the
    /// literal depends on the default radix and is scanned by a callback.
    #[regex(r"[0-9]", scan_number)]
    #[regex(r"\.[0-9]", scan_number)]
    Number,
    /// Variable, constant or function names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `^`
    #[token("^")]
    Pow,
    /// `!`
    #[token("!")]
    Factorial,
    /// `!!`
    #[token("!!")]
    DoubleFactorial,
    /// `!!!`, `!!!!`, ... with a step equal to the number of `!`.
    #[regex(r"!!!+")]
    MultiFactorial,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&`
    #[token("&")]
    BitAnd,
    /// `|`
    #[token("|")]
    BitOr,
    /// `^|`
    #[token("^|")]
    BitXor,
    /// `~`
    #[token("~")]
    BitNot,
    /// `=`
    #[token("=")]
    Assign,
    /// `help`
    #[token("help")]
    Help,
    /// `delete`
    #[token("delete")]
    Delete,
    /// An embedded option such as `#w8` or `##help`, up to the next blank.
    #[regex(r"#[^ \t\r\n\f]*")]
    Option,
}

impl TokenKind {
    /// Returns the text used for this kind in error messages.
    ///
    /// Operators and punctuation are quoted, everything else is a bare word.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Mul.display_text(), "\"*\"");
    /// assert_eq!(TokenKind::Number.display_text(), "number");
    /// ```
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Add => "\"+\"",
            Self::Sub => "\"-\"",
            Self::Mul => "\"*\"",
            Self::Div => "\"/\"",
            Self::Mod => "\"%\"",
            Self::Pow => "\"^\"",
            Self::Factorial => "\"!\"",
            Self::DoubleFactorial => "\"!!\"",
            Self::MultiFactorial => "multifactorial",
            Self::LParen => "\"(\"",
            Self::RParen => "\")\"",
            Self::ShiftLeft => "\"<<\"",
            Self::ShiftRight => "\">>\"",
            Self::BitAnd => "\"&\"",
            Self::BitOr => "\"|\"",
            Self::BitXor => "\"^|\"",
            Self::BitNot => "\"~\"",
            Self::Assign => "\"=\"",
            Self::Help => "help",
            Self::Delete => "delete",
            Self::Option => "option",
        }
    }
}

/// Lexical errors reported by the logos lexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    InvalidCharacter,
    /// A numeric literal without digits in its radix.
    MalformedNumber,
}

/// State shared with the logos callbacks.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// Radix of literals that carry no radix prefix.
    pub default_radix: Radix,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { default_radix: Radix::Decimal }
    }
}

/// Extends a number token over the rest of the literal.
fn scan_number(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    let start = lex.span().start;
    let length = literal::scan(&lex.source()[start..], lex.extras.default_radix)?;
    lex.bump(length - lex.slice().len());
    Ok(())
}

/// A scanned token: its kind, its text and where the text starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind:   TokenKind,
    /// The scanned text, a view into the input line.
    pub text:   &'src str,
    /// Byte offset of `text` from the start of the input line.
    pub offset: usize,
}

/// Hands out the tokens of one input line, one per call.
///
/// The lexer borrows the line; tokens are views into it and cannot outlive
/// it. Once the input is exhausted every call returns an `End` token.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{
///     lexer::{Lexer, TokenKind},
///     options::Radix,
/// };
///
/// let mut lexer = Lexer::new("ff + 0ff", Radix::Hexadecimal);
/// let kinds = [TokenKind::Identifier, TokenKind::Add, TokenKind::Number, TokenKind::End];
/// for kind in kinds {
///     assert_eq!(lexer.next_token().unwrap().kind, kind);
/// }
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::End);
/// ```
#[derive(Clone)]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(input: &'src str, default_radix: Radix) -> Self {
        Self { inner: TokenKind::lexer_with_extras(input, LexerExtras { default_radix }) }
    }

    /// Changes the radix used for literals scanned from now on.
    pub fn set_default_radix(&mut self, radix: Radix) {
        self.inner.extras.default_radix = radix;
    }

    /// Scans the next token.
    ///
    /// # Errors
    /// Returns a [`LexError`] for characters that start no token and for
    /// literals without digits.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        match self.inner.next() {
            Some(Ok(kind)) => Ok(Token { kind,
                                         text: self.inner.slice(),
                                         offset: self.inner.span().start }),
            Some(Err(error)) => Err(error),
            None => {
                let end = self.inner.source().len();
                Ok(Token { kind:   TokenKind::End,
                           text:   "",
                           offset: end, })
            },
        }
    }

    /// Returns what the next call to [`Lexer::next_token`] would return,
    /// without consuming it.
    ///
    /// # Errors
    /// Same as [`Lexer::next_token`].
    pub fn peek_token(&self) -> Result<Token<'src>, LexError> {
        self.clone().next_token()
    }
}
