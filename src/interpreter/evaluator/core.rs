use std::collections::HashMap;

use log::debug;

use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        evaluator::function::builtin_constant,
        options::{Config, IntWordSize, Options},
        output::core::Outputter,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type EvalResult<T> = Result<T, ParseError>;

/// What an input line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The value of the line's expression.
    Value(Value),
    /// A `delete` statement removed a variable.
    Deleted,
    /// The line asked for the help text.
    Help,
    /// The line held only options.
    Configured,
    /// The line was blank.
    Empty,
}

/// Stores the state of a calculator session.
///
/// This struct holds the live configuration (changed by option tokens) and
/// the variable table (changed by assignments and `delete`). Both persist
/// from one input line to the next.
///
/// ## Usage
///
/// `Context` is created once per session and every input line goes through
/// [`Context::evaluate`]. A line either succeeds as a whole or leaves the
/// context untouched.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Configuration plus option bookkeeping.
    pub options:   Options,
    /// Variables by name. Values are stored as produced and rewrapped to the
    /// current word size when read.
    pub variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a session with the given options and no variables.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options,
               variables: HashMap::new() }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.options.config
    }

    #[must_use]
    pub const fn word_size(&self) -> IntWordSize {
        self.options.config.int_word_size
    }

    /// Evaluates one input line.
    ///
    /// The line is parsed and evaluated against a staged copy of the context.
    /// The copy replaces the context only if the whole line succeeds, so a
    /// failing line changes neither the configuration nor the variables.
    ///
    /// # Parameters
    /// - `line`: The input line.
    ///
    /// # Returns
    /// What the line produced, or the first error.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::{
    ///     evaluator::core::{Context, Evaluation},
    ///     value::core::Value,
    /// };
    ///
    /// let mut context = Context::default();
    /// assert_eq!(context.evaluate("x = 6 * 7").unwrap(), Evaluation::Value(Value::Int(42)));
    ///
    /// // The assignment happens before the failure, but is rolled back.
    /// assert!(context.evaluate("y = 1 + (2").is_err());
    /// assert!(context.variable("y").is_none());
    /// assert_eq!(context.variable("x"), Some(Value::Int(42)));
    /// ```
    pub fn evaluate(&mut self, line: &str) -> EvalResult<Evaluation> {
        let mut staged = self.clone();
        let evaluation = Parser::new(line, &mut staged)?.parse_line()?;
        *self = staged;
        debug!("committed {line:?}");
        Ok(evaluation)
    }

    /// Renders a value under the current configuration.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        Outputter::new(value, &self.options.config).to_string()
    }

    /// Returns a variable's value, rewrapped to the current word size.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables
            .get(name)
            .map(|value| value.clone().rewrap(self.word_size()))
    }

    /// Resolves a name used as a value: variables first, then the builtin
    /// constants.
    ///
    /// # Errors
    /// `ParseErrorKind::UnknownIdentifier` if the name is neither.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.variable(name)
            .or_else(|| builtin_constant(name))
            .ok_or_else(|| ParseErrorKind::UnknownIdentifier.into())
    }

    /// Creates or replaces a variable.
    pub fn assign(&mut self, name: &str, value: Value) {
        debug!("assign {name} = {value:?}");
        self.variables.insert(name.to_string(), value);
    }

    /// Removes a variable.
    ///
    /// # Errors
    /// `ParseErrorKind::UnknownIdentifier` if no such variable exists.
    pub fn delete(&mut self, name: &str) -> EvalResult<()> {
        debug!("delete {name}");
        self.variables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ParseErrorKind::UnknownIdentifier.into())
    }
}
