/// Built-in function implementations.
///
/// Elementary functions computed in the complex domain, and the
/// complex-number accessors.
pub mod builtin;

/// Builtin lookup tables and reserved names.
pub mod core;

pub use self::core::{builtin_constant, builtin_function, is_reserved_identifier};
