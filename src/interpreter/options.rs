use log::debug;

/// Text shown for `-h`, `--help`, `#h`, `##help` and the `help` keyword.
pub const HELP_TEXT: &str = "\
radixcalc: arbitrary-precision expression calculator

operators (lowest to highest precedence):
    name = expr          assignment
    |  ^|                bitwise or, bitwise xor
    &                    bitwise and
    <<  >>               shifts
    +  -                 addition, subtraction
    *  /  %              multiplication, division, remainder
    ^                    power (right associative)
    -  ~                 negation, bitwise not
    !  !!  !!!...        factorial, double factorial, multifactorial

literals:
    0b 0o 0d 0x          radix prefix, optionally followed by a type code
    s u n                signed, unsigned, complex type codes
    1.5e3  0x1.8p4  2i   fraction, exponent, imaginary suffix

statements:
    help                 show this text
    delete name          remove a variable

options (use - on the command line, # at the start of a line):
    pr<N>                output precision in digits (0 = default)
    w8 w16 w32 w64 w128  integer word size
    pn  pu               normalized / unnormalized power-of-two floats
    0<base>[<type>]      default literal radix and type
    o<base>              output radix
    m<base>[<type>]      both of the above
    h  -help             this text

builtins:
    pi e i  sqrt exp ln log10 sin cos tan asin acos atan sinh cosh tanh
    abs arg norm conj real imag
";

/// Introduces options on the command line.
pub const COMMAND_LINE_INTRODUCER: char = '-';
/// Introduces options at the start of an input line.
pub const INLINE_INTRODUCER: char = '#';

/// The numeric bases understood for literals and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// Returns the base as a number.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Returns the width in bits of one digit, or `None` for decimal.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::options::Radix;
    ///
    /// assert_eq!(Radix::Octal.bits_per_digit(), Some(3));
    /// assert_eq!(Radix::Decimal.bits_per_digit(), None);
    /// ```
    #[must_use]
    pub const fn bits_per_digit(self) -> Option<u32> {
        match self {
            Self::Binary => Some(1),
            Self::Octal => Some(3),
            Self::Hexadecimal => Some(4),
            Self::Decimal => None,
        }
    }

    /// Maps a base code (`b`, `o`, `d`, `x`, any case) to a radix.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'b' => Some(Self::Binary),
            'o' => Some(Self::Octal),
            'd' => Some(Self::Decimal),
            'x' => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    /// Returns the value of `c` as a digit of this radix.
    #[must_use]
    pub const fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.to_u32())
    }
}

/// How a literal without a fraction, exponent or imaginary suffix is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Signed,
    Unsigned,
    Complex,
}

impl NumberKind {
    /// Maps a type code (`s`, `u`, `n`, any case) to a number kind.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            's' => Some(Self::Signed),
            'u' => Some(Self::Unsigned),
            'n' => Some(Self::Complex),
            _ => None,
        }
    }
}

/// Width of integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWordSize {
    Bits8,
    Bits16,
    Bits32,
    Bits64,
    Bits128,
}

impl IntWordSize {
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
            Self::Bits128 => 128,
        }
    }
}

/// Session configuration.
///
/// Produced by the command-line arguments and mutated by option tokens at the
/// start of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Radix of literals without a radix prefix.
    pub default_number_radix: Radix,
    /// Kind of literals without a type code.
    pub default_number_kind:  NumberKind,
    /// Width of integer values.
    pub int_word_size:        IntWordSize,
    /// Radix used to render results.
    pub output_radix:         Radix,
    /// Output digits; `0` selects the default of the value's type.
    pub precision:            u32,
    /// Normalized (`1.8p+1`) rather than aligned (`3`) power-of-two floats.
    pub output_fp_normalized: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_number_radix: Radix::Decimal,
               default_number_kind:  NumberKind::Signed,
               int_word_size:        IntWordSize::Bits128,
               output_radix:         Radix::Decimal,
               precision:            0,
               output_fp_normalized: false, }
    }
}

/// How many times each option has been seen, successful or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionCounts {
    pub precision:            u32,
    pub help:                 u32,
    pub int_word_size:        u32,
    pub output_fp_normalized: u32,
    pub default_number:       u32,
    pub output_radix:         u32,
}

/// Configuration plus the bookkeeping of the option interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub config:     Config,
    pub counts:     OptionCounts,
    /// Set once any argument turned out not to be an option.
    pub other_args: bool,
}

impl Options {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config,
               ..Self::default() }
    }

    /// Interprets one argument against the option grammar.
    ///
    /// The argument must start with `introducer` (single form) or with the
    /// introducer twice (double form, only `help`). Anything else sets
    /// `other_args`.
    ///
    /// # Parameters
    /// - `arg`: The raw argument, introducer included.
    /// - `introducer`: `-` on the command line, `#` inside expressions.
    ///
    /// # Returns
    /// `true` if the argument was handled as an option. A handled option is
    /// not necessarily applied: a malformed `pr` value is counted but leaves
    /// the precision unchanged.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::options::{IntWordSize, Options, Radix};
    ///
    /// let mut options = Options::default();
    /// assert!(options.interpret_arg("-w16", '-'));
    /// assert!(options.interpret_arg("-mx", '-'));
    /// assert!(options.interpret_arg("-prx", '-'));
    /// assert!(!options.interpret_arg("1+2", '-'));
    ///
    /// assert_eq!(options.config.int_word_size, IntWordSize::Bits16);
    /// assert_eq!(options.config.output_radix, Radix::Hexadecimal);
    /// assert_eq!(options.config.precision, 0);
    /// assert_eq!(options.counts.precision, 1);
    /// assert!(options.other_args);
    /// ```
    pub fn interpret_arg(&mut self, arg: &str, introducer: char) -> bool {
        if let Some(rest) = arg.strip_prefix(introducer) {
            if self.single_flag_option(rest) {
                return true;
            }
            if let Some(rest) = rest.strip_prefix(introducer)
               && self.double_flag_option(rest)
            {
                return true;
            }
        }
        self.other_args = true;
        false
    }

    fn single_flag_option(&mut self, arg: &str) -> bool {
        if let Some(digits) = arg.strip_prefix("pr") {
            if !digits.is_empty()
               && digits.bytes().all(|b| b.is_ascii_digit())
               && let Ok(precision) = digits.parse()
            {
                self.config.precision = precision;
                debug!("precision set to {precision}");
            }
            self.counts.precision += 1;
            return true;
        }

        let word_size = match arg {
            "h" => {
                self.counts.help += 1;
                return true;
            },
            "pn" | "pu" => {
                self.config.output_fp_normalized = arg == "pn";
                self.counts.output_fp_normalized += 1;
                return true;
            },
            "w8" => Some(IntWordSize::Bits8),
            "w16" => Some(IntWordSize::Bits16),
            "w32" => Some(IntWordSize::Bits32),
            "w64" => Some(IntWordSize::Bits64),
            "w128" => Some(IntWordSize::Bits128),
            _ => None,
        };
        if let Some(word_size) = word_size {
            self.config.int_word_size = word_size;
            self.counts.int_word_size += 1;
            debug!("integer word size set to {} bits", word_size.bits());
            return true;
        }

        self.radix_option(arg)
    }

    // ( '0' | 'm' ) <base code> [ <type code> ]  updates the literal defaults
    // ( 'o' | 'm' ) <base code>                  updates the output radix
    fn radix_option(&mut self, arg: &str) -> bool {
        let mut chars = arg.chars();
        let option_code = chars.next().map(|c| c.to_ascii_lowercase());
        let Some(radix) = chars.next().and_then(Radix::from_code) else {
            return false;
        };
        let mut updated = false;

        if matches!(option_code, Some('0' | 'm')) {
            let mut lookahead = chars.clone();
            let kind = match lookahead.next().and_then(NumberKind::from_code) {
                Some(kind) => {
                    chars = lookahead;
                    kind
                },
                None => NumberKind::Signed,
            };
            if chars.as_str().is_empty() {
                self.config.default_number_radix = radix;
                self.config.default_number_kind = kind;
                self.counts.default_number += 1;
                debug!("literal defaults set to {radix:?} {kind:?}");
                updated = true;
            }
        }

        if matches!(option_code, Some('o' | 'm')) && chars.as_str().is_empty() {
            self.config.output_radix = radix;
            self.counts.output_radix += 1;
            debug!("output radix set to {radix:?}");
            updated = true;
        }

        updated
    }

    fn double_flag_option(&mut self, arg: &str) -> bool {
        if arg == "help" {
            self.counts.help += 1;
            return true;
        }
        false
    }
}
