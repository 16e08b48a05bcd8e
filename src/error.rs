use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most callers never see these errors: the `parse_*` factories in [`crate::naming`] recover from
/// every parse failure by returning the Unknown value of the requested entity kind. The errors
/// surface through the `try_*` variants of those factories, through strict-mode repair and
/// through the few operations that cannot produce a meaningful name at all.
///
/// # Error Categories
///
/// ## Grammar Errors
/// - [`Error::Malformed`] - The identifier does not match any known shape
/// - [`Error::RecursionLimit`] - The identifier nests deeper than the parser allows
///
/// ## Legacy Format Errors
/// - [`Error::LegacyFormat`] - A repair pass recognized an obsolete shape it cannot repair
///
/// ## Derivation Errors
/// - [`Error::InvalidRank`] - An array was requested with rank 0
/// - [`Error::NotSupported`] - The operation is not defined for this name
///
/// # Examples
///
/// ```rust
/// use dotnames::{naming::try_parse_method, Error};
///
/// match try_parse_method("[p:int] [T, P].M(") {
///     Ok(method) => println!("parsed {}", method),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed identifier: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The identifier could not be matched against the grammar.
    ///
    /// The error includes the source location where the mismatch was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Recursion limit reached.
    ///
    /// Identifiers are fully recursive (arrays of delegates of generics of arrays, ...).
    /// The parser refuses to descend further than the contained depth so that adversarial
    /// input cannot exhaust the stack.
    #[error("Reached the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// A legacy identifier could not be repaired.
    ///
    /// Only raised in strict repair mode. The lenient default logs the identifier and
    /// leaves it untouched instead.
    ///
    /// # Fields
    ///
    /// * `pass` - Name of the repair pass that gave up
    /// * `identifier` - The offending identifier
    #[error("Legacy identifier cannot be repaired by '{pass}': {identifier}")]
    LegacyFormat {
        /// The repair pass that detected the problem
        pass: &'static str,
        /// The identifier as seen by that pass
        identifier: String,
    },

    /// Array types need a rank of at least one.
    #[error("Invalid array rank - {0}")]
    InvalidRank(u32),

    /// The requested operation is not defined for this name.
    #[error("Operation not supported - {0}")]
    NotSupported(String),
}
