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

/// The generic Error type, which covers every error this library can return.
///
/// Note that a member which is simply *missing* from an inspected class is never an
/// error: the matchers report it as a diagnostic string. The variants below describe
/// caller precondition violations, registry problems and reflective read failures.
///
/// # Error Categories
///
/// ## Caller Errors
/// - [`Error::Malformed`] - Malformed input, e.g. spec columns of different lengths
///
/// ## Type System Errors
/// - [`Error::TypeInsert`] - A class with the same canonical name is already registered
/// - [`Error::TypeNotFound`] - Requested class is not known
///
/// ## Reflective Access Errors
/// - [`Error::FieldNotFound`] - No field with the requested name is declared
/// - [`Error::AccessDenied`] - The field is not public and was not made accessible
/// - [`Error::IncompatibleInstance`] - The instance is not of the declaring class
///
/// ## I/O Errors
/// - [`Error::FileError`] - Reading a message catalog or language file failed
///
/// # Examples
///
/// ```rust
/// use memberscope::{Error, inspect::ConstructorSpec};
///
/// match ConstructorSpec::from_columns(None, &[vec![], vec![]], Some(&[vec![]][..])) {
///     Ok(specs) => println!("{} specs", specs.len()),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input provided by the caller violates a precondition.
    ///
    /// The error includes the source location where the malformation was detected
    /// for debugging purposes.
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

    /// Failed to register a class in the type registry.
    ///
    /// Canonical names are unique within a registry, a second class with
    /// the same name is rejected.
    #[error("Failed to register type - {0}")]
    TypeInsert(String),

    /// A class could not be found by its canonical name.
    #[error("Failed to find type - {0}")]
    TypeNotFound(String),

    /// No field with the given name is declared on the class or its ancestors.
    #[error("Field '{name}' is not declared on '{owner}'")]
    FieldNotFound {
        /// Canonical name of the class that was searched
        owner: String,
        /// Name of the requested field
        name: String,
    },

    /// The field is not public and its access has not been elevated.
    #[error("Field '{owner}.{name}' is not accessible")]
    AccessDenied {
        /// Canonical name of the declaring class
        owner: String,
        /// Name of the field
        name: String,
    },

    /// The field was read from an object that is not an instance of the declaring class.
    #[error("Field '{field}' cannot be read from an instance of '{instance}'")]
    IncompatibleInstance {
        /// Qualified name of the field (`Owner.name`)
        field: String,
        /// Canonical name of the instance class
        instance: String,
    },

    /// Filesystem I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading message catalogs.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
