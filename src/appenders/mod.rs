//! Appender implementations

pub mod callback;
pub mod console;
pub mod file_sink;
pub mod rotating_file;

pub use callback::{CallbackAppender, LineCallback};
pub use console::ConsoleAppender;
pub use file_sink::FileSink;
pub use rotating_file::{FilenamePattern, RotatingFileStream, RotationFrequency};

// Re-export trait for convenience
pub use crate::core::Appender;
