//! Driver error reporting.

use crate::context::Context;
use std::fmt;
use std::io::{self, Write};

/// An error flag raised by the graphics driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverError {
    /// An enumerated argument was out of range.
    InvalidEnum,
    /// A numeric argument was out of range.
    InvalidValue,
    /// The operation is not allowed in the current state.
    InvalidOperation,
    /// A matrix push would overflow its stack.
    StackOverflow,
    /// A matrix pop would underflow its stack.
    StackUnderflow,
    /// Not enough memory left to execute the command.
    OutOfMemory,
    /// The bound framebuffer is not complete.
    InvalidFramebufferOperation,
    /// A driver-specific error code.
    Other(u32),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnum => write!(f, "invalid enumerant"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::InvalidOperation => write!(f, "invalid operation"),
            Self::StackOverflow => write!(f, "stack overflow"),
            Self::StackUnderflow => write!(f, "stack underflow"),
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::InvalidFramebufferOperation => write!(f, "invalid framebuffer operation"),
            Self::Other(code) => write!(f, "unknown error 0x{code:04x}"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Drains the driver error queue and reports every pending error.
///
/// Each error is written to `error_output` tagged with `checkpoint` so that the
/// stage that produced it can be located. Driver errors never abort a pass;
/// only failures to write the report are returned.
///
/// Returns the number of errors found.
pub fn check_errors<C: Context + ?Sized>(
    ctxt: &mut C,
    checkpoint: &str,
    error_output: &mut dyn Write,
) -> io::Result<usize> {
    let mut count = 0;

    while let Some(err) = ctxt.get_error() {
        log::warn!("driver error \"{}\" during: {}", err, checkpoint);
        writeln!(error_output, "OpenGL error \"{err}\" during: {checkpoint}")?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RecordingContext;

    #[test]
    fn test_error_display() {
        assert_eq!(DriverError::StackUnderflow.to_string(), "stack underflow");
        assert_eq!(
            DriverError::Other(0x0507).to_string(),
            "unknown error 0x0507"
        );
    }

    #[test]
    fn test_check_errors_drains_queue() {
        let mut ctxt = RecordingContext::new();
        ctxt.push_error(DriverError::InvalidEnum);
        ctxt.push_error(DriverError::OutOfMemory);

        let mut out = Vec::new();
        let count = check_errors(&mut ctxt, "scene draw", &mut out).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "OpenGL error \"invalid enumerant\" during: scene draw\n\
             OpenGL error \"out of memory\" during: scene draw\n"
        );

        let mut out = Vec::new();
        assert_eq!(check_errors(&mut ctxt, "again", &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
