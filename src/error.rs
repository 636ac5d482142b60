//! Error taxonomy for the PTP management codec.
//!
//! Every fallible call in this crate returns a [`Result`] built on [`Error`].
//! Nothing here panics or aborts: decoders short-circuit on the first
//! failure and the caller is left with a well-defined, if incomplete,
//! result. A thread-local "last error" cache mirrors the legacy
//! file/line/message query shape for callers migrating from a C library.

use std::cell::RefCell;
use thiserror::Error;

/// Top-level error type for the PTP management codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Not enough bytes remained in the buffer to read the requested field.
    #[error("buffer too short: need {needed} bytes, {available} available")]
    TooShort { needed: usize, available: usize },
    /// Not enough room remained in the output buffer to write the requested field.
    #[error("buffer has no space: need {needed} bytes, {available} available")]
    NoSpace { needed: usize, available: usize },
    /// The common header failed a structural check (bad messageLength, unknown messageType, ...).
    #[error("malformed header: {0}")]
    Header(String),
    /// `actionField` was not permitted for the direction or managementId in play.
    #[error("action {actual} not permitted here: {reason}")]
    Action { actual: u8, reason: String },
    /// A TLV or array length failed to be self-consistent.
    #[error("length error: {0}")]
    Length(String),
    /// The management or signaling TLV type is not implemented by this build.
    #[error("unsupported managementId/tlvType: 0x{0:04x}")]
    Unsupported(u16),
    /// An enumerated field held a value outside its known range.
    #[error("value out of range for {field}: {value}")]
    Val { field: &'static str, value: i64 },
    /// The caller-supplied buffer was too small to hold the built message.
    #[error("output buffer too small: need {needed} bytes, capacity {capacity}")]
    Size { needed: usize, capacity: usize },
    /// A correlated RESPONSE carried a managementId different from its request.
    #[error("reply managementId 0x{actual:04x} does not match request 0x{expected:04x}")]
    Mismatch { expected: u16, actual: u16 },
    /// An authentication TLV was present and rejected by the caller's policy.
    #[error("authentication rejected: {0}")]
    Auth(String),
    /// The JSON document did not conform to the accepted grammar.
    #[error("json: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A single recorded failure, mirroring the legacy "last error" query shape:
/// source location, a human message, and (on this codec) no errno, since no
/// syscalls are ever made.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
    pub message: String,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<ErrorRecord>> = const { RefCell::new(None) };
}

/// Record `err` as the thread-local last error and return it unchanged.
///
/// Call sites use [`record!`] rather than this function directly so that
/// `file`/`line`/`function` are captured at the call site.
pub fn record(file: &'static str, line: u32, function: &'static str, err: Error) -> Error {
    let message = err.to_string();
    LAST_ERROR.with(|cell| {
        *cell.borrow_mut() = Some(ErrorRecord {
            file,
            line,
            function,
            message,
        });
    });
    err
}

/// Read back the last error recorded on this thread, if any.
pub fn last_error() -> Option<ErrorRecord> {
    LAST_ERROR.with(|cell| cell.borrow().clone())
}

/// Clear the thread-local last-error cache.
pub fn clear_last_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Record `$err` at the call site and yield it back, for use in `?`-chained
/// returns: `return Err(record_here!(Error::TooShort { .. }))`.
macro_rules! record_here {
    ($err:expr) => {
        $crate::error::record(file!(), line!(), $crate::error::function_name!(), $err)
    };
}

/// Expands to the enclosing function's name, for [`record_here`].
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

pub(crate) use function_name;
pub(crate) use record_here;
