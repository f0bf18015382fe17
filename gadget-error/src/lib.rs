//! Error types for gadget.
//!
//! User-Agent classification itself never fails: the parser degrades to
//! empty fields instead. Errors only show up around it, e.g. when the
//! `gadget` binary reads its input.
//!
//! The [`BoxError`] type is a type-erased error type that can be used to represent any error that
//! implements the `std::error::Error` trait and is used for cases where it is usually not
//! that important what specific error type is returned, but rather that an error occurred.
//!
//! That said, one can use downcasting or [`ErrorExt`] to try to get the cause of the error.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

mod ext;
pub use ext::{BoxedError, ErrorContext, ErrorExt};
