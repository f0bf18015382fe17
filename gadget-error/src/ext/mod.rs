use std::fmt::Display;

mod chain;
mod context;

mod wrapper;
pub use wrapper::BoxedError;

/// Extends the `Result` and `Option` types with methods for adding context to errors.
///
/// # Examples
///
/// ```
/// use gadget_error::ErrorContext;
///
/// let result = "hello".parse::<i32>().context("parse integer");
/// assert_eq!("parse integer: invalid digit found in string", result.unwrap_err().to_string());
/// ```
pub trait ErrorContext: private::SealedErrorContext {
    /// The resulting context type after adding context to the contained error.
    type Context;

    /// Add a static context to the contained error.
    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static;

    /// Lazily add a context to the contained error, if it exists.
    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    type Context = Result<T, BoxedError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static,
    {
        self.map_err(|error| error.context(context))
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| error.context(context()))
    }
}

impl<T> ErrorContext for Option<T> {
    type Context = Result<T, BoxedError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| wrapper::MessageError("Option is None").context(context))
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| wrapper::MessageError("Option is None").with_context(context))
    }
}

/// Extends the `Error` type with methods for working with errors.
///
/// # Examples
///
/// ```
/// use gadget_error::{ErrorExt, ErrorContext};
///
/// let error = "x".parse::<u8>().context("parse byte").unwrap_err();
/// assert_eq!(error.chain().count(), 2);
/// assert!(error.root_cause().is::<std::num::ParseIntError>());
/// ```
pub trait ErrorExt: private::SealedErrorExt {
    /// Wrap the error in a context.
    fn context<M>(self, context: M) -> BoxedError
    where
        M: Display + Send + Sync + 'static;

    /// Lazily wrap the error with a context.
    fn with_context<C, F>(self, context: F) -> BoxedError
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Iterate over the chain of errors, starting with this one.
    fn chain(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)>;

    /// Get the root cause of the error.
    fn root_cause(&self) -> &(dyn std::error::Error + 'static);
}

impl<Error: std::error::Error + Send + Sync + 'static> ErrorExt for Error {
    fn context<M>(self, context: M) -> BoxedError
    where
        M: Display + Send + Sync + 'static,
    {
        BoxedError::from_std(context::ContextError {
            context,
            error: self,
        })
    }

    fn with_context<C, F>(self, context: F) -> BoxedError
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        BoxedError::from_std(context::ContextError {
            context: context(),
            error: self,
        })
    }

    fn chain(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        chain::Chain::new(self)
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        let mut cause: &(dyn std::error::Error + 'static) = self;
        while let Some(next) = cause.source() {
            cause = next;
        }
        cause
    }
}

mod private {
    pub trait SealedErrorContext {}

    impl<T, E> SealedErrorContext for Result<T, E> where E: std::error::Error + Send + Sync + 'static {}
    impl<T> SealedErrorContext for Option<T> {}

    pub trait SealedErrorExt {}

    impl<Error: std::error::Error + Send + Sync + 'static> SealedErrorExt for Error {}
}
