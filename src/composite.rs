use std::fmt::Display;

/// The separator placed between messages when folding errors with
/// [`ErrorAccumulator::to_error`].
///
/// [`ErrorAccumulator::to_error`]: crate::ErrorAccumulator::to_error
pub const SEPARATOR: &str = "\n";

/// Renders one accumulated error for a folded message.
///
/// The alternate form (`{:#}`) is used so that errors which print their causes in that form,
/// like `anyhow::Error`, keep the whole chain (`"context: cause"`) instead of only the outermost
/// message.
pub(crate) fn render_message<E: Display>(error: &E) -> String {
    format!("{error:#}")
}

/// A single error folded from one or more accumulated errors.
///
/// Only the rendered message of each error is kept, so a `CompositeError` owns no references to
/// the errors it was built from and has no [`source`](std::error::Error::source). Keep the
/// [`ErrorAccumulator`] around instead if you need the original error values.
///
/// ```
/// # use multierror::ErrorAccumulator;
/// let mut errs = ErrorAccumulator::new();
/// errs.append(Some("A failed"));
/// errs.append(Some("B failed"));
///
/// let err = errs.to_error().unwrap();
/// assert_eq!(err.to_string(), "A failed\nB failed");
/// assert_eq!(err.messages(), &["A failed", "B failed"]);
/// ```
///
/// [`ErrorAccumulator`]: crate::ErrorAccumulator
#[derive(Debug, Clone, Hash, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CompositeError {
    message: String,
    messages: Vec<String>,
}

impl CompositeError {
    /// Renders each error with its alternate [`Display`] form. Returns [`None`] if there are no
    /// errors to fold.
    pub(crate) fn fold<'a, E, I>(errors: I, separator: &str) -> Option<Self>
    where
        E: Display + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let messages: Vec<String> = errors.into_iter().map(render_message).collect();
        if messages.is_empty() {
            return None;
        }

        Some(CompositeError { message: messages.join(separator), messages })
    }

    /// The message of each folded error, in the order the errors were accumulated.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
