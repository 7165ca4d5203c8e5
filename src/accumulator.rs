use std::fmt::{self, Debug, Display};

use crate::composite::render_message;
use crate::{CompositeError, ErrorCollector, SEPARATOR};

/// An ordered collection of errors from a sequence of independent checks, which can be folded
/// into a single error once all checks have run.
///
/// Absent errors are represented with [`None`] and are never stored, so every error inside an
/// `ErrorAccumulator` is an actual failure. Errors keep the order they were appended in, and
/// duplicates are kept.
///
/// The append methods return whether they stored anything, which lets the append itself act as
/// the branch condition where you would otherwise match on each check's result:
///
/// ```
/// # use multierror::ErrorAccumulator;
/// fn check_name(name: &str) -> Result<(), String> {
///     if name.is_empty() { Err("name is required".into()) } else { Ok(()) }
/// }
/// fn check_age(age: u32) -> Result<(), String> {
///     if age > 150 { Err(format!("age {age} is out of range")) } else { Ok(()) }
/// }
///
/// fn validate(name: &str, age: u32) -> Option<multierror::CompositeError> {
///     let mut errs = ErrorAccumulator::new();
///     if !errs.append(check_name(name).err()) {
///         errs.append(check_age(age).err());
///     }
///     errs.to_error()
/// }
///
/// assert!(validate("ada", 36).is_none());
/// assert_eq!(validate("ada", 200).unwrap().to_string(), "age 200 is out of range");
/// assert_eq!(validate("", 200).unwrap().to_string(), "name is required");
/// ```
///
/// An `ErrorAccumulator` does no locking of its own. To append from several threads, wrap it in
/// a [`Mutex`](std::sync::Mutex).
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ErrorAccumulator<E> {
    errors: Vec<E>,
}

impl<E> ErrorAccumulator<E> {
    /// Constructs a new `ErrorAccumulator` without any errors.
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let errs = ErrorAccumulator::<String>::new();
    /// assert!(errs.is_empty());
    /// assert!(errs.to_error().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        ErrorAccumulator { errors: vec![] }
    }

    /// Constructs a new `ErrorAccumulator` containing `error` if it is present, or no errors
    /// otherwise. This is the same as calling [`new`] followed by [`append`].
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let errs = ErrorAccumulator::new_from("12x".parse::<u32>().err());
    /// assert_eq!(errs.len(), 1);
    ///
    /// let errs = ErrorAccumulator::new_from("12".parse::<u32>().err());
    /// assert!(errs.is_empty());
    /// ```
    ///
    /// [`new`]: ErrorAccumulator::new
    /// [`append`]: ErrorAccumulator::append
    #[must_use]
    pub fn new_from(error: Option<E>) -> Self {
        let mut errs = Self::new();
        errs.append(error);
        errs
    }

    /// Appends `error` if it is present. Returns `true` if an error was appended, and `false`
    /// without changing anything if `error` was [`None`].
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let mut errs = ErrorAccumulator::new();
    /// assert!(errs.append(Some("field required")));
    /// assert!(!errs.append(None));
    ///
    /// assert_eq!(errs.to_error().unwrap().to_string(), "field required");
    /// ```
    pub fn append(&mut self, error: Option<E>) -> bool {
        match error {
            Some(error) => {
                self.store(error);
                true
            }
            None => false,
        }
    }

    /// If `condition` is `true`, builds an error by calling `wrap` with `context` and `error`,
    /// appends it, and returns `true`. Otherwise `wrap` is not called, nothing is appended, and
    /// this returns `false`.
    ///
    /// `wrap` decides what gets stored. It may annotate the underlying error with the context,
    /// or construct a different kind of error entirely. Since `error` is an [`Option`], `wrap`
    /// can also synthesize an error when a check succeeded but should not have:
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// fn annotate(context: &str, cause: Option<std::num::ParseIntError>) -> String {
    ///     match cause {
    ///         Some(cause) => format!("{context}: {cause}"),
    ///         None => context.to_owned(),
    ///     }
    /// }
    ///
    /// let mut errs = ErrorAccumulator::new();
    ///
    /// let port = "80a".parse::<u16>();
    /// errs.append_with_condition(port.is_err(), annotate, "invalid port", port.err());
    ///
    /// // A negative count must be rejected, so succeeding here is itself an error
    /// let count = "-3".parse::<u8>();
    /// errs.append_with_condition(count.is_ok(), annotate, "negative count accepted", None);
    ///
    /// let err = errs.to_error().unwrap();
    /// assert_eq!(err.messages(), &["invalid port: invalid digit found in string"]);
    /// ```
    pub fn append_with_condition<C, X, F>(
        &mut self,
        condition: bool,
        wrap: F,
        context: C,
        error: Option<X>,
    ) -> bool
    where
        F: FnOnce(C, Option<X>) -> E,
    {
        if condition {
            self.store(wrap(context, error));
        }
        condition
    }

    /// If `error` is present, appends the result of calling `wrap` with `context` and the error,
    /// and returns `true`. Returns `false` without calling `wrap` if `error` is [`None`].
    ///
    /// This is [`append_with_condition`] for the common case of adding context to a failure,
    /// where `wrap` can take the underlying error directly instead of an [`Option`].
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let mut errs = ErrorAccumulator::new();
    /// let wrap = |ctx: &str, e: std::num::ParseIntError| format!("{ctx}: {e}");
    ///
    /// assert!(errs.append_wrapped(wrap, "reading width", "wide".parse::<u32>().err()));
    /// assert!(!errs.append_wrapped(wrap, "reading height", "42".parse::<u32>().err()));
    ///
    /// assert_eq!(errs.errors(), &["reading width: invalid digit found in string"]);
    /// ```
    ///
    /// [`append_with_condition`]: ErrorAccumulator::append_with_condition
    pub fn append_wrapped<C, X, F>(&mut self, wrap: F, context: C, error: Option<X>) -> bool
    where
        F: FnOnce(C, X) -> E,
    {
        self.append(error.map(|error| wrap(context, error)))
    }

    /// Appends the error if `result` is an [`Err`], or returns the value if it is [`Ok`].
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let mut errs = ErrorAccumulator::new();
    ///
    /// let width = errs.check("640".parse::<u32>());
    /// let height = errs.check("tall".parse::<u32>());
    ///
    /// assert_eq!(width, Some(640));
    /// assert_eq!(height, None);
    /// assert_eq!(errs.len(), 1);
    /// ```
    pub fn check<T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.store(error);
                None
            }
        }
    }

    /// Moves every error from this `ErrorAccumulator` into an [`ErrorCollector`], in order.
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let mut address = ErrorAccumulator::new();
    /// address.append(Some("street is required"));
    /// address.append(Some("postcode is malformed"));
    ///
    /// let mut order = ErrorAccumulator::new_from(Some("quantity must be positive"));
    /// address.propagate(&mut order);
    ///
    /// assert_eq!(order.errors(), &[
    ///     "quantity must be positive",
    ///     "street is required",
    ///     "postcode is malformed",
    /// ]);
    /// ```
    pub fn propagate(self, other: &mut impl ErrorCollector<E>) {
        for error in self.errors {
            other.push_error(error);
        }
    }

    /// Returns `true` if no errors have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The number of errors appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The appended errors, in the order they were appended.
    #[must_use]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Iterates over the appended errors, in the order they were appended.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Consumes this `ErrorAccumulator`, returning the appended errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }

    /// Converts this `ErrorAccumulator` into a [`Result`]:
    ///
    /// - If there are no errors, produces `Ok(())`.
    /// - Otherwise, produces an [`Err`] containing the accumulator itself, which keeps the
    ///   original error values and displays them the same way as [`to_error`].
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// fn parse_all(inputs: &[&str]) -> Result<Vec<u8>, ErrorAccumulator<std::num::ParseIntError>> {
    ///     let mut errs = ErrorAccumulator::new();
    ///     let values: Vec<u8> = inputs.iter().filter_map(|s| errs.check(s.parse::<u8>())).collect();
    ///     errs.into_result().map(|()| values)
    /// }
    ///
    /// assert_eq!(parse_all(&["1", "2"]).unwrap(), vec![1, 2]);
    ///
    /// let errs = parse_all(&["1", "x", "300"]).unwrap_err();
    /// assert_eq!(errs.len(), 2);
    /// assert_eq!(
    ///     errs.to_string(),
    ///     "invalid digit found in string\nnumber too large to fit in target type",
    /// );
    /// ```
    ///
    /// [`to_error`]: ErrorAccumulator::to_error
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = self.errors.len(), "accumulated errors returned as result");
            Err(self)
        }
    }

    fn store(&mut self, error: E) {
        self.errors.push(error);
        tracing::trace!(count = self.errors.len(), "error accumulated");
    }
}

impl<E: Display> ErrorAccumulator<E> {
    /// Folds the appended errors into a single error. Returns [`None`] if there are no errors.
    ///
    /// The message of the [`CompositeError`] is the message of each appended error, joined with
    /// [`SEPARATOR`] (a newline) in the order they were appended. Each error is rendered in its
    /// alternate form (`{:#}`), so errors which wrap a cause, like `anyhow::Error` with context,
    /// contribute their whole `"context: cause"` chain. Folding does not change the
    /// accumulator, so folding twice gives the same message both times.
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let mut errs = ErrorAccumulator::new();
    /// errs.append(Some("A failed"));
    /// errs.append(None);
    /// errs.append(Some("B failed"));
    ///
    /// assert_eq!(errs.to_error().unwrap().to_string(), "A failed\nB failed");
    /// ```
    #[must_use]
    pub fn to_error(&self) -> Option<CompositeError> {
        self.to_error_with_separator(SEPARATOR)
    }

    /// Like [`to_error`], but joins the messages with `separator` instead of a newline.
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let errs: ErrorAccumulator<_> = [Some("A failed"), Some("B failed")].into_iter().collect();
    /// assert_eq!(errs.to_error_with_separator("; ").unwrap().to_string(), "A failed; B failed");
    /// ```
    ///
    /// [`to_error`]: ErrorAccumulator::to_error
    #[must_use]
    pub fn to_error_with_separator(&self, separator: &str) -> Option<CompositeError> {
        tracing::debug!(count = self.errors.len(), "folding accumulated errors");
        CompositeError::fold(&self.errors, separator)
    }
}

impl<E> Default for ErrorAccumulator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Display> Display for ErrorAccumulator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(render_message).collect();
        f.write_str(&messages.join(SEPARATOR))
    }
}

impl<E: Display + Debug> std::error::Error for ErrorAccumulator<E> {}

impl<E> ErrorCollector<E> for ErrorAccumulator<E> {
    fn push_error(&mut self, error: E) {
        self.store(error);
    }
}

impl<E> FromIterator<Option<E>> for ErrorAccumulator<E> {
    /// Collects the results of several checks, skipping any which are [`None`].
    ///
    /// ```
    /// # use multierror::ErrorAccumulator;
    /// let errs: ErrorAccumulator<_> = ["1", "two", "3", "four"]
    ///     .into_iter()
    ///     .map(|s| s.parse::<u32>().err())
    ///     .collect();
    ///
    /// assert_eq!(errs.len(), 2);
    /// ```
    fn from_iter<I: IntoIterator<Item = Option<E>>>(iter: I) -> Self {
        let mut errs = Self::new();
        errs.extend(iter);
        errs
    }
}

impl<E> Extend<Option<E>> for ErrorAccumulator<E> {
    fn extend<I: IntoIterator<Item = Option<E>>>(&mut self, iter: I) {
        for error in iter {
            self.append(error);
        }
    }
}

impl<E> IntoIterator for ErrorAccumulator<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorAccumulator<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
