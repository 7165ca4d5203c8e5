/// Something which errors can be pushed into.
///
/// This generalizes methods like [`ErrorAccumulator::propagate`] which allow errors to be handled
/// by merging them into a different collection of errors.
///
/// ```
/// # use multierror::{ErrorAccumulator, ErrorCollector};
/// fn validate_name(name: &str, errors: &mut impl ErrorCollector<String>) {
///     if name.is_empty() {
///         errors.push_error("name is required".to_owned());
///     }
/// }
///
/// let mut errs = ErrorAccumulator::new();
/// validate_name("", &mut errs);
///
/// let mut plain = vec![];
/// validate_name("", &mut plain);
///
/// assert_eq!(errs.errors(), plain.as_slice());
/// ```
///
/// [`ErrorAccumulator::propagate`]: crate::ErrorAccumulator::propagate
pub trait ErrorCollector<E> {
    /// Add a new error to the collection of errors.
    fn push_error(&mut self, error: E);
}

impl<E> ErrorCollector<E> for Vec<E> {
    fn push_error(&mut self, error: E) {
        self.push(error);
    }
}
