use multierror::ErrorAccumulator;
use proptest::prelude::*;

// Messages without the separator, so the folded text can be split back apart.
fn message() -> impl Strategy<Value = String> {
    "[a-z ]{1,12}"
}

fn checks() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(proptest::option::of(message()), 0..16)
}

proptest! {
    #[test]
    fn append_reports_presence_and_keeps_order(results in checks()) {
        let mut errs = ErrorAccumulator::new();
        for result in &results {
            let before = errs.len();
            let appended = errs.append(result.clone());

            prop_assert_eq!(appended, result.is_some());
            prop_assert_eq!(errs.len(), before + usize::from(appended));
        }

        let expected: Vec<String> = results.into_iter().flatten().collect();
        prop_assert_eq!(errs.errors(), expected.as_slice());

        match errs.to_error() {
            None => prop_assert!(expected.is_empty()),
            Some(err) => {
                let text = err.to_string();
                let lines: Vec<&str> = text.split('\n').collect();
                prop_assert_eq!(lines, expected.iter().map(String::as_str).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn false_condition_never_mutates(
        results in checks(),
        context in message(),
        error in proptest::option::of(message()),
    ) {
        let mut errs: ErrorAccumulator<String> = results.into_iter().collect();
        let before = errs.clone();

        let appended = errs.append_with_condition(false, |c: String, _| c, context, error);

        prop_assert!(!appended);
        prop_assert_eq!(errs, before);
    }

    #[test]
    fn true_condition_appends_exactly_the_wrapped_error(
        results in checks(),
        context in message(),
        error in proptest::option::of(message()),
    ) {
        let wrap = |c: String, e: Option<String>| format!("{c}: {}", e.unwrap_or_default());
        let expected = wrap(context.clone(), error.clone());

        let mut errs: ErrorAccumulator<String> = results.into_iter().collect();
        let before = errs.len();

        prop_assert!(errs.append_with_condition(true, wrap, context, error));
        prop_assert_eq!(errs.len(), before + 1);
        prop_assert_eq!(errs.errors().last(), Some(&expected));
    }

    #[test]
    fn new_from_matches_new_then_append(error in proptest::option::of(message())) {
        let mut appended = ErrorAccumulator::new();
        appended.append(error.clone());

        prop_assert_eq!(ErrorAccumulator::new_from(error), appended);
    }

    #[test]
    fn folding_twice_gives_the_same_text(results in checks()) {
        let errs: ErrorAccumulator<String> = results.into_iter().collect();

        let first = errs.to_error().map(|e| e.to_string());
        let second = errs.to_error().map(|e| e.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn into_result_displays_like_to_error(results in checks()) {
        let errs: ErrorAccumulator<String> = results.into_iter().collect();
        let folded = errs.to_error().map(|e| e.to_string());

        match errs.into_result() {
            Ok(()) => prop_assert_eq!(folded, None),
            Err(errs) => prop_assert_eq!(folded, Some(errs.to_string())),
        }
    }
}
