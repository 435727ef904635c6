use super::resolve_loader::{ResolveFailure, ResolveTestResult, TestCase, load_resolve_tests};
/// Reference resolution runner
///
/// Parses base and relative tolerantly, resolves, and compares the
/// display form of the result.
use uriel::{ParsingMode, Url};

pub fn run_resolve_tests(tests: Vec<TestCase>) -> ResolveTestResult {
    let mut result = ResolveTestResult::new();
    let mut test_num = 0;

    for test in tests {
        let TestCase::Resolve {
            base,
            relative,
            expected,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let base_url = Url::parse(&base, ParsingMode::Tolerant);
        let relative_url = Url::parse(&relative, ParsingMode::Tolerant);
        let actual = base_url.resolved(&relative_url).to_string();

        if actual == expected {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(ResolveFailure {
                test_num,
                base,
                relative,
                expected,
                actual,
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_fixture() {
        let result = run_resolve_tests(load_resolve_tests());

        println!("\n=== RFC 3986 Resolution Results ===");
        println!("{}", result.summary());

        for failure in &result.failures {
            println!(
                "  #{} base={:?} relative={:?} expected={:?} actual={:?}",
                failure.test_num,
                failure.base,
                failure.relative,
                failure.expected,
                failure.actual
            );
        }

        assert_eq!(result.failed, 0, "{}", result.summary());
    }
}
