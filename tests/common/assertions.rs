//! Assertion macros with descriptive failure messages.

/// Assert that a run succeeded and printed exactly the given menu.
///
/// # Example
/// ```ignore
/// assert_menu_eq!(result, POWER_MENU_OUTPUT);
/// ```
#[macro_export]
macro_rules! assert_menu_eq {
    ($result:expr, $expected:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}.\nstderr:\n{}",
            $result.exit_code,
            $result.stderr
        );
        assert_eq!(
            $result.stdout, $expected,
            "Unexpected menu output.\nstderr:\n{}",
            $result.stderr
        );
    };
}

/// Assert that stderr contains the given text.
#[macro_export]
macro_rules! assert_stderr_contains {
    ($result:expr, $text:expr) => {
        assert!(
            $result.stderr.contains($text),
            "Expected stderr to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $text,
            $result.stdout,
            $result.stderr
        );
    };
}
