// Exercises the process-wide facade. Output checks re-run this binary for a single test
// with GLOBAL_TESTS_CHILD set and read the child's stderr.

use std::env;
use std::process::{Command, Output};

use regex::Regex;

const CHILD: &str = "GLOBAL_TESTS_CHILD";

#[cfg(test)]
mod tests {
    use super::*;

    fn in_child() -> bool {
        env::var_os(CHILD).is_some()
    }

    fn run_child(test: &str) -> Output {
        Command::new(env::current_exe().expect("test binary path"))
            .args(["--exact", test, "--nocapture", "--test-threads=1"])
            .env(CHILD, "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to re-run test binary")
    }

    // ==================== init() tests ====================

    #[test]
    fn test_init_is_idempotent() {
        let first = loggo::init();
        let second = loggo::init();

        assert!(std::ptr::eq(first, second));
        assert!(loggo::try_global().is_some());
    }

    #[test]
    fn test_install_after_init_hands_registry_back() {
        loggo::init();

        let rejected = loggo::install(loggo::Registry::new());

        assert!(rejected.is_err());
    }

    #[test]
    fn test_level_functions_write_tagged_lines_to_stderr() {
        if in_child() {
            loggo::init();

            loggo::emergency(&[&"global", &"emergency"]);
            loggo::alertf(format_args!("global {}", "alert"));
            loggo::critical(&[&"global critical"]);
            loggo::errorf(format_args!("global {}", 3));
            loggo::warn(&[&"global warn"]);
            loggo::noticef(format_args!("global notice"));
            loggo::info(&[&"global", &6]);
            loggo::debugf(format_args!("global {}", 7));
            loggo::print(&[&"global print"]);
            loggo::printf(format_args!("global printf"));
            return;
        }

        let output = run_child("tests::test_level_functions_write_tagged_lines_to_stderr");

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        let tagged: Vec<&str> = stderr.lines().filter(|l| l.starts_with('<')).collect();
        let expected = [
            ("<0>", "global emergency"),
            ("<1>", "global alert"),
            ("<2>", "global critical"),
            ("<3>", "global 3"),
            ("<4>", "global warn"),
            ("<5>", "global notice"),
            ("<6>", "global 6"),
            ("<7>", "global 7"),
            ("<7>", "global print"),
            ("<7>", "global printf"),
        ];
        assert_eq!(tagged.len(), expected.len(), "{:?}", stderr);
        for (line, (tag, body)) in tagged.iter().zip(expected) {
            let shape = Regex::new(&format!(
                r"^{}\d{{4}}/\d{{2}}/\d{{2}} \d{{2}}:\d{{2}}:\d{{2}} {}$",
                regex::escape(tag),
                regex::escape(body)
            ))
            .unwrap();
            assert!(shape.is_match(line), "{:?}", line);
        }
    }

    #[test]
    fn test_global_writers_are_bound_to_tags() {
        let registry = loggo::init();

        for severity in loggo::Severity::ALL {
            assert_eq!(registry.writer(severity).prefix(), severity.tag());
        }
    }
}
