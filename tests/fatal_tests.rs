// Each fatal test re-runs this binary for itself with FATAL_TESTS_CHILD set; the child
// takes the fatal path and the parent checks its stderr and exit status.

use std::env;
use std::process::{Command, Output};

use loggo::{LoggerConfig, Registry, Sink};
use regex::Regex;

const CHILD: &str = "FATAL_TESTS_CHILD";

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

    /// Tells the parent which line the fatal call sits on.
    fn announce(line: u32) {
        eprintln!("call-site {}", line);
    }

    fn assert_fatal(output: &Output, body: &str, code: i32) {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(code), "{:?}", stderr);

        let call_site = Regex::new(r"(?m)^call-site (\d+)$")
            .unwrap()
            .captures(&stderr)
            .map(|caps| caps[1].to_string())
            .expect("child did not announce its call site");
        let tagged: Vec<&str> = stderr.lines().filter(|l| l.starts_with('<')).collect();
        assert_eq!(tagged.len(), 1, "{:?}", stderr);

        let shape = Regex::new(&format!(
            r"^<2>\d{{4}}/\d{{2}}/\d{{2}} \d{{2}}:\d{{2}}:\d{{2}} fatal_tests\.rs:{}: {}$",
            call_site,
            regex::escape(body)
        ))
        .unwrap();
        assert!(shape.is_match(tagged[0]), "{:?}", tagged[0]);
    }

    // ==================== global facade tests ====================

    #[test]
    fn test_global_fatal_names_caller_and_exits() {
        if in_child() {
            loggo::init();
            announce(line!() + 1);
            loggo::fatal(&[&"boom", &1]);
        }

        let output = run_child("tests::test_global_fatal_names_caller_and_exits");

        assert_fatal(&output, "boom 1", 1);
    }

    #[test]
    fn test_global_fatalf_names_caller_and_exits() {
        if in_child() {
            loggo::init();
            announce(line!() + 1);
            loggo::fatalf(format_args!("boom {}-{}", 3, "y"));
        }

        let output = run_child("tests::test_global_fatalf_names_caller_and_exits");

        assert_fatal(&output, "boom 3-y", 1);
    }

    // ==================== registry tests ====================

    #[test]
    fn test_registry_fatalf_names_caller_and_exits() {
        if in_child() {
            let registry = Registry::new();
            announce(line!() + 1);
            registry.fatalf(format_args!("disk {} gone", "sda"));
        }

        let output = run_child("tests::test_registry_fatalf_names_caller_and_exits");

        assert_fatal(&output, "disk sda gone", 1);
    }

    #[test]
    fn test_fatalf_macro_names_invocation_site() {
        if in_child() {
            let registry = Registry::new();
            announce(line!() + 1);
            loggo::fatalf!(registry, "{} workers lost", 4);
        }

        let output = run_child("tests::test_fatalf_macro_names_invocation_site");

        assert_fatal(&output, "4 workers lost", 1);
    }

    #[test]
    fn test_configured_exit_code_is_used() {
        if in_child() {
            let cfg = LoggerConfig {
                exit_code: 9,
                ..Default::default()
            };
            let registry = Registry::from_config(&cfg, Sink::stderr());
            announce(line!() + 1);
            registry.fatal(&[&"custom"]);
        }

        let output = run_child("tests::test_configured_exit_code_is_used");

        assert_fatal(&output, "custom", 9);
    }

    #[test]
    fn test_exit_code_wrapping_to_zero_still_fails() {
        if in_child() {
            let cfg = LoggerConfig {
                exit_code: 256,
                ..Default::default()
            };
            let registry = Registry::from_config(&cfg, Sink::stderr());
            announce(line!() + 1);
            registry.fatal(&[&"wrapped"]);
        }

        let output = run_child("tests::test_exit_code_wrapping_to_zero_still_fails");

        assert!(!output.status.success());
        assert_fatal(&output, "wrapped", 1);
    }
}
