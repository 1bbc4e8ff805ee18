//! Scenario: a scripted session fed to `phone-signin replay`
//!
//! Journey: a tester records what a user typed and replays it, first as
//! rendered screens, then as NDJSON for a CI check.

use crate::common::*;

const MISTYPED_THEN_FIXED: &str = "\
# user mistypes the prefix, gets the submit error, fixes it
type 0212345678
submit
type 0912345678
submit
";

#[test]
fn scenario_replay_renders_each_screen() {
    let env = TestEnv::new();
    let script = env.write_file("flow.txt", MISTYPED_THEN_FIXED);

    let result = env.run(&["replay", script.to_str().unwrap()]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let out = &result.stdout;
    assert!(out.starts_with("Đăng nhập\n"), "got:\n{out}");
    assert!(out.contains("-> line 2: type '0212345678'"));
    assert!(out.contains("[!] Số điện thoại không đúng định dạng. Vui lòng nhập lại."));
    assert!(out.contains("-> line 5: submit"));
    assert!(out.contains("[HOME] Trang chủ"));
    assert!(out.contains("Chào mừng bạn đến với trang chủ!"));
    assert!(out.trim_end().ends_with("[OK] Final screen: Home (signed in)"));
}

#[test]
fn scenario_replay_json_event_stream() {
    let env = TestEnv::new();

    let result = env.run_with_stdin(&["replay", "--json"], MISTYPED_THEN_FIXED);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.ndjson();
    let names: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "start",
            "text_changed",
            "submit_rejected",
            "text_changed",
            "submit_accepted",
            "navigate",
            "complete",
        ]
    );

    assert!(events.iter().all(|e| e["command"] == "replay"));
    assert_eq!(events[2]["error_text"], phone_signin::SUBMIT_FORMAT_ERROR);
    assert_eq!(events[5]["from"], "SignIn");
    assert_eq!(events[5]["to"], "Home");
    assert_eq!(events[6]["signed_in"], true);
}

#[test]
fn scenario_replay_input_after_home_is_ignored() {
    let env = TestEnv::new();
    let script = "type 0912345678\nsubmit\ntype 0212345678\nsubmit\n";

    let result = env.run_with_stdin(&["replay", "--json", "-"], script);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.ndjson();
    let navigations = events.iter().filter(|e| e["event"] == "navigate").count();
    let ignored = events.iter().filter(|e| e["event"] == "ignored").count();
    assert_eq!(navigations, 1);
    assert_eq!(ignored, 2);
    assert_eq!(events.last().unwrap()["screen"], "Home");
}

#[test]
fn scenario_replay_without_valid_submit_ends_on_sign_in() {
    let env = TestEnv::new();

    let result = env.run_with_stdin(&["replay"], "type 1234567890\nsubmit\n");

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[!] Số điện thoại không đúng định dạng"));
    assert!(result
        .stdout
        .trim_end()
        .ends_with("[WARN] Final screen: SignIn (not signed in)"));
}
