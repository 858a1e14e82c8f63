//! Integration tests for `pxp-module-puppet run`.
//!
//! Each test installs a fake `puppet` script in a temp dir. The script
//! answers `agent --configprint <key>` from that dir and, when run as an
//! agent, records its arguments, optionally writes a report and exits with
//! `$FAKE_PUPPET_EXIT`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

const REPORT: &str = "--- !ruby/object:Puppet::Transaction::Report
host: agent.example.com
time: 2015-09-07 11:09:49.973632164 +00:00
kind: apply
transaction_uuid: ac59acbe-6a0f-49c9-8ece-f781a689fda9
environment: production
status: changed
";

fn module() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pxp-module-puppet"));
    cmd.arg("run").env("PXP_PUPPET_LOG", "off");
    cmd
}

/// A temp dir holding a fake agent binary and its state directory.
struct FakePuppet {
    dir: TempDir,
}

impl FakePuppet {
    fn new() -> Self {
        Self::with_script(&Self::agent_script)
    }

    /// Agent whose `--configprint` always fails.
    fn broken() -> Self {
        Self::with_script(&|_: &Path| "#!/bin/sh\necho 'Error: config unavailable' >&2\nexit 1\n".to_string())
    }

    fn with_script(script: &dyn Fn(&Path) -> String) -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("state")).expect("state dir");
        let bin = dir.path().join("puppet");
        std::fs::write(&bin, script(dir.path())).expect("write script");
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).expect("chmod");
        Self { dir }
    }

    fn agent_script(root: &Path) -> String {
        let state = root.join("state");
        let state = state.display();
        format!(
            r#"#!/bin/sh
STATE="{state}"
if [ "$1" = "agent" ] && [ "$2" = "--configprint" ]; then
  case "$3" in
    statedir) echo "$STATE" ;;
    agent_catalog_run_lockfile) echo "$STATE/agent_catalog_run.lock" ;;
    agent_disabled_lockfile) echo "$STATE/agent_disabled.lock" ;;
    *) echo "unknown setting $3" >&2; exit 1 ;;
  esac
  exit 0
fi
echo "$@" > "{root}/invocation"
echo "this goes to the null device"
if [ "${{WRITE_REPORT:-1}}" = "1" ]; then
  cat > "$STATE/last_run_report.yaml" <<'YAML'
{REPORT}YAML
fi
exit "${{FAKE_PUPPET_EXIT:-0}}"
"#,
            root = root.display(),
        )
    }

    fn bin(&self) -> String {
        self.dir.path().join("puppet").display().to_string()
    }

    fn state(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    fn invocation(&self) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join("invocation")).ok()
    }

    fn touch(&self, name: &str) {
        std::fs::write(self.state().join(name), "").expect("touch lockfile");
    }

    fn request(&self, env: &[&str], flags: &[&str]) -> String {
        json!({
            "config": {"puppet_bin": self.bin()},
            "params": {"env": env, "flags": flags},
        })
        .to_string()
    }
}

fn run_json(stdin: &str) -> Value {
    let output = module().write_stdin(stdin).output().expect("run module");
    assert!(
        output.status.success(),
        "module failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

// --- Request validation ---

#[test]
fn test_invalid_json_is_rejected() {
    let value = run_json("{this is not json");
    assert_eq!(
        value,
        json!({"error": "Invalid json parsed on STDIN. Cannot start run action"})
    );
}

#[test]
fn test_null_document_is_rejected() {
    let value = run_json("null");
    assert_eq!(
        value["error"],
        "Invalid json parsed on STDIN. Cannot start run action"
    );
}

#[test]
fn test_missing_puppet_bin_is_rejected() {
    let value = run_json(r#"{"config": {}, "params": {"env": [], "flags": []}}"#);
    assert_eq!(value, json!({"error": "puppet_bin configuration value not set"}));
}

#[test]
fn test_nonexistent_puppet_bin_is_rejected() {
    let value = run_json(
        r#"{"config": {"puppet_bin": "/nonexistent/bin/puppet"}, "params": {"env": [], "flags": []}}"#,
    );
    assert_eq!(
        value["error"],
        "Puppet executable '/nonexistent/bin/puppet' does not exist"
    );
}

// --- Lock handling ---

#[test]
fn test_disabled_agent_is_not_started() {
    let puppet = FakePuppet::new();
    puppet.touch("agent_disabled.lock");

    let value = run_json(&puppet.request(&[], &[]));
    assert_eq!(value, json!({"error": "Puppet agent is disabled"}));
    assert!(puppet.invocation().is_none(), "agent must not run");
}

#[test]
fn test_running_agent_is_not_started() {
    let puppet = FakePuppet::new();
    puppet.touch("agent_catalog_run.lock");
    puppet.touch("agent_disabled.lock");

    let value = run_json(&puppet.request(&[], &[]));
    assert_eq!(value["error"], "Puppet agent is already performing a run");
    assert!(puppet.invocation().is_none());
}

#[test]
fn test_unsafe_flag_is_not_started() {
    let puppet = FakePuppet::new();

    let value = run_json(&puppet.request(&[], &["--noop;touch /tmp/pwned"]));
    assert_eq!(
        value["error"],
        "Refusing to pass unsafe token '--noop;touch /tmp/pwned' to the Puppet agent"
    );
    assert!(puppet.invocation().is_none());
}

// --- Runs ---

#[test]
fn test_clean_run_reports_last_run_report() {
    let puppet = FakePuppet::new();

    let value = run_json(&puppet.request(&[], &["--noop"]));
    assert_eq!(
        value,
        json!({
            "kind": "apply",
            "time": "2015-09-07 11:09:49.973632164 +00:00",
            "transaction_uuid": "ac59acbe-6a0f-49c9-8ece-f781a689fda9",
            "environment": "production",
            "status": "changed",
            "error": "",
            "exitcode": 0
        })
    );

    let invocation = puppet.invocation().expect("agent ran");
    assert_eq!(
        invocation.trim(),
        "agent --no-usecacheonfailure --no-splay --show_diff --no-daemonize --onetime --verbose --noop"
    );
}

#[test]
fn test_nonzero_exit_reports_sentinels() {
    let puppet = FakePuppet::new();

    let value = run_json(&puppet.request(&["FAKE_PUPPET_EXIT=2"], &[]));
    assert_eq!(
        value,
        json!({
            "kind": "unknown",
            "time": "unknown",
            "transaction_uuid": "unknown",
            "environment": "unknown",
            "status": "unknown",
            "error": "Puppet agent exited with a non 0 exitcode",
            "exitcode": 2
        })
    );
}

#[test]
fn test_clean_run_without_report() {
    let puppet = FakePuppet::new();

    let value = run_json(&puppet.request(&["WRITE_REPORT=0"], &[]));
    let expected = format!(
        "{} doesn't exist",
        puppet.state().join("last_run_report.yaml").display()
    );
    assert_eq!(value["error"], expected.as_str());
    assert_eq!(value["exitcode"], 0);
    assert_eq!(value["status"], "unknown");
}

#[test]
fn test_agent_output_is_discarded() {
    let puppet = FakePuppet::new();

    module()
        .write_stdin(puppet.request(&[], &[]))
        .assert()
        .success()
        .stdout(predicate::str::contains("null device").not());
}

#[test]
fn test_stdout_carries_only_the_result_when_redirect_targets_stdout() {
    let puppet = FakePuppet::new();

    let output = module()
        .env("PXP_PUPPET_NULL_DEVICE", "/dev/stdout")
        .write_stdin(puppet.request(&[], &[]))
        .output()
        .expect("run module");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.lines().count(), 1, "got: {stdout}");
    let value: Value = serde_json::from_str(&stdout).expect("stdout is json");
    assert_eq!(value["status"], "changed");
}

#[test]
fn test_comment_flag_is_not_started() {
    let puppet = FakePuppet::new();

    let value = run_json(&puppet.request(&[], &["#"]));
    assert_eq!(
        value["error"],
        "Refusing to pass unsafe token '#' to the Puppet agent"
    );
    assert!(puppet.invocation().is_none());
}

#[test]
fn test_env_value_with_command_is_not_started() {
    let puppet = FakePuppet::new();
    let marker = puppet.state().join("marker");
    let token = format!("FOO=x touch -- {}", marker.display());

    let value = run_json(&puppet.request(&[token.as_str()], &[]));
    assert_eq!(
        value["error"],
        format!("Invalid environment variable assignment '{token}'").as_str()
    );
    assert!(!marker.exists());
}

// --- Faults ---

#[test]
fn test_configprint_failure_exits_nonzero() {
    let puppet = FakePuppet::broken();

    module()
        .write_stdin(puppet.request(&[], &[]))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("agent_catalog_run_lockfile"))
        .stderr(predicate::str::contains("config unavailable"));
}
