// crates/fixconst-cli/tests/cli_run.rs

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MIPS: &str = "// DO NOT EDIT\nGOARCH: mips\nA = int:1\nB = 2\n";
const MIPS_FIXED: &str = "// DO NOT EDIT\nGOARCH: mips, 386, amd64, riscv64\nA = 1\nB = 2\n";
const ZERO_MSG: &str = "Fixed 0 files. Either const files are missing or they are good to go already.";

fn fixconst(dir: &Path, extra: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fixconst"));
    cmd.arg("--dir").arg(dir).args(extra);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("spawn fixconst")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn assert_ok(out: &Output) {
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn fixes_then_reports_zero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt.const"), MIPS).unwrap();

    let first = fixconst(tmp.path(), &[]);
    assert_ok(&first);
    assert_eq!(stdout(&first), "Fixed 1 files.\n");
    assert_eq!(fs::read_to_string(tmp.path().join("a.txt.const")).unwrap(), MIPS_FIXED);

    let second = fixconst(tmp.path(), &[]);
    assert_ok(&second);
    assert_eq!(stdout(&second), format!("{ZERO_MSG}\n"));
    assert_eq!(fs::read_to_string(tmp.path().join("a.txt.const")).unwrap(), MIPS_FIXED);
}

#[test]
fn empty_dir_prints_zero_message() {
    let tmp = TempDir::new().unwrap();

    let out = fixconst(tmp.path(), &[]);
    assert_ok(&out);
    assert_eq!(stdout(&out), format!("{ZERO_MSG}\n"));
}

#[test]
fn missing_dir_fails() {
    let tmp = TempDir::new().unwrap();

    let out = fixconst(&tmp.path().join("nope"), &[]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope"));
}

#[test]
fn check_flag_exits_one_and_leaves_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt.const"), MIPS).unwrap();

    let out = fixconst(tmp.path(), &["--check"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "Would fix 1 files.\n");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("needs fix") && err.contains("a.txt.const"), "stderr: {err}");
    assert_eq!(fs::read_to_string(tmp.path().join("a.txt.const")).unwrap(), MIPS);
}

#[test]
fn arch_flags_replace_default_list() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt.const"), MIPS).unwrap();

    let out = fixconst(tmp.path(), &["--arch", "arm64", "--arch", "riscv64", "--sentinel", "arm64"]);
    assert_ok(&out);
    assert_eq!(
        fs::read_to_string(tmp.path().join("a.txt.const")).unwrap(),
        "// DO NOT EDIT\nGOARCH: mips, arm64, riscv64\nA = 1\nB = 2\n"
    );
}

#[test]
fn sentinel_not_in_arch_list_is_refused() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt.const"), MIPS).unwrap();

    let out = fixconst(tmp.path(), &["--arch", "arm64", "--sentinel", "s390x"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert_eq!(fs::read_to_string(tmp.path().join("a.txt.const")).unwrap(), MIPS);
}
