use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Command isolated from any settings file on the host.
fn report_tfvars(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("report-tfvars"));
    cmd.current_dir(cwd).env("XDG_CONFIG_HOME", cwd).env_remove("RUST_LOG");
    cmd
}

const VARS_TF: &str = r#"
variable "color" {
	description = "Deployment group color or label or tag"
	type = string
	default = "blue"
}

variable "complex" {
	description = "this is a complex description"
	type = map(string)
	default = {
		"alfred" = "Alfred Wilson"
	}
}

variable "public_key" {
	description = "Value of the SSH public key"
	type = string
	default = "value"
}
"#;

#[test]
fn file_mode_prints_overrides_in_order() {
    let tmp = tempdir().unwrap();
    let tf = tmp.path().join("vars.tf");
    write_file(&tf, VARS_TF);

    let expected = "\
-var color='blue'
        ~> string value only (Deployment group color or label or tag)
-var complex='{ \"alfred\" = \"Alfred Wilson\" }'
        ~> map(string) value only (this is a complex description)
-var public_key='value'
        ~> string value only (Value of the SSH public key)
";

    report_tfvars(tmp.path())
        .args(["--file", tf.to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn file_mode_without_description() {
    let tmp = tempdir().unwrap();
    let tf = tmp.path().join("vars.tf");
    write_file(&tf, r#"variable "test" { type = string default = "value" }"#);

    report_tfvars(tmp.path())
        .args(["-f", tf.to_str().unwrap()])
        .assert()
        .success()
        .stdout("-var test='value'\n        ~> string\n");
}

#[test]
fn file_without_variables_is_informational() {
    let tmp = tempdir().unwrap();
    let tf = tmp.path().join("main.tf");
    write_file(&tf, "variable \"broken\" {\n  type = string\n");

    report_tfvars(tmp.path())
        .args(["--file", tf.to_str().unwrap()])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No matches found in file"));
}

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();
    let tf = tmp.path().join("nope.tf");

    report_tfvars(tmp.path())
        .args(["--file", tf.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading file"))
        .stderr(predicate::str::contains("nope.tf"));
}

#[test]
fn directory_passed_as_file_fails() {
    let tmp = tempdir().unwrap();

    report_tfvars(tmp.path())
        .args(["--file", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("directory defined for --file"));
}

#[test]
fn no_target_fails() {
    let tmp = tempdir().unwrap();

    report_tfvars(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing parameter --file or --dir"));
}

#[test]
fn file_wins_over_directory() {
    let tmp = tempdir().unwrap();
    let tf = tmp.path().join("one.tf");
    write_file(&tf, r#"variable "one" { default = 1 }"#);
    write_file(&tmp.path().join("other/two.tf"), r#"variable "two" { default = 2 }"#);

    report_tfvars(tmp.path())
        .args(["--file", tf.to_str().unwrap()])
        .args(["--dir", tmp.path().join("other").to_str().unwrap()])
        .assert()
        .success()
        .stdout("-var one='1'\n        ~> \n");
}
