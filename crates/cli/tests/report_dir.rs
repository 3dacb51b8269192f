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

fn report_tfvars(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("report-tfvars"));
    cmd.current_dir(cwd).env("XDG_CONFIG_HOME", cwd).env_remove("RUST_LOG");
    cmd
}

fn create_tree(root: &Path) {
    write_file(
        &root.join("infra/variables.tf"),
        r#"variable "region" { description = "AWS region" type = string default = "us-east-1" }"#,
    );
    write_file(
        &root.join("infra/modules/vpc/inputs.tf"),
        "variable \"cidr\" {\n  type = string\n  default = \"10.0.0.0/16\"\n}\n",
    );
    write_file(&root.join("infra/main.tf"), "resource \"null_resource\" \"noop\" {}\n");
    write_file(&root.join("infra/terraform.tfvars"), "region = \"eu-west-1\"\n");
}

#[test]
fn dir_mode_walks_tf_files_in_order() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    let expected = "\
-var cidr='10.0.0.0/16'
        ~> string
-var region='us-east-1'
        ~> string value only (AWS region)
";

    report_tfvars(tmp.path())
        .args(["--dir", tmp.path().join("infra").to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("No matches found in file"))
        .stderr(predicate::str::contains("main.tf"));
}

#[test]
fn dir_mode_honours_config_exclusions() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());
    let cfg = tmp.path().join("settings.toml");
    write_file(
        &cfg,
        &format!(
            "dir = \"{}\"\nexclude = [\"modules\"]\n",
            tmp.path().join("infra").display()
        ),
    );

    report_tfvars(tmp.path())
        .args(["--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout("-var region='us-east-1'\n        ~> string value only (AWS region)\n");
}

#[test]
fn missing_directory_fails() {
    let tmp = tempdir().unwrap();

    report_tfvars(tmp.path())
        .args(["--dir", tmp.path().join("absent").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("directory does not exist"));
}

#[test]
fn quiet_log_level_hides_informational_messages() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    report_tfvars(tmp.path())
        .args(["--dir", tmp.path().join("infra").to_str().unwrap()])
        .args(["--log-level", "error"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
