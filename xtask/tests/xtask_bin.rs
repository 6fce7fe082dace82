use std::process::{Command, Output};

fn xtask(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .args(args)
        .output()
        .expect("run xtask")
}

#[test]
fn help_lists_commands() {
    let output = xtask(&["help"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("emit-schemas"));
    assert!(stderr.contains("explain-coverage"));
}

#[test]
fn every_id_and_code_is_explained() {
    let output = xtask(&["explain-coverage"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn schema_ids_name_report_and_config() {
    let output = xtask(&["print-schema-ids"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("assetpack.report.v1"));
    assert!(stdout.contains("assetpack.config.v1"));
}

#[test]
fn unknown_command_fails() {
    assert!(!xtask(&["frobnicate"]).status.success());
}
