use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_lists_commands() {
    let output = xtask("help");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
    assert!(stderr.contains("catalog-coverage"));
}

#[test]
fn builtin_catalog_has_no_unchecked_active_categories() {
    let output = xtask("catalog-coverage");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("built-in catalog 1.0.0"));
    assert!(stdout.contains("categories without a checker: [Accessibility]"));
}

#[test]
fn unknown_command_fails() {
    assert!(!xtask("frobnicate").status.success());
}
