use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("newsception-ml").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn normalize_command_prints_ascii_form() {
    let mut cmd = Command::cargo_bin("newsception-ml").expect("binary exists");
    cmd.args(["normalize", "--ascii", "--text", "Check http://x.co NOW!!"])
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout("check  now\n");
}

#[test]
fn analyze_command_uses_lexicon_backend() {
    let mut cmd = Command::cargo_bin("newsception-ml").expect("binary exists");
    cmd.args(["analyze", "--text", "I love this!"])
        .env("MODEL_BACKEND", "lexicon")
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout("\"Very Positive\"\n");
}
