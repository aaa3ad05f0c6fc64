use assert_cmd::Command;

fn cli() -> Command {
    let workdir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("courses-cli").unwrap();
    cmd.current_dir(&workdir)
        .env_remove("MONGO_URI")
        .env_remove("COURSES_DATABASE__URI")
        .env_remove("COURSES_ENV")
        .env("COURSES_CONFIG_DIR", workdir.join("courses-cli-no-config"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    let output = cli().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("db"));
}

#[test]
fn db_ping_without_uri_fails() {
    let output = cli().args(["db", "ping"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("MONGO_URI"));
}

#[test]
fn unknown_environment_fails_fast() {
    let output = cli()
        .env("COURSES_ENV", "qa")
        .args(["db", "ping"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unsupported environment"));
}
