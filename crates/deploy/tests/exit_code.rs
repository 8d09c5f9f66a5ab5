use std::process::Command;

#[test]
fn missing_config_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_deploy"))
        .arg("--config")
        .arg(dir.path().join("deploy.toml"))
        .arg("--node-url")
        .arg("http://127.0.0.1:1")
        .env_remove("DEPLOY_PROFILE")
        .env_remove("PRIVATE_KEY")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: I/O error while reading"));
    assert!(!String::from_utf8(output.stdout).unwrap().contains("deployed to:"));
}
