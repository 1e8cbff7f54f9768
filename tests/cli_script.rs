use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("toll_tax_cli").unwrap();
    cmd.env("TOLL_TAX_CLI_SCRIPT", "1")
        .env("TOLL_TAX_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_reports_counters() {
    let home = TempDir::new().unwrap();
    let input = "1\n2\nBK1\nStreet\nHonda\n900\nno\n\
                 1\n3\nHV42\nHauler\nVolvo\n150000\nyes\n\
                 2\n3\n4\n5\nexit\n";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Vehicle passed without paying tax."))
        .stdout(contains("Tax paid successfully."))
        .stdout(contains("Total Vehicles: 2"))
        .stdout(contains("Total Tax Paying Vehicles: 1"))
        .stdout(contains("Total Non-Tax Paying Vehicles: 1"))
        .stdout(contains("Total Tax Collected: $4"))
        .stdout(contains("Thank you for using the Toll Vehicle Tax Management System!"));
}

#[test]
fn script_mode_uses_configured_currency() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "currency_symbol": "EUR " }"#,
    )
    .unwrap();

    script_command(&home)
        .write_stdin("add car\nAB123\nSedan\nToyota\n20000\nyes\ncollected\n")
        .assert()
        .success()
        .stdout(contains("Total Tax Collected: EUR 2"));
}

#[test]
fn summary_json_is_machine_readable() {
    let home = TempDir::new().unwrap();

    let output = script_command(&home)
        .write_stdin("add bike\nB1\nScooter\nVespa\n10\nyes\nsummary --json\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('{').expect("json object in output");
    let end = stdout.rfind('}').expect("json object end");
    let value: serde_json::Value = serde_json::from_str(&stdout[start..=end]).unwrap();
    assert_eq!(value["total_vehicles"], 1);
    assert_eq!(value["total_tax_collected"], 1.0);
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("totl\n")
        .assert()
        .success()
        .stdout(contains("Invalid option `totl`"))
        .stdout(contains("Suggestion: `total`?"));
}

#[test]
fn config_changes_persist_between_runs() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("config set currency \"EUR \"\n")
        .assert()
        .success()
        .stdout(contains("Configuration updated."));
    assert!(home.path().join("config.json").exists());

    script_command(&home)
        .write_stdin("config show\ncollected\n")
        .assert()
        .success()
        .stdout(contains("Currency symbol: \"EUR \""))
        .stdout(contains("Total Tax Collected: EUR 0"));
}
