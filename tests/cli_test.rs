use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("carwash"));
    cmd.arg("tests/fixtures/orders.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "order,prewash,dry,wax,price,phases,revenue",
        ))
        .stdout(predicate::str::contains(
            "1,true,true,true,8.70,Idle>Charging>HandPrewash>Rinsing>Soaping>Rollers>HandDrying>Waxing>Idle,8.70",
        ))
        .stdout(predicate::str::contains(
            "2,false,false,false,5.00,Idle>Charging>Rinsing>Soaping>Rollers>AutoDrying>Idle,13.70",
        ))
        // Order 3 asks for wax without hand drying
        .stdout(predicate::str::contains("3,false,false,true").not())
        .stderr(predicate::str::contains(
            "Order 3 rejected: waxing requires hand-drying",
        ))
        .stdout(predicate::str::contains(
            "4,true,false,false,6.50,Idle>Charging>HandPrewash>Rinsing>Soaping>Rollers>AutoDrying>Idle,20.20",
        ));

    Ok(())
}

#[test]
fn test_single_order_from_flags() {
    let mut cmd = Command::new(cargo_bin!("carwash"));
    cmd.args(["--dry", "--wax"]);

    cmd.assert().success().stdout(predicate::str::contains(
        "1,false,true,true,7.20,Idle>Charging>Rinsing>Soaping>Rollers>HandDrying>Waxing>Idle,7.20",
    ));
}

#[test]
fn test_single_order_rejected_from_flags() {
    let mut cmd = Command::new(cargo_bin!("carwash"));
    cmd.arg("--wax");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Order 1 rejected"));
}

#[test]
fn test_verbose_prints_phases_and_status() {
    let mut cmd = Command::new(cargo_bin!("carwash"));
    cmd.args(["--prewash", "--verbose"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("-> Phase: 2 - Hand prewash"))
        .stderr(predicate::str::contains("-> Phase: 6 - Automatic drying"))
        .stderr(predicate::str::contains("Revenue: 6.50 €"))
        .stderr(predicate::str::contains("Busy: false"));
}

#[test]
fn test_json_format() {
    let output = Command::new(cargo_bin!("carwash"))
        .arg("tests/fixtures/orders.csv")
        .args(["--format", "json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let reports = reports.as_array().expect("expected an array");
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["order"], 1);
    assert_eq!(reports[0]["price"], "8.70");
    assert_eq!(reports[0]["options"]["waxed"], true);
    assert_eq!(reports[2]["revenue"], "20.20");
    // Phases are reported by their numeric code
    assert_eq!(
        reports[1]["phases"],
        serde_json::json!([0, 1, 3, 4, 5, 6, 0])
    );
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("carwash"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
