use assert_fs::prelude::*;
use predicates::prelude::*;

fn invoice_roi(data_dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("invoice-roi");
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn report_from_input_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("input.yaml");
    input_file
        .write_str("scenario_name: Pilot\nmonthly_invoice_volume: 1000\nnum_ap_staff: 2\navg_hours_per_invoice: 0.17\nhourly_wage: 25\nerror_rate_manual: 0.5\nerror_cost: 100\ntime_horizon_months: 12\none_time_implementation_cost: 5000\n")
        .unwrap();
    let report_file = temp.child("report.txt");

    invoice_roi(temp.path())
        .args(["report", "-i"])
        .arg(input_file.path())
        .args(["-e", "cfo@example.com", "-o"])
        .arg(report_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ROI report written to"));

    report_file.assert(predicate::str::contains("Invoicing ROI Report"));
    report_file.assert(predicate::str::contains("Requested by: cfo@example.com"));
    report_file.assert(predicate::str::contains("Scenario: Pilot"));
    report_file.assert(predicate::str::contains("payback_months: 0.52"));
}

#[test]
fn report_from_saved_scenario() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("input.yaml");
    input_file
        .write_str("monthly_invoice_volume: 100\nnum_ap_staff: 1\navg_hours_per_invoice: 0.5\nhourly_wage: 20\n")
        .unwrap();

    invoice_roi(temp.path())
        .args(["save", "-n", "Saved one", "-i"])
        .arg(input_file.path())
        .assert()
        .success();

    let listing = invoice_roi(temp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    let summaries: serde_json::Value = serde_json::from_slice(&listing.stdout).unwrap();
    let id = summaries[0]["id"].as_str().unwrap().to_string();

    let report_file = temp.child("saved.txt");
    invoice_roi(temp.path())
        .args(["report", "-s", &id, "-e", "ap@example.com", "-o"])
        .arg(report_file.path())
        .assert()
        .success();

    report_file.assert(predicate::str::contains("Scenario: Saved one"));
    // 1 * 20 * 0.5 * 100 = 1000 labor, minus 20 automation, times 1.1
    report_file.assert(predicate::str::contains("monthly_savings: 1078.00"));
}

#[test]
fn report_rejects_invalid_email() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("input.yaml");
    input_file.write_str("monthly_invoice_volume: 10\n").unwrap();
    let report_file = temp.child("report.txt");

    invoice_roi(temp.path())
        .args(["report", "-e", "nobody", "-i"])
        .arg(input_file.path())
        .arg("-o")
        .arg(report_file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid requester email"));

    report_file.assert(predicate::path::missing());
}

#[test]
fn report_for_unknown_scenario_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    invoice_roi(temp.path())
        .args(["report", "-s", "missing-id", "-e", "a@b.c", "-o"])
        .arg(temp.child("r.txt").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario not found: missing-id"));
}
