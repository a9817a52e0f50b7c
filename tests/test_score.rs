use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use serde_json::Value;

// c is concluded by a1 from p; a1 is undercut once
const SNAPSHOT: &str = r#"{
    "claims": [
        {"id": "p", "text": "the premise", "prior": 0.8},
        {"id": "c", "text": "the conclusion"},
        {"id": "q"}
    ],
    "arguments": [
        {"id": "a1", "conclusion": "c", "premises": ["p"]}
    ],
    "edges": [
        {"from": "u", "kind": "undercut", "target_argument": "a1"}
    ]
}"#;

fn score_command(
    snapshot: &str,
    additional_args: &[&str],
) -> Result<(Command, NamedTempFile), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_snapshot.json")?;
    file.write_str(snapshot)?;
    let mut cmd = Command::cargo_bin("dialectica")?;
    cmd.arg("score")
        .arg("--logging-level")
        .arg("off")
        .arg("-f")
        .arg(file.path())
        .args(additional_args);
    Ok((cmd, file))
}

fn run_score(additional_args: &[&str]) -> Result<Value, Box<dyn std::error::Error>> {
    let (mut cmd, file) = score_command(SNAPSHOT, additional_args)?;
    let output = cmd.assert().success().get_output().stdout.clone();
    file.close()?;
    Ok(serde_json::from_slice(&output)?)
}

fn item<'a>(report: &'a Value, id: &str) -> Option<&'a Value> {
    report["items"]
        .as_array()
        .and_then(|items| items.iter().find(|i| i["id"] == id))
}

fn score_of(report: &Value, id: &str) -> f64 {
    item(report, id)
        .and_then(|i| i["score"].as_f64())
        .unwrap_or(f64::NAN)
}

#[test]
fn test_default_scores() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_score(&[])?;
    assert_eq!("min", report["mode"]);
    assert_eq!(0.7, report["threshold"].as_f64().unwrap());
    assert_eq!(3, report["items"].as_array().unwrap().len());
    assert!((score_of(&report, "p") - 0.8).abs() < 1e-9);
    assert!((score_of(&report, "c") - 0.48).abs() < 1e-9);
    assert!((score_of(&report, "q") - 0.5).abs() < 1e-9);
    assert_eq!(true, item(&report, "p").unwrap()["accepted"]);
    assert_eq!(false, item(&report, "c").unwrap()["accepted"]);
    assert_eq!("the conclusion", item(&report, "c").unwrap()["text"]);
    assert!(item(&report, "c").unwrap().get("explanation").is_none());
    Ok(())
}

#[test]
fn test_threshold_and_hedge() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_score(&["--threshold", "0.4", "--undercut-hedge", "0.5"])?;
    assert!((score_of(&report, "c") - 0.4).abs() < 1e-9);
    assert_eq!(true, item(&report, "c").unwrap()["accepted"]);
    Ok(())
}

#[test]
fn test_ds_mode() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_score(&["--mode", "ds"])?;
    assert_eq!("ds", report["mode"]);
    let c = item(&report, "c").unwrap();
    assert!((c["belief"].as_f64().unwrap() - 0.48).abs() < 1e-9);
    assert!((c["plausibility"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_product_alias() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_score(&["--mode", "product"])?;
    assert_eq!("prod", report["mode"]);
    Ok(())
}

#[test]
fn test_only() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_score(&["--only", "c,unknown"])?;
    let items = report["items"].as_array().unwrap();
    assert_eq!(1, items.len());
    assert_eq!("c", items[0]["id"]);
    assert!((score_of(&report, "c") - 0.48).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_explain() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_score(&["--explain"])?;
    assert_eq!("leaf", item(&report, "p").unwrap()["explanation"]["kind"]);
    assert_eq!("lines", item(&report, "c").unwrap()["explanation"]["kind"]);
    Ok(())
}

#[test]
fn test_invalid_parameters() -> Result<(), Box<dyn std::error::Error>> {
    for args in [
        vec!["--mode", "max"],
        vec!["--threshold", "1.5"],
        vec!["--prior", "1.2"],
        vec!["--cq-penalty", "abc"],
    ] {
        let (mut cmd, file) = score_command(SNAPSHOT, &args)?;
        cmd.assert().failure();
        file.close()?;
    }
    Ok(())
}

#[test]
fn test_invalid_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, file) = score_command("{\"claims\": 3}", &[])?;
    cmd.assert().failure();
    file.close()?;
    Ok(())
}
