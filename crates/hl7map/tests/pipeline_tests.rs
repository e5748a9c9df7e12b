use std::fs;
use std::path::Path;

use hl7map::pipeline::Staged;
use hl7map::{process_dir, process_file, Naming, PipelineConfig, PipelineError};

const ADT: &str = "MSH|^~\\&|SRC|FAC|DST|FAC|202501010000||ADT^A01|CTRL1|P|2.5\rPID|1||42^^^FAC^MR||Doe^Jane";
const ACK: &str = "MSH|^~\\&|SRC|FAC|DST|FAC|202501010000||ACK|CTRL2|P|2.5\rMSA|AA|CTRL1";

fn staged_files(dir: &Path) -> Result<Vec<String>, std::io::Error> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[test]
fn test_process_file_stages_and_removes_source() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempfile::tempdir()?;
    let staging = tempfile::tempdir()?;
    let input = source.path().join("adt.hl7");
    fs::write(&input, ADT)?;

    let config = PipelineConfig::new(staging.path());
    let output = process_file(&input, &config)?;

    assert!(!input.exists());
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    assert!(name.ends_with("_CTRL1.json"), "unexpected name {name}");

    let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(
        document.pointer("/PID/PATIENT_NAME/FAMILY_NAME"),
        Some(&serde_json::Value::from("Doe"))
    );
    Ok(())
}

#[test]
fn test_keep_source_and_short_names() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempfile::tempdir()?;
    let staging = tempfile::tempdir()?;
    let input = source.path().join("ack.hl7");
    fs::write(&input, ACK)?;

    let config = PipelineConfig {
        naming: Naming::Short,
        keep_source: true,
        ..PipelineConfig::new(staging.path())
    };
    let output = process_file(&input, &config)?;

    assert!(input.exists());
    let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(output)?)?;
    assert_eq!(
        document.pointer("/MSA/MSA_2"),
        Some(&serde_json::Value::from("CTRL1"))
    );
    Ok(())
}

#[test]
fn test_failed_conversion_keeps_source() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempfile::tempdir()?;
    let staging = tempfile::tempdir()?;
    let input = source.path().join("broken.hl7");
    fs::write(&input, "PID|1||42")?;

    let result = process_file(&input, &PipelineConfig::new(staging.path()));

    assert!(matches!(result, Err(PipelineError::Convert { .. })));
    assert!(input.exists());
    assert!(staged_files(staging.path())?.is_empty());
    Ok(())
}

#[test]
fn test_failed_write_keeps_source() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempfile::tempdir()?;
    let input = source.path().join("adt.hl7");
    fs::write(&input, ADT)?;
    let blocker = source.path().join("not_a_dir");
    fs::write(&blocker, "")?;
    let staging = blocker.join("staging");

    let result = process_file(&input, &PipelineConfig::new(&staging));

    let err = match result {
        Err(err @ PipelineError::Write { .. }) => err,
        other => return Err(format!("expected a write failure, got {other:?}").into()),
    };
    assert_eq!(err.path().parent(), Some(staging.as_path()));
    let name = err
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    assert!(name.ends_with("_CTRL1.json"), "unexpected name {name}");
    assert!(input.exists());
    assert_eq!(fs::read_to_string(&input)?, ADT);
    Ok(())
}

#[test]
fn test_process_dir_continues_after_failures() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempfile::tempdir()?;
    let staging = tempfile::tempdir()?;
    fs::write(source.path().join("1_adt.hl7"), ADT)?;
    fs::write(source.path().join("2_bad.hl7"), "not hl7")?;
    fs::write(source.path().join("3_ack.hl7"), ACK)?;
    fs::create_dir(source.path().join("nested"))?;

    let report = process_dir(source.path(), &PipelineConfig::new(staging.path()))?;

    assert!(!report.is_success());
    let staged: Vec<_> = report
        .staged
        .iter()
        .filter_map(|Staged { source, .. }| source.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(staged, vec!["1_adt.hl7", "3_ack.hl7"]);
    assert_eq!(report.failed.len(), 1);
    assert!(report
        .failed
        .iter()
        .all(|err| err.path().ends_with("2_bad.hl7")));

    assert_eq!(staged_files(source.path())?, vec!["2_bad.hl7", "nested"]);
    assert_eq!(staged_files(staging.path())?.len(), 2);
    Ok(())
}

#[test]
fn test_missing_source_dir_is_fatal() {
    let config = PipelineConfig::new("unused");
    let result = process_dir(Path::new("/nonexistent/hl7map/source"), &config);
    assert!(matches!(result, Err(PipelineError::Read { .. })));
}
