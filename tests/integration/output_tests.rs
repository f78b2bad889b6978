use dupesieve::duplicates::Grouper;
use dupesieve::error::ExitCode;
use dupesieve::output::{JsonOutput, TextOutput};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_text_output_from_scan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"twin").unwrap();
    fs::write(dir.path().join("b.txt"), b"twin").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    let output = TextOutput::new(&groups, &summary);
    let text = output.to_string().unwrap();

    assert!(text.contains("Group 1"));
    assert!(text.contains("a.txt"));
    assert!(text.contains("b.txt"));
    assert!(text.contains("Files scanned"));
}

#[test]
fn test_json_output_from_scan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"twin").unwrap();
    fs::write(dir.path().join("b.txt"), b"twin").unwrap();
    fs::write(dir.path().join("c.txt"), b"odd one").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    let output = JsonOutput::new(&groups, &summary, ExitCode::Success);
    let json = output.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let duplicates = parsed.get("duplicates").unwrap().as_array().unwrap();
    assert_eq!(duplicates.len(), 1);

    let files = duplicates[0].get("files").unwrap().as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files
        .iter()
        .any(|f| f.as_str().unwrap().ends_with("a.txt")));

    let summary_json = parsed.get("summary").unwrap();
    assert_eq!(
        summary_json.get("total_files").unwrap().as_u64().unwrap(),
        3
    );
    assert_eq!(
        summary_json
            .get("exit_code_name")
            .unwrap()
            .as_str()
            .unwrap(),
        "DS000"
    );
}

#[test]
fn test_json_fingerprint_in_range() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.bin"), [200u8, 201u8]).unwrap();
    fs::write(dir.path().join("b.bin"), [200u8, 201u8]).unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    let output = JsonOutput::new(&groups, &summary, ExitCode::Success);
    let parsed: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

    let fingerprint = parsed.get("duplicates").unwrap().as_array().unwrap()[0]
        .get("fingerprint")
        .unwrap()
        .as_u64()
        .unwrap();

    // 200 + 201 = 401, so the bucket is 1.
    assert_eq!(fingerprint, 1);
}
