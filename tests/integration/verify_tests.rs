use dupesieve::duplicates::Grouper;
use dupesieve::verify::{verify_groups, VerifyError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Build the canonical test tree: two duplicate pairs and one unique file.
fn create_sample_tree(root: &Path) {
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();

    fs::write(root.join("a/one.txt"), b"alpha").unwrap();
    fs::write(root.join("a/two.txt"), b"alpha").unwrap();
    fs::write(root.join("b/three.txt"), b"beta").unwrap();
    fs::write(root.join("b/four.txt"), b"beta").unwrap();
    fs::write(root.join("b/unique.txt"), b"gamma").unwrap();
}

#[test]
fn test_verify_matching_fixture() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();
    create_sample_tree(&root);

    let fixture = dir.path().join("_results");
    fs::write(&fixture, "a/one.txt:a/two.txt\nb/three.txt:b/four.txt\n").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, _) = grouper.group_tree(&root).unwrap();

    let outcome = verify_groups(&groups, &root, &fixture).unwrap();

    assert!(outcome.matched);
    assert_eq!(outcome.expected_pairs, 2);
    assert_eq!(outcome.actual_pairs, 2);
}

#[test]
fn test_verify_is_order_insensitive() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();
    create_sample_tree(&root);

    // Lines and in-line paths deliberately shuffled.
    let fixture = dir.path().join("_results");
    fs::write(&fixture, "b/four.txt:b/three.txt\na/two.txt:a/one.txt\n").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, _) = grouper.group_tree(&root).unwrap();

    let outcome = verify_groups(&groups, &root, &fixture).unwrap();

    assert!(outcome.matched);
}

#[test]
fn test_verify_three_way_group_expands_to_pairs() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();

    fs::write(root.join("x.txt"), b"same").unwrap();
    fs::write(root.join("y.txt"), b"same").unwrap();
    fs::write(root.join("z.txt"), b"same").unwrap();

    let fixture = dir.path().join("_results");
    fs::write(&fixture, "x.txt:y.txt:z.txt\n").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, _) = grouper.group_tree(&root).unwrap();

    let outcome = verify_groups(&groups, &root, &fixture).unwrap();

    assert!(outcome.matched);
    assert_eq!(outcome.actual_pairs, 3);
}

#[test]
fn test_verify_detects_missing_group() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();

    fs::write(root.join("one.txt"), b"alpha").unwrap();
    fs::write(root.join("two.txt"), b"alpha").unwrap();

    // Fixture claims a second group that the tree does not contain.
    let fixture = dir.path().join("_results");
    fs::write(&fixture, "one.txt:two.txt\nghost1.txt:ghost2.txt\n").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, _) = grouper.group_tree(&root).unwrap();

    let outcome = verify_groups(&groups, &root, &fixture).unwrap();

    assert!(!outcome.matched);
    assert_eq!(outcome.missing.len(), 1);
    assert!(outcome.unexpected.is_empty());
}

#[test]
fn test_verify_detects_unexpected_group() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();

    fs::write(root.join("one.txt"), b"alpha").unwrap();
    fs::write(root.join("two.txt"), b"alpha").unwrap();

    // Fixture expects nothing at all.
    let fixture = dir.path().join("_results");
    fs::write(&fixture, "\n").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, _) = grouper.group_tree(&root).unwrap();

    let outcome = verify_groups(&groups, &root, &fixture).unwrap();

    assert!(!outcome.matched);
    assert!(outcome.missing.is_empty());
    assert_eq!(outcome.unexpected.len(), 1);
}

#[test]
fn test_verify_fixture_tolerates_repeats_and_singletons() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();

    fs::write(root.join("one.txt"), b"alpha").unwrap();
    fs::write(root.join("two.txt"), b"alpha").unwrap();
    fs::write(root.join("lonely.txt"), b"beta").unwrap();

    // A repeated token and a singleton line must not invent extra pairs.
    let fixture = dir.path().join("_results");
    fs::write(&fixture, "one.txt:two.txt:one.txt\nlonely.txt\n").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, _) = grouper.group_tree(&root).unwrap();

    let outcome = verify_groups(&groups, &root, &fixture).unwrap();

    assert!(outcome.matched);
    assert_eq!(outcome.expected_pairs, 1);
}

#[test]
fn test_verify_missing_fixture_is_error() {
    let dir = tempdir().unwrap();

    let result = verify_groups(&[], dir.path(), &dir.path().join("does_not_exist"));

    assert!(matches!(result, Err(VerifyError::Fixture { .. })));
}
