use dupesieve::duplicates::{Grouper, GrouperConfig};
use dupesieve::scanner::WalkerConfig;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_group_empty_directory() {
    let dir = tempdir().unwrap();
    let grouper = Grouper::with_defaults();

    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.duplicate_groups, 0);
}

#[test]
fn test_group_unique_files() {
    let dir = tempdir().unwrap();

    // Create 3 unique files
    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"content a")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"content b")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"content c")
        .unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.duplicate_groups, 0);
}

#[test]
fn test_group_duplicate_files() {
    let dir = tempdir().unwrap();

    // Create 2 identical files and 1 unique
    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"duplicate")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"duplicate")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"unique")
        .unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths.len(), 2);
    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.duplicate_groups, 1);
    assert_eq!(summary.duplicate_files, 1);
}

#[test]
fn test_group_nested_directories() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("subdir");
    fs::create_dir(&sub).unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();
    File::create(sub.join("b.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths.len(), 2);
    assert_eq!(summary.total_files, 2);
}

#[test]
fn test_group_multiple_groups() {
    let dir = tempdir().unwrap();

    // Group 1: 3 files
    File::create(dir.path().join("1a.txt"))
        .unwrap()
        .write_all(b"group1")
        .unwrap();
    File::create(dir.path().join("1b.txt"))
        .unwrap()
        .write_all(b"group1")
        .unwrap();
    File::create(dir.path().join("1c.txt"))
        .unwrap()
        .write_all(b"group1")
        .unwrap();

    // Group 2: 2 files
    File::create(dir.path().join("2a.txt"))
        .unwrap()
        .write_all(b"group2")
        .unwrap();
    File::create(dir.path().join("2b.txt"))
        .unwrap()
        .write_all(b"group2")
        .unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(summary.duplicate_groups, 2);
    assert_eq!(summary.duplicate_files, 3);
}

#[test]
fn test_collision_without_duplicates() {
    let dir = tempdir().unwrap();

    // Byte values 24 and 124 share a fingerprint (both sum to 24 mod 100)
    // but hold different content, so no group may be reported.
    File::create(dir.path().join("a.bin"))
        .unwrap()
        .write_all(&[24u8])
        .unwrap();
    File::create(dir.path().join("b.bin"))
        .unwrap()
        .write_all(&[124u8])
        .unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.buckets, 1);
    assert_eq!(summary.collision_buckets, 1);
}

#[test]
fn test_two_groups_share_fingerprint() {
    let dir = tempdir().unwrap();

    // [50, 50] and [100] both sum to 0 mod 100 yet differ in content.
    File::create(dir.path().join("pair1a.bin"))
        .unwrap()
        .write_all(&[50u8, 50u8])
        .unwrap();
    File::create(dir.path().join("pair1b.bin"))
        .unwrap()
        .write_all(&[50u8, 50u8])
        .unwrap();
    File::create(dir.path().join("pair2a.bin"))
        .unwrap()
        .write_all(&[100u8])
        .unwrap();
    File::create(dir.path().join("pair2b.bin"))
        .unwrap()
        .write_all(&[100u8])
        .unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.fingerprint == 0));
    assert!(groups.iter().all(|g| g.paths.len() == 2));
    assert_eq!(summary.buckets, 1);
    assert_eq!(summary.collision_buckets, 1);
}

#[test]
fn test_group_paths_from_explicit_list() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("other");
    fs::create_dir(&sub).unwrap();

    let one = dir.path().join("one.txt");
    let two = sub.join("two.txt");
    fs::write(&one, b"same").unwrap();
    fs::write(&two, b"same").unwrap();

    let grouper = Grouper::with_defaults();
    let (groups, summary) = grouper.group_paths(vec![one.clone(), two.clone()]).unwrap();

    assert_eq!(groups.len(), 1);
    assert!(groups[0].paths.contains(&one));
    assert!(groups[0].paths.contains(&two));
    assert_eq!(summary.total_files, 2);
}

#[test]
fn test_skip_hidden_excludes_dotfiles() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("visible.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();
    File::create(dir.path().join(".hidden.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();

    let config = GrouperConfig::default().with_walker_config(WalkerConfig::new(false, true));
    let grouper = Grouper::new(config);
    let (groups, summary) = grouper.group_tree(dir.path()).unwrap();

    // The hidden twin is never seen, so no duplicates remain.
    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_io_threads_do_not_change_results() {
    let dir = tempdir().unwrap();

    for i in 0..8 {
        fs::write(dir.path().join(format!("dup{}.txt", i)), b"same bytes").unwrap();
    }
    fs::write(dir.path().join("other.txt"), b"different").unwrap();

    let single = Grouper::new(GrouperConfig::default().with_io_threads(1));
    let many = Grouper::new(GrouperConfig::default().with_io_threads(8));

    let (groups_single, _) = single.group_tree(dir.path()).unwrap();
    let (groups_many, _) = many.group_tree(dir.path()).unwrap();

    assert_eq!(groups_single.len(), 1);
    assert_eq!(groups_single.len(), groups_many.len());
    assert_eq!(groups_single[0].paths, groups_many[0].paths);
}
