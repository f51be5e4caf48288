//! Integration tests for trajectory file persistence.

use driftsim::errors::StorageError;
use driftsim::simulation::{run_replicates, simulate, DriftParameters};
use driftsim::storage::{read_replicates, read_trajectory, write_replicates, write_trajectory};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_trajectory_file_format() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("trajectory.tsv");

    let params = DriftParameters::new(10, 5, 4).unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let trajectory = simulate(&params, &mut rng);

    write_trajectory(&path, &trajectory).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    // Single header column, one row per generation, no index column,
    // no quoting
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "x");
    assert!(!contents.contains('"'));
    assert!(!contents.contains('\t'));
    for (line, &count) in lines[1..].iter().zip(trajectory.counts()) {
        assert_eq!(line.parse::<u64>().unwrap(), count);
    }
}

#[test]
fn test_trajectory_roundtrip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("roundtrip.tsv");

    let params = DriftParameters::new(50, 100, 20).unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let trajectory = simulate(&params, &mut rng);

    write_trajectory(&path, &trajectory).unwrap();
    let loaded = read_trajectory(&path).unwrap();

    assert_eq!(loaded, trajectory.counts());
}

#[test]
fn test_replicates_roundtrip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("replicates.tsv");

    let params = DriftParameters::new(20, 30, 10).unwrap();
    let trajectories = run_replicates(&params, 3, Some(5));

    write_replicates(&path, &trajectories).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("x1\tx2\tx3\n"));

    let loaded = read_replicates(&path).unwrap();
    assert_eq!(loaded.len(), 3);
    for (column, trajectory) in loaded.iter().zip(&trajectories) {
        assert_eq!(column, trajectory.counts());
    }
}

#[test]
fn test_write_replicates_rejects_empty() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("empty.tsv");

    assert!(matches!(
        write_replicates(&path, &[]),
        Err(StorageError::Empty)
    ));
}

#[test]
fn test_read_rejects_header_only_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("header_only.tsv");
    fs::write(&path, "x\n").unwrap();

    assert!(matches!(read_trajectory(&path), Err(StorageError::Empty)));
}

#[test]
fn test_read_rejects_non_numeric_counts() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("garbage.tsv");
    fs::write(&path, "x\n4\nabc\n6\n").unwrap();

    match read_trajectory(&path) {
        Err(StorageError::Parse { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "abc");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_read_replicates_rejects_ragged_rows() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("ragged.tsv");
    fs::write(&path, "x1\tx2\n4\t5\n6\n").unwrap();

    match read_replicates(&path) {
        Err(StorageError::ColumnMismatch {
            line,
            expected,
            found,
        }) => {
            assert_eq!(line, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected column mismatch, got {other:?}"),
    }
}

#[test]
fn test_read_missing_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("does_not_exist.tsv");

    assert!(read_trajectory(&path).is_err());
}
