use std::{fs, path::Path};

use stackma::{
    Config,
    error::RunError,
    runner::{output_path_for, run_file},
};
use tempfile::tempdir;

#[test]
fn output_path_keeps_the_program_number() {
    let path = output_path_for(Path::new("programs/input-042.txt"), Path::new("out")).unwrap();
    assert_eq!(path, Path::new("out/output-042.txt"));
}

#[test]
fn badly_named_inputs_are_rejected() {
    for name in ["program.txt", "input-1.txt", "input-abc.txt", "input-001.md"] {
        let result = output_path_for(Path::new(name), Path::new("out"));
        assert!(matches!(result, Err(RunError::InvalidInputName { .. })),
                "{name} should be rejected");
    }
}

#[test]
fn run_file_writes_one_value_per_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input-007.txt");
    fs::write(&input, "1 2 +\n\"done\" [1, 2]\n").unwrap();

    let output_dir = dir.path().join("nested").join("output");
    let output = run_file(&input, &output_dir, &Config::default()).unwrap();

    assert_eq!(output, output_dir.join("output-007.txt"));
    assert_eq!(fs::read_to_string(output).unwrap(), "3\n\"done\"\n[1, 2]\n");
}

#[test]
fn run_file_writes_nothing_for_a_failing_program() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input-008.txt");
    fs::write(&input, "1 +").unwrap();

    let output_dir = dir.path().join("output");
    assert!(run_file(&input, &output_dir, &Config::default()).is_err());
    assert!(!output_dir.join("output-008.txt").exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input-009.txt");

    let error = run_file(&input, dir.path(), &Config::default()).unwrap_err();
    assert!(matches!(error.downcast_ref::<RunError>(), Some(RunError::Io { .. })));
}
