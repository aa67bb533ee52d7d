#![allow(dead_code)]
use assert_cmd::Command;
use assert_fs::{TempDir, prelude::*};

pub const GREETING: &str = "Hello, World! It's great.";

/// Builds a fixture tree:
/// root/
///   files/input/file1.txt  (two sentences)
///   files/input/file2.txt  (empty)
///   (file3.txt deliberately absent)
pub fn corpus() -> TempDir {
    let td = TempDir::new().unwrap();
    let input = td.child("files").child("input");
    input.create_dir_all().unwrap();
    input.child("file1.txt").write_str(GREETING).unwrap();
    input.child("file2.txt").touch().unwrap();
    td
}

/// The binary, run inside `dir` with a clean configuration environment.
pub fn token_batch(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("token-batch");
    cmd.current_dir(dir)
        .env_remove("INPUT_PATH")
        .env_remove("OUTPUT_PATH")
        .env_remove("FILE_NAMES")
        .env_remove("TOKENIZER_TYPE")
        .env_remove("RUST_LOG");
    cmd
}
