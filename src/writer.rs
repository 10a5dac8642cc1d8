use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::SplitError;

/// Write `lines` to `path`, one per line, replacing any previous content.
///
/// Missing parent directories are created first.
pub fn write_manifest<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), SplitError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).map_err(|e| SplitError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| SplitError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| SplitError::io(path, e))?;
    }
    writer.flush().map_err(|e| SplitError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn creates_parents_and_terminates_lines() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("1_4").join("labeled.txt");
        write_manifest(&path, &["one", "two"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn overwrites_and_is_repeatable() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("all").join("labeled.txt");
        write_manifest(&path, &["a", "b", "c"]).unwrap();
        write_manifest(&path, &["z"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "z\n");
    }

    #[test]
    fn empty_sequence_writes_empty_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("test.txt");
        write_manifest::<&str>(&path, &[]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parent_that_is_a_file_fails_with_path() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("small_1_32");
        fs::write(&blocker, b"not a dir").unwrap();

        let err = write_manifest(&blocker.join("labeled.txt"), &["x"]).unwrap_err();
        match err {
            SplitError::Io { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
