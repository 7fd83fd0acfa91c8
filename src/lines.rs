//! Lazy, failure-tolerant line reading.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. A file that cannot be opened,
//! read or decoded as UTF-8 does not abort a scan. The reader yields one
//! empty line in place of whatever it could not read and then stops. A
//! legitimately empty file yields no lines at all.

use log::debug;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Iterator over the whitespace-trimmed lines of one file.
///
/// The file is opened on the first call to `next` and closed as soon as the
/// reader is exhausted or fails.
#[derive(Debug)]
pub struct LineReader {
    path: PathBuf,
    state: State,
}

#[derive(Debug)]
enum State {
    Unopened,
    Reading {
        reader: BufReader<File>,
        /// Undecoded lines split out of the last chunk read.
        pending: VecDeque<Vec<u8>>,
    },
    Done,
}

impl LineReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: State::Unopened,
        }
    }

    fn fail(&mut self, err: io::Error) -> Option<String> {
        debug!("treating {} as blank: {err}", self.path.display());
        self.state = State::Done;
        Some(String::new())
    }
}

impl Iterator for LineReader {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match &mut self.state {
                State::Unopened => match File::open(&self.path) {
                    Ok(file) => {
                        self.state = State::Reading {
                            reader: BufReader::new(file),
                            pending: VecDeque::new(),
                        }
                    }
                    Err(err) => return self.fail(err),
                },
                State::Reading { reader, pending } => {
                    if let Some(raw) = pending.pop_front() {
                        return match String::from_utf8(raw) {
                            Ok(line) => Some(line.trim().to_string()),
                            Err(err) => {
                                self.fail(io::Error::new(io::ErrorKind::InvalidData, err))
                            }
                        };
                    }

                    let mut chunk = Vec::new();
                    match reader.read_until(b'\n', &mut chunk) {
                        Ok(0) => {
                            self.state = State::Done;
                            return None;
                        }
                        Ok(_) => pending.extend(split_line_breaks(chunk)),
                        Err(err) => return self.fail(err),
                    }
                }
                State::Done => return None,
            }
        }
    }
}

/// Split a chunk ending at `\n` (or at end of file) into lines, treating
/// `\r\n` as one break and a lone `\r` as a break of its own.
fn split_line_breaks(mut chunk: Vec<u8>) -> Vec<Vec<u8>> {
    let terminated = chunk.last() == Some(&b'\n');
    if terminated {
        chunk.pop();
        if chunk.last() == Some(&b'\r') {
            chunk.pop();
        }
    }

    let mut lines: Vec<Vec<u8>> = chunk.split(|b| *b == b'\r').map(<[u8]>::to_vec).collect();
    // a trailing `\r` at end of file closes the last line without opening another
    if !terminated && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Shorthand for [`LineReader::new`].
pub fn read_lines(path: impl Into<PathBuf>) -> LineReader {
    LineReader::new(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lines_are_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("page.html");
        fs::write(&path, "  {% extends \"base.html\" %}\r\n\tbody\n\n").unwrap();

        let lines: Vec<String> = read_lines(&path).collect();
        assert_eq!(lines, vec!["{% extends \"base.html\" %}", "body", ""]);
    }

    #[test]
    fn test_lone_carriage_returns_end_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classic.html");
        fs::write(
            &path,
            "{% extends \"base.html\" %}\r{% include \"nav.html\" %}\r",
        )
        .unwrap();

        let lines: Vec<String> = read_lines(&path).collect();
        assert_eq!(
            lines,
            vec!["{% extends \"base.html\" %}", "{% include \"nav.html\" %}"]
        );
    }

    #[test]
    fn test_mixed_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.html");
        fs::write(&path, "one\r\ntwo\rthree\n\r\nfour").unwrap();

        let lines: Vec<String> = read_lines(&path).collect();
        assert_eq!(lines, vec!["one", "two", "three", "", "four"]);
    }

    #[test]
    fn test_split_line_breaks() {
        fn split(bytes: &[u8]) -> Vec<Vec<u8>> {
            split_line_breaks(bytes.to_vec())
        }

        assert_eq!(split(b"a\r\n"), vec![b"a".to_vec()]);
        assert_eq!(split(b"a\r\r\n"), vec![b"a".to_vec(), Vec::new()]);
        assert_eq!(split(b"\n"), vec![Vec::<u8>::new()]);
        assert_eq!(split(b"a\rb\r"), vec![b"a".to_vec(), b"b".to_vec()]);
        assert_eq!(split(b"tail"), vec![b"tail".to_vec()]);
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.html");
        fs::write(&path, "").unwrap();

        assert_eq!(read_lines(&path).count(), 0);
    }

    #[test]
    fn test_missing_file_yields_single_blank() {
        let temp_dir = TempDir::new().unwrap();
        let lines: Vec<String> = read_lines(temp_dir.path().join("gone.html")).collect();
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_undecodable_file_stops_with_blank() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.html");
        let mut content = b"first\n".to_vec();
        content.extend_from_slice(&[0xff, 0xfe, 0xfd, b'\n']);
        content.extend_from_slice(b"never reached\n");
        fs::write(&path, content).unwrap();

        let lines: Vec<String> = read_lines(&path).collect();
        assert_eq!(lines, vec!["first".to_string(), String::new()]);
    }

    #[test]
    fn test_reader_is_fused_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let mut reader = read_lines(temp_dir.path().join("gone.html"));
        assert_eq!(reader.next(), Some(String::new()));
        assert_eq!(reader.next(), None);
        assert_eq!(reader.next(), None);
    }
}
