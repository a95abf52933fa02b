use crate::error::{ErrorKind, Result};
use encoding_rs::Encoding;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of scanning a single file. A failed file carries its
/// classification in `errors` and no matches; the run always continues with
/// the next file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub matches: Vec<String>,
    pub errors: Vec<ErrorKind>,
}

impl FileResult {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            matches: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Compiles the query into a regex. Invalid patterns are fatal; no search
/// can proceed without one.
pub fn compile(query: &str) -> Result<Regex> {
    Ok(Regex::new(query)?)
}

/// Reads `path` whole, decodes it, and collects every line that matches
/// `pattern` after the line-head trim, in file order.
///
/// Decoding is all-or-nothing: malformed bytes fail the entire file with a
/// single `Decode` error rather than salvaging earlier lines.
pub fn scan_file(
    path: &Path,
    pattern: &Regex,
    encoding: Option<&str>,
    ignore_head: usize,
) -> FileResult {
    let mut result = FileResult::new(path);
    let text = match read_decoded(path, encoding) {
        Ok(text) => text,
        Err(kind) => {
            result.errors.push(kind);
            return result;
        }
    };
    for line in text.lines() {
        let trimmed = trim_linehead(line, ignore_head);
        if pattern.is_match(trimmed) {
            result.matches.push(trimmed.to_string());
        }
    }
    result
}

fn read_decoded(path: &Path, encoding: Option<&str>) -> std::result::Result<String, ErrorKind> {
    let encoding = match encoding {
        Some(label) => {
            Encoding::for_label(label.as_bytes()).ok_or(ErrorKind::InvalidConfig)?
        }
        None => encoding_rs::UTF_8,
    };
    let bytes = fs::read(path).map_err(|e| ErrorKind::classify_io(&e))?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(ErrorKind::Decode);
    }
    Ok(text.into_owned())
}

/// Drops the first `ignore_head` characters of a line. A line shorter than
/// the trim width becomes empty, never an error.
fn trim_linehead(line: &str, ignore_head: usize) -> &str {
    match line.char_indices().nth(ignore_head) {
        Some((idx, _)) => &line[idx..],
        None if ignore_head == 0 => line,
        None => "",
    }
}
