//! The state file: the cursor on the first line, then one word per line,
//! least significant first.
//!
//! ```text
//! 40
//! 8802880266606458979
//! 3
//! ```
//!
//! A missing or empty file means "start fresh". Anything unparseable is
//! fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use times_core::checkpoint::Checkpoint;
use times_core::constants::WORD_MASK;
use times_core::error::TimesError;

use crate::atomic;

/// Write the cursor and words in state-file format.
pub fn encode<W: Write>(out: &mut W, cursor: u64, words: &[u64]) -> io::Result<()> {
    writeln!(out, "{cursor}")?;
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Parse a state file. `path` is only used in error messages.
///
/// Trailing blank lines are ignored; blank lines before the last record
/// are not.
pub fn decode<R: BufRead>(path: &Path, reader: R) -> Result<Checkpoint, TimesError> {
    let mut cursor = None;
    let mut words = Vec::new();
    let mut blank_line = None;

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                TimesError::malformed(path, number, "line is not valid UTF-8")
            }
            _ => TimesError::io(path, e),
        })?;
        let text = line.trim();

        if text.is_empty() {
            if blank_line.is_none() {
                blank_line = Some(number);
            }
            continue;
        }
        if let Some(blank) = blank_line {
            return Err(TimesError::malformed(path, blank, "unexpected blank line"));
        }

        let value: u64 = text.parse().map_err(|_| {
            TimesError::malformed(path, number, format!("not an unsigned integer: {text:?}"))
        })?;

        if cursor.is_none() {
            cursor = Some(value);
        } else if value > WORD_MASK {
            return Err(TimesError::malformed(
                path,
                number,
                format!("word {value} does not fit in 63 bits"),
            ));
        } else {
            words.push(value);
        }
    }

    let Some(cursor) = cursor else {
        return Ok(Checkpoint::fresh());
    };
    if words.is_empty() && cursor != 0 {
        return Err(TimesError::malformed(
            path,
            1,
            format!("cursor {cursor} has no words"),
        ));
    }
    Ok(Checkpoint { cursor, words })
}

/// Load the state file, treating a missing file as a fresh start.
pub fn read(path: &Path) -> Result<Checkpoint, TimesError> {
    match File::open(path) {
        Ok(file) => decode(path, BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Checkpoint::fresh()),
        Err(e) => Err(TimesError::io(path, e)),
    }
}

/// Atomically replace the state file.
pub fn write(path: &Path, cursor: u64, words: &[u64]) -> Result<(), TimesError> {
    atomic::replace(path, |out| encode(out, cursor, words))
}
