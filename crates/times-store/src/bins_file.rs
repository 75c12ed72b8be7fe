//! The bins file: one counter per line, in bin order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use times_core::error::TimesError;
use times_core::histogram::Histogram;

use crate::atomic;

/// Write the counters in bins-file format.
pub fn encode<W: Write>(out: &mut W, histogram: &Histogram) -> io::Result<()> {
    for count in histogram.snapshot() {
        writeln!(out, "{count}")?;
    }
    Ok(())
}

/// Parse a bins file that must hold exactly `bin_count` counters.
pub fn decode<R: BufRead>(
    path: &Path,
    reader: R,
    bin_count: usize,
) -> Result<Histogram, TimesError> {
    let mut counts = Vec::with_capacity(bin_count);

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
            continue;
        }
        let count: u64 = text.parse().map_err(|_| {
            TimesError::malformed(path, number, format!("not an unsigned integer: {text:?}"))
        })?;
        counts.push(count);
    }

    if counts.len() != bin_count {
        return Err(TimesError::malformed(
            path,
            0,
            format!(
                "expected {bin_count} bins, found {} (was the digit count changed?)",
                counts.len()
            ),
        ));
    }
    Ok(Histogram::from_counts(counts))
}

/// Load the bins file, or `None` if it does not exist.
pub fn read(path: &Path, bin_count: usize) -> Result<Option<Histogram>, TimesError> {
    match File::open(path) {
        Ok(file) => decode(path, BufReader::new(file), bin_count).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TimesError::io(path, e)),
    }
}

/// Atomically replace the bins file.
pub fn write(path: &Path, histogram: &Histogram) -> Result<(), TimesError> {
    atomic::replace(path, |out| encode(out, histogram))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn encode_one_line_per_bin() {
        let mut hist = Histogram::new(4);
        hist.increment(1);
        hist.increment(3);
        hist.increment(3);
        let mut out = Vec::new();
        encode(&mut out, &hist).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n0\n2\n");
    }

    #[test]
    fn decode_counts() {
        let hist = decode(Path::new("bins.txt"), "0\n1\n0\n2\n".as_bytes(), 4).unwrap();
        assert_eq!(hist.snapshot(), &[0, 1, 0, 2]);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let result = decode(Path::new("bins.txt"), "1\n2\n".as_bytes(), 4);
        assert!(matches!(
            result,
            Err(TimesError::MalformedCheckpoint { line: 0, .. })
        ));
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode(Path::new("bins.txt"), "1\nx\n".as_bytes(), 2);
        assert!(matches!(
            result,
            Err(TimesError::MalformedCheckpoint { line: 2, .. })
        ));
    }

    #[test]
    fn read_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read(&dir.path().join("bins.txt"), 16).unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bins.txt");
        let hist = Histogram::from_counts(vec![5, 0, 7, 1]);
        write(&path, &hist).unwrap();
        assert_eq!(read(&path, 4).unwrap(), Some(hist));
    }
}
