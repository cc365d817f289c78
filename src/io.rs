//! File helpers shared by the tools.
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Create the parent directory of `path` if it does not exist.
pub fn create_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("creating {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write one item per line, creating parent directories if needed.
/// Returns the number of written lines.
pub fn write_lines<I, T>(dst: &Path, lines: I) -> Result<usize, Error>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    create_parent_dir(dst)?;
    let mut out = BufWriter::new(File::create(dst)?);
    let mut nb_lines = 0;
    for line in lines {
        writeln!(out, "{}", line)?;
        nb_lines += 1;
    }
    out.flush()?;
    Ok(nb_lines)
}

/// Read a file, trimming every line.
pub fn read_lines(src: &Path) -> Result<Vec<String>, Error> {
    let f = BufReader::new(File::open(src)?);
    f.lines()
        .map(|line| -> Result<String, Error> { Ok(line?.trim().to_string()) })
        .collect()
}
