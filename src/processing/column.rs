//! Single column extraction.
use std::io::Read;
use std::path::Path;

use log::info;

use super::sheet::column_index;
use crate::error::Error;

/// Get the values of a named column, in row order.
pub fn column_values<R: Read>(reader: R, column: &str) -> Result<Vec<String>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let idx = column_index(reader.headers()?, column)?;

    reader
        .records()
        .map(|record| -> Result<String, Error> {
            Ok(record?.get(idx).unwrap_or_default().to_string())
        })
        .collect()
}

/// Write the values of `column` from `src` into `dst`, one per line.
pub fn extract_column(src: &Path, column: &str, dst: &Path) -> Result<usize, Error> {
    let f = std::fs::File::open(src)?;
    let values = column_values(f, column)?;
    let nb_lines = crate::io::write_lines(dst, &values)?;
    info!("wrote {} values of {} to {:?}", nb_lines, column, dst);
    Ok(nb_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
id,src,1.7-15000
1,foo,4
2,bar,3.5
3,baz,
";

    #[test]
    fn values() {
        let v = column_values(SHEET.as_bytes(), "1.7-15000").unwrap();
        assert_eq!(v, vec!["4", "3.5", ""]);
    }

    #[test]
    fn missing() {
        assert!(matches!(
            column_values(SHEET.as_bytes(), "nope"),
            Err(Error::MissingColumn(_))
        ));
    }

    #[test]
    fn to_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("sheet.csv");
        let dst = dir.path().join("col.txt");
        std::fs::write(&src, SHEET).unwrap();

        assert_eq!(extract_column(&src, "src", &dst).unwrap(), 3);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "foo\nbar\nbaz\n");
    }
}
