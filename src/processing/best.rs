/*! Best scored outputs

For each row of an annotated sheet, keep the output of the model with the highest score.
The result can be used as a new reference file.

The highest score has to be strictly greater than the threshold, otherwise the row
has no best output and [ERROR_PLACEHOLDER] is written instead, so that line numbers
stay aligned with the sheet rows.
!*/
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{error, info};

use super::sheet::{parse_score, ModelColumns, ModelIndex};
use crate::error::Error;

pub const ERROR_PLACEHOLDER: &str = "#ERROR#";

/// Get the output of the best scored model of a row.
///
/// On ties, the first model wins. Missing or invalid scores are ignored.
pub fn best_output<'r>(
    record: &'r StringRecord,
    indices: &[ModelIndex],
    threshold: f64,
) -> Option<&'r str> {
    let mut best: Option<(f64, usize)> = None;
    for idx in indices {
        if let Some(score) = parse_score(record.get(idx.score)) {
            match best {
                Some((max, _)) if score <= max => (),
                _ => best = Some((score, idx.output)),
            }
        }
    }

    best.filter(|(score, _)| *score > threshold)
        .and_then(|(_, output)| record.get(output))
}

/// Get the best output of each row of a CSV.
pub fn best_outputs<R: Read>(
    reader: R,
    columns: &ModelColumns,
    threshold: f64,
) -> Result<Vec<Option<String>>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let indices = columns.locate(reader.headers()?)?;

    let mut outputs = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let output = best_output(&record, &indices, threshold);
        if output.is_none() {
            error!(
                "row {} has no score above the threshold ({})",
                row + 1,
                threshold
            );
        }
        outputs.push(output.map(String::from));
    }

    Ok(outputs)
}

/// Write the best output of each row of `src` into `dst`, one per line.
/// Returns the number of rows without a best output.
pub fn extract_best(
    src: &Path,
    dst: &Path,
    columns: &ModelColumns,
    threshold: f64,
) -> Result<usize, Error> {
    let f = std::fs::File::open(src)?;
    let outputs = best_outputs(f, columns, threshold)?;
    let nb_errors = outputs.iter().filter(|o| o.is_none()).count();

    let lines = outputs
        .iter()
        .map(|o| o.as_deref().unwrap_or(ERROR_PLACEHOLDER));
    let nb_lines = crate::io::write_lines(dst, lines)?;

    info!(
        "wrote {} best outputs to {:?} ({} errors)",
        nb_lines, dst, nb_errors
    );
    Ok(nb_errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ModelColumns {
        ModelColumns::new(vec!["a".into(), "b".into(), "c".into()], "_score".into())
    }

    const SHEET: &str = "\
id,src,a,a_score,b,b_score,c,c_score
1,s1,a1,3,b1,5,c1,4
2,s2,a2,4,b2,4,c2,2
3,s3,a3,0,b3,0,c3,0
4,s4,a4,,b4,x,c4,2.5
5,s5,a5,,b5,,c5,
";

    #[test]
    fn best_per_row() {
        let outputs = best_outputs(SHEET.as_bytes(), &columns(), 0.0).unwrap();
        assert_eq!(
            outputs,
            vec![
                Some("b1".to_string()),
                // tie: first model wins
                Some("a2".to_string()),
                // not above threshold
                None,
                // invalid scores are ignored
                Some("c4".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn threshold() {
        let outputs = best_outputs(SHEET.as_bytes(), &columns(), 4.0).unwrap();
        assert_eq!(outputs[0], Some("b1".to_string()));
        assert_eq!(outputs[1], None);
    }

    #[test]
    fn missing_model() {
        let sheet = "a,a_score\nx,1\n";
        let r = best_outputs(sheet.as_bytes(), &columns(), 0.0);
        assert!(matches!(r, Err(Error::MissingColumn(_))));
    }

    #[test]
    fn placeholder_lines() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("sheet.csv");
        let dst = dir.path().join("out/ref.txt");
        std::fs::write(&src, SHEET).unwrap();

        let nb_errors = extract_best(&src, &dst, &columns(), 0.0).unwrap();
        assert_eq!(nb_errors, 2);
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "b1\na2\n#ERROR#\nc4\n#ERROR#\n"
        );
    }
}
