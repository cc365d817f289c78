/*! Annotation sheet creation

Joins a source file and the outputs of several models (one sentence per line, aligned)
into a CSV ready for annotation:

```text
ID,<source>,<model 1>,<model 1><suffix>,<model 2>,<model 2><suffix>,...
1,source line,output 1,,output 2,,...
```

Score cells are left empty. If files do not have the same number of lines,
the sheet is cut to the shortest one.
!*/
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;
use crate::io::read_lines;

/// Lines of a model output file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub name: String,
    pub lines: Vec<String>,
}

/// Write the annotation sheet. Returns the number of rows.
pub fn join<W: Write>(
    source_header: &str,
    source: &[String],
    models: &[ModelOutput],
    score_suffix: &str,
    writer: W,
) -> Result<usize, Error> {
    let lengths: Vec<usize> = std::iter::once(source.len())
        .chain(models.iter().map(|m| m.lines.len()))
        .collect();
    let nb_rows = lengths.iter().copied().min().unwrap_or(0);

    if lengths.iter().any(|&l| l != nb_rows) {
        warn!(
            "files have different lengths: {:?}, using the minimum length ({})",
            lengths, nb_rows
        );
    }

    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["ID".to_string(), source_header.to_string()];
    for model in models {
        header.push(model.name.clone());
        header.push(format!("{}{}", model.name, score_suffix));
    }
    out.write_record(&header)?;

    for row in 0..nb_rows {
        let mut record = vec![(row + 1).to_string(), source[row].clone()];
        for model in models {
            record.push(model.lines[row].clone());
            record.push(String::new());
        }
        out.write_record(&record)?;
    }
    out.flush()?;

    Ok(nb_rows)
}

/// Read `src` and each `(name, path)` model file and write the sheet to `dst`.
pub fn join_files(
    src: &Path,
    source_header: &str,
    models: &[(String, PathBuf)],
    score_suffix: &str,
    dst: &Path,
) -> Result<usize, Error> {
    let missing: Vec<&Path> = std::iter::once(src)
        .chain(models.iter().map(|(_, p)| p.as_path()))
        .filter(|p| !p.exists())
        .collect();
    if !missing.is_empty() {
        return Err(Error::Custom(format!(
            "The following files are missing: {:?}",
            missing
        )));
    }

    let source = read_lines(src)?;
    let models = models
        .iter()
        .map(|(name, path)| -> Result<ModelOutput, Error> {
            Ok(ModelOutput {
                name: name.clone(),
                lines: read_lines(path)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    crate::io::create_parent_dir(dst)?;
    let out = std::fs::File::create(dst)?;
    let nb_rows = join(source_header, &source, &models, score_suffix, out)?;

    info!("Successfully created {:?} with {} rows", dst, nb_rows);
    Ok(nb_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(l: &[&str]) -> Vec<String> {
        l.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sheet() {
        let source = lines(&["s1", "s2"]);
        let models = vec![
            ModelOutput {
                name: "claude".into(),
                lines: lines(&["a1", "a2"]),
            },
            ModelOutput {
                name: "qwen".into(),
                lines: lines(&["b1, with comma", "b2"]),
            },
        ];

        let mut buf = Vec::new();
        let n = join("原文", &source, &models, "得分", &mut buf).unwrap();

        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ID,原文,claude,claude得分,qwen,qwen得分\n\
             1,s1,a1,,\"b1, with comma\",\n\
             2,s2,a2,,b2,\n"
        );
    }

    #[test]
    fn shortest_wins() {
        let source = lines(&["s1", "s2", "s3"]);
        let models = vec![ModelOutput {
            name: "m".into(),
            lines: lines(&["a1"]),
        }];

        let mut buf = Vec::new();
        assert_eq!(join("src", &source, &models, "_score", &mut buf).unwrap(), 1);
    }

    #[test]
    fn missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        std::fs::write(&src, "s1\n").unwrap();
        let models = vec![("m".to_string(), dir.path().join("nope.txt"))];

        let r = join_files(&src, "src", &models, "_score", &dir.path().join("out.csv"));
        assert!(matches!(r, Err(Error::Custom(_))));
    }
}
