//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use mtprep::error::Error;
use mtprep::processing::ModelColumns;
use mtprep::sources::Source;

#[derive(Debug, StructOpt)]
#[structopt(name = "mtprep", about = "machine translation evaluation data preparation.")]
/// Holds every command that is callable by the `mtprep` command.
pub enum MtPrep {
    #[structopt(about = "Get Tibetan sentences from a web page or a PDF")]
    Extract(Extract),
    #[structopt(about = "Keep the best scored output of each row of an annotated sheet")]
    Best(Best),
    #[structopt(about = "Rank models of an annotated sheet by average score")]
    Rank(Rank),
    #[structopt(about = "Dump a single column of a CSV file")]
    Column(Column),
    #[structopt(about = "Build an annotation sheet from a source file and model outputs")]
    Join(Join),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// ```sh
/// mtprep extract --url https://tibet.net/covid-19/?p=140 test0.out
/// ```
pub struct Extract {
    #[structopt(
        long = "url",
        help = "Input in url format.",
        conflicts_with = "pdf",
        required_unless = "pdf"
    )]
    pub url: bool,
    #[structopt(long = "pdf", help = "Input in pdf format.")]
    pub pdf: bool,
    #[structopt(help = "Link/file path for chosen mode.")]
    pub input_path: String,
    #[structopt(
        parse(from_os_str),
        help = "Path to output file. Only the file name is kept."
    )]
    pub output_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "out-dir",
        help = "Output directory",
        default_value = "outputs"
    )]
    pub out_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "config",
        help = "JSON extractor configuration. Tibetan defaults otherwise."
    )]
    pub config: Option<PathBuf>,
    #[structopt(long = "min-length", help = "Minimum sentence length (codepoints)")]
    pub min_length: Option<usize>,
    #[structopt(long = "skip-check", help = "Do not check that the input is accessible")]
    pub skip_check: bool,
}

impl Extract {
    pub fn source(&self) -> Result<Source, Error> {
        if self.url {
            Source::web(&self.input_path)
        } else {
            Ok(Source::Pdf(PathBuf::from(&self.input_path)))
        }
    }

    /// `out_dir` joined with the file name of `output_path`.
    pub fn output_file(&self) -> Result<PathBuf, Error> {
        let filename = self.output_path.file_name().ok_or_else(|| {
            Error::Custom(format!("{:?} has no file name", self.output_path))
        })?;
        Ok(self.out_dir.join(filename))
    }
}

#[derive(Debug, StructOpt)]
/// Sheet layout parameters.
pub struct Sheet {
    #[structopt(
        long = "models",
        help = "Model columns, comma separated",
        use_delimiter = true,
        default_value = "模型A,模型B,模型C,模型D"
    )]
    pub models: Vec<String>,
    #[structopt(
        long = "score-suffix",
        help = "Suffix of score columns",
        default_value = "得分"
    )]
    pub score_suffix: String,
}

impl Sheet {
    pub fn columns(&self) -> ModelColumns {
        ModelColumns::new(self.models.clone(), self.score_suffix.clone())
    }
}

#[derive(Debug, StructOpt)]
pub struct Best {
    #[structopt(parse(from_os_str), help = "annotated sheet (csv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination (one output per line)")]
    pub dst: PathBuf,
    #[structopt(
        long = "threshold",
        help = "best score has to be above it",
        default_value = "0"
    )]
    pub threshold: f64,
    #[structopt(flatten)]
    pub sheet: Sheet,
}

#[derive(Debug, StructOpt)]
pub struct Rank {
    #[structopt(parse(from_os_str), help = "annotated sheet (csv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of the ranking")]
    pub dst: PathBuf,
    #[structopt(long = "json", help = "write the ranking as JSON")]
    pub json: bool,
    #[structopt(long = "scale-min", help = "lowest possible score", default_value = "1")]
    pub scale_min: f64,
    #[structopt(long = "scale-max", help = "highest possible score", default_value = "5")]
    pub scale_max: f64,
    #[structopt(flatten)]
    pub sheet: Sheet,
}

#[derive(Debug, StructOpt)]
pub struct Column {
    #[structopt(parse(from_os_str), help = "source csv")]
    pub src: PathBuf,
    #[structopt(help = "column name")]
    pub column: String,
    #[structopt(parse(from_os_str), help = "destination (one value per line)")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Join command and parameters.
///
/// ```sh
/// mtprep join src.txt sheet.csv -m claude=out.claude -m qwen=out.qwen
/// ```
pub struct Join {
    #[structopt(parse(from_os_str), help = "source sentences, one per line")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination sheet (csv)")]
    pub dst: PathBuf,
    #[structopt(
        short = "m",
        long = "model",
        help = "model output file, as NAME=PATH",
        parse(try_from_str = parse_model),
        number_of_values = 1,
        required = true
    )]
    pub models: Vec<(String, PathBuf)>,
    #[structopt(
        long = "source-header",
        help = "header of the source column",
        default_value = "source"
    )]
    pub source_header: String,
    #[structopt(
        long = "score-suffix",
        help = "Suffix of score columns",
        default_value = "得分"
    )]
    pub score_suffix: String,
}

/// Parse `NAME=PATH`.
fn parse_model(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got {}", s)),
    }
}
