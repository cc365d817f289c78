//! # mtprep
//!
//! Data preparation for machine translation evaluation.
//!
//! ```sh
//! mtprep 0.1.0
//! machine translation evaluation data preparation.
//!
//! USAGE:
//!     mtprep <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     best       Keep the best scored output of each row of an annotated sheet
//!     column     Dump a single column of a CSV file
//!     extract    Get Tibetan sentences from a web page or a PDF
//!     help       Prints this message or the help of the given subcommand(s)
//!     join       Build an annotation sheet from a source file and model outputs
//!     rank       Rank models of an annotated sheet by average score
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use structopt::StructOpt;

use mtprep::error::Error;
use mtprep::extract::{ExtractorConfig, SentenceExtractor};
use mtprep::processing::{best, column, join, rank};

#[macro_use]
extern crate log;

mod cli;

fn extract(e: cli::Extract) -> Result<(), Error> {
    let source = e.source()?;
    if !e.skip_check {
        source.check()?;
    }

    let mut config = match &e.config {
        Some(path) => ExtractorConfig::from_path(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(min_length) = e.min_length {
        config = config.with_min_length(min_length);
    }
    let extractor = SentenceExtractor::new(config);

    let output = e.output_file()?;

    // a failing source yields an empty output file
    let sentences = source.sentences(&extractor).unwrap_or_else(|err| {
        error!("Error processing {}: {}", source, err);
        Vec::new()
    });

    let nb_sentences = mtprep::io::write_lines(&output, &sentences)?;
    info!("Extracted {} sentences to {:?}", nb_sentences, output);
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::MtPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::MtPrep::Extract(e) => extract(e)?,
        cli::MtPrep::Best(b) => {
            let nb_errors = best::extract_best(&b.src, &b.dst, &b.sheet.columns(), b.threshold)?;
            if nb_errors > 0 {
                warn!("{} rows without a best output", nb_errors);
            }
        }
        cli::MtPrep::Rank(r) => {
            let scale = rank::Scale {
                min: r.scale_min,
                max: r.scale_max,
            };
            rank::rank_models(&r.src, &r.dst, &r.sheet.columns(), scale, r.json)?;
        }
        cli::MtPrep::Column(c) => {
            column::extract_column(&c.src, &c.column, &c.dst)?;
        }
        cli::MtPrep::Join(j) => {
            join::join_files(&j.src, &j.source_header, &j.models, &j.score_suffix, &j.dst)?;
        }
    };
    Ok(())
}
