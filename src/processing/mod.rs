/*! Evaluation processing

Tools working on human annotated sheets and parallel text files:

- [best]: keep the best scored output of each row,
- [rank]: per model statistics and ranking,
- [column]: dump a single column,
- [join]: build an annotation sheet from a source file and model outputs.

Annotated sheets are CSV files. See [ModelColumns] for the expected layout.
!*/
pub mod best;
pub mod column;
pub mod join;
pub mod rank;
mod sheet;

pub use sheet::{column_index, parse_score, ModelColumns, ModelIndex, DEFAULT_MODELS, SCORE_SUFFIX};
