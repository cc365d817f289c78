/*! Sentence extraction

Turns [TextBlock]s (paragraphs, headings, pages) into clean, deduplicated sentences of a target script.

```
use mtprep::extract::SentenceExtractor;

let extractor = SentenceExtractor::default();
let blocks = ["བཀྲ་ཤིས་བདེ་ལེགས་ཞུ་རྒྱུ་ཡིན་པ་ལགས། english only"];
let sentences: Vec<String> = extractor.extract(blocks).map(String::from).collect();

assert_eq!(sentences, vec!["བཀྲ་ཤིས་བདེ་ལེགས་ཞུ་རྒྱུ་ཡིན་པ་ལགས།"]);
```
!*/
mod block;
mod config;
mod extractor;

pub use block::{normalize, TextBlock};
pub use config::{ExtractorConfig, SHAD, TIBETAN_CONNECTORS};
pub use extractor::{
    Outcome, Outcomes, RejectReason, Rejection, Sentence, SentenceExtractor, Sentences,
};
