pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::{TokenRule, TokenStream, Tokenizer};

pub mod frequency_counter;
pub use frequency_counter::FrequencyCounter;

pub mod grouped_ranker;
pub use grouped_ranker::{GroupedRanker, Ranking, TierStats};

pub mod reporter;
pub use reporter::{DiagnosticReporter, ReportFormat, Reporter};

pub mod input_source;
pub use input_source::InputSource;

pub mod word_ranker_config;
pub use word_ranker_config::WordRankerConfig;
