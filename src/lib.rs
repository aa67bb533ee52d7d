pub mod cli;
pub mod config;
pub mod constants;
pub mod io;
pub mod pipeline;
pub mod tokenizer;

pub use config::{Config, load_configuration};
pub use pipeline::{FileOutcome, Report, process_files, process_files_with};
pub use tokenizer::{Tokenize, TokenizerMode, tokenize};
