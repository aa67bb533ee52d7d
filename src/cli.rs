use clap::Parser;

/// The batch job takes no options; configuration comes from the environment
/// (INPUT_PATH, OUTPUT_PATH, FILE_NAMES, TOKENIZER_TYPE) and `.env`.
#[derive(Parser, Debug, Default)]
#[command(name = "token-batch", version)]
#[command(
    about = "Tokenize the configured text files into words or sentences, \
                   writing one token per line to the output directory."
)]
pub struct Cli {}
