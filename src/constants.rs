// Environment keys and the values used when they are unset
pub const INPUT_PATH_KEY: &str = "INPUT_PATH";
pub const OUTPUT_PATH_KEY: &str = "OUTPUT_PATH";
pub const FILE_NAMES_KEY: &str = "FILE_NAMES";
pub const TOKENIZER_KEY: &str = "TOKENIZER_TYPE";

pub const DEFAULT_INPUT_PATH: &str = "files/input";
pub const DEFAULT_OUTPUT_PATH: &str = "files/output";
pub const DEFAULT_FILE_NAMES: &str = "file1.txt,file2.txt,file3.txt";
pub const DEFAULT_TOKENIZER: &str = WORD_MODE;

pub const WORD_MODE: &str = "word";
pub const SENTENCE_MODE: &str = "sentence";

pub const FILE_NAME_SEPARATOR: char = ',';
pub const TOKEN_SEPARATOR: &str = "\n";

pub const DEFAULT_LOG_FILTER: &str = "warn";

// Titles whose trailing period does not end a sentence
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Mx.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Mt.", "Gen.", "Capt.",
    "Lt.", "Rev.",
];
