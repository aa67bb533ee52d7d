use crate::config::Config;
use crate::io::files;
use crate::tokenizer::{self, Tokenize};
use anyhow::Result;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// What happened to one configured file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Processed {
        file_name: String,
        output: PathBuf,
        tokens: usize,
    },
    NotFound {
        input: PathBuf,
    },
}

impl fmt::Display for FileOutcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FileOutcome::Processed {
                file_name, tokens, ..
            } => write!(f, "✔ processed: {file_name} ({tokens} tokens)"),
            FileOutcome::NotFound { input } => write!(f, "✘ not found: {}", input.display()),
        }
    }
}

/// Outcomes of a batch run, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<FileOutcome>,
}

impl Report {
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn processed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Processed { .. }))
            .count()
    }

    pub fn missing(&self) -> usize {
        self.outcomes.len() - self.processed()
    }
}

/// Batch processor: reads each configured file, tokenizes it and writes the
/// tokens under the output directory.
pub struct Pipeline<'a> {
    config: &'a Config,
    tokenizer: &'a dyn Tokenize,
    report: Report,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        tokenizer: &'a dyn Tokenize,
    ) -> Self {
        Self {
            config,
            tokenizer,
            report: Report::default(),
        }
    }

    /// Create the output directory tree if it is missing.
    pub fn prepare_output_dir(&self) -> Result<()> {
        files::ensure_dir(&self.config.output_path)
    }

    /// Process a single file name. A missing input is an outcome, not an
    /// error; any other I/O failure is returned.
    pub fn process_file(
        &self,
        file_name: &str,
    ) -> Result<FileOutcome> {
        let input = self.config.input_path.join(file_name);
        let output = self.config.output_path.join(file_name);

        if !input.is_file() {
            debug!("skipping {}: no such file", input.display());
            return Ok(FileOutcome::NotFound { input });
        }

        let text = files::read_document(&input)?;
        let tokens = self.tokenizer.tokenize(&text, self.config.tokenizer);
        files::write_tokens(&output, &tokens)?;
        debug!(
            "{} -> {} ({} tokens)",
            input.display(),
            output.display(),
            tokens.len()
        );

        Ok(FileOutcome::Processed {
            file_name: file_name.to_string(),
            output,
            tokens: tokens.len(),
        })
    }

    /// Process every configured file in order, printing one line per file.
    /// The first I/O error stops the run.
    pub fn run(mut self) -> Result<Report> {
        self.prepare_output_dir()?;
        for file_name in &self.config.file_names {
            let outcome = self.process_file(file_name)?;
            println!("{outcome}");
            self.report.outcomes.push(outcome);
        }
        info!(
            "{} processed, {} missing ({} mode)",
            self.report.processed(),
            self.report.missing(),
            self.config.tokenizer
        );
        Ok(self.report)
    }
}

/// Run the batch with the given tokenizer.
pub fn process_files_with(
    config: &Config,
    tokenizer: &dyn Tokenize,
) -> Result<Report> {
    Pipeline::new(config, tokenizer).run()
}

/// Run the batch with the shared Unicode tokenizer, checking it first.
pub fn process_files(config: &Config) -> Result<Report> {
    tokenizer::ensure_ready()?;
    process_files_with(config, tokenizer::shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenizerMode;
    use std::fs;

    struct Upper;

    impl Tokenize for Upper {
        fn tokenize(
            &self,
            text: &str,
            _mode: TokenizerMode,
        ) -> Vec<String> {
            text.split_whitespace().map(str::to_uppercase).collect()
        }
    }

    fn config_in(root: &std::path::Path) -> Config {
        Config {
            input_path: root.join("in"),
            output_path: root.join("out"),
            file_names: vec!["a.txt".into(), "gone.txt".into()],
            tokenizer: TokenizerMode::Word,
        }
    }

    #[test]
    fn injected_tokenizer_is_used() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config_in(dir.path());
        fs::create_dir_all(&config.input_path)?;
        fs::write(config.input_path.join("a.txt"), "one two")?;

        let report = process_files_with(&config, &Upper)?;
        assert_eq!(report.processed(), 1);
        assert_eq!(report.missing(), 1);
        assert_eq!(
            fs::read_to_string(config.output_path.join("a.txt"))?,
            "ONE\nTWO"
        );
        assert!(!config.output_path.join("gone.txt").exists());
        Ok(())
    }

    #[test]
    fn directory_is_not_an_input_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config_in(dir.path());
        fs::create_dir_all(config.input_path.join("a.txt"))?;

        let pipeline = Pipeline::new(&config, &Upper);
        pipeline.prepare_output_dir()?;
        let outcome = pipeline.process_file("a.txt")?;
        assert!(matches!(outcome, FileOutcome::NotFound { .. }));
        Ok(())
    }

    #[test]
    fn outcome_lines() {
        let done = FileOutcome::Processed {
            file_name: "file1.txt".into(),
            output: PathBuf::from("files/output/file1.txt"),
            tokens: 5,
        };
        let gone = FileOutcome::NotFound {
            input: PathBuf::from("files/input/file9.txt"),
        };
        insta::assert_snapshot!(done.to_string(), @"✔ processed: file1.txt (5 tokens)");
        insta::assert_snapshot!(gone.to_string(), @"✘ not found: files/input/file9.txt");
    }
}
