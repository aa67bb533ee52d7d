//! Word and sentence tokenization backed by Unicode text segmentation
//! (UAX #29 boundaries from `unicode-segmentation`).

use crate::constants::{SENTENCE_MODE, TITLE_ABBREVIATIONS, WORD_MODE};
use anyhow::{Result, anyhow};
use once_cell::sync::{Lazy, OnceCell};
use std::fmt;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Which unit the tokenizer emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenizerMode {
    #[default]
    Word,
    Sentence,
}

impl TokenizerMode {
    /// Only the exact string `sentence` selects sentence mode; every other
    /// value, including unknown ones, means word mode.
    pub fn parse(value: &str) -> Self {
        if value == SENTENCE_MODE {
            TokenizerMode::Sentence
        } else {
            if value != WORD_MODE {
                debug!("unrecognised tokenizer {value:?}, using word mode");
            }
            TokenizerMode::Word
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenizerMode::Word => WORD_MODE,
            TokenizerMode::Sentence => SENTENCE_MODE,
        }
    }
}

impl fmt::Display for TokenizerMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits text into tokens for a given mode.
pub trait Tokenize {
    fn tokenize(
        &self,
        text: &str,
        mode: TokenizerMode,
    ) -> Vec<String>;
}

/// Tokenizer using Unicode word and sentence boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        UnicodeTokenizer
    }

    /// Lowercased words of the trimmed text. Words holding an apostrophe or
    /// other inner punctuation are split at it (`it's` gives `it`, `s`).
    pub fn words(
        &self,
        text: &str,
    ) -> Vec<String> {
        let lowered = text.trim().to_lowercase();
        lowered
            .unicode_words()
            .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
            .filter(|part| is_alphanumeric(part))
            .map(str::to_owned)
            .collect()
    }

    /// Sentences in source order with case and punctuation intact. Single
    /// line breaks are treated as wrapping; blank lines end a paragraph.
    pub fn sentences(
        &self,
        text: &str,
    ) -> Vec<String> {
        paragraphs(text)
            .iter()
            .flat_map(|paragraph| paragraph_sentences(paragraph))
            .collect()
    }
}

/// Hard-wrapped lines joined with single spaces, one entry per paragraph.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn paragraph_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    for (offset, piece) in paragraph.split_sentence_bound_indices() {
        let begin = *start.get_or_insert(offset);
        let sentence = paragraph[begin..offset + piece.len()].trim();
        // A title before a name is not a sentence end
        if ends_with_title(sentence) {
            continue;
        }
        start = None;
        if !sentence.is_empty() {
            sentences.push(sentence.to_owned());
        }
    }
    if let Some(begin) = start {
        let rest = paragraph[begin..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_owned());
        }
    }
    sentences
}

fn ends_with_title(sentence: &str) -> bool {
    sentence
        .rsplit(char::is_whitespace)
        .next()
        .is_some_and(|last| TITLE_ABBREVIATIONS.contains(&last))
}

impl Tokenize for UnicodeTokenizer {
    fn tokenize(
        &self,
        text: &str,
        mode: TokenizerMode,
    ) -> Vec<String> {
        match mode {
            TokenizerMode::Sentence => self.sentences(text),
            TokenizerMode::Word => self.words(text),
        }
    }
}

static SHARED: Lazy<UnicodeTokenizer> = Lazy::new(|| {
    debug!("initialising shared unicode tokenizer");
    UnicodeTokenizer::new()
});

static READY: OnceCell<()> = OnceCell::new();

const SELF_CHECK_TEXT: &str = "Check one. Check two.";
const SELF_CHECK_SENTENCES: usize = 2;
const SELF_CHECK_WORDS: usize = 4;

/// The shared tokenizer used by [`tokenize`] and the batch processor.
pub fn shared() -> &'static UnicodeTokenizer {
    &SHARED
}

/// Check once per process that segmentation works before any file is
/// touched: the self-check text must give exactly two sentences and four words.
/// Later calls return immediately.
pub fn ensure_ready() -> Result<()> {
    READY.get_or_try_init(|| {
        let sentences = SHARED.sentences(SELF_CHECK_TEXT);
        let words = SHARED.words(SELF_CHECK_TEXT);
        if sentences.len() != SELF_CHECK_SENTENCES || words.len() != SELF_CHECK_WORDS {
            return Err(anyhow!(
                "tokenizer self-check failed: sentences {:?}, words {:?}",
                sentences,
                words
            ));
        }
        debug!("tokenizer ready");
        Ok(())
    })?;
    Ok(())
}

/// Tokenize `text` with the shared tokenizer.
#[inline]
pub fn tokenize(
    text: &str,
    mode: TokenizerMode,
) -> Vec<String> {
    SHARED.tokenize(text, mode)
}

/// True for non-empty tokens made only of alphanumeric characters.
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
