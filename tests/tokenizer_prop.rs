use proptest::prelude::*;
use token_batch::tokenizer::{TokenizerMode, is_alphanumeric, tokenize};

fn squeeze(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn word_tokens_are_lowercase_alphanumeric(text in "[A-Za-z0-9 ,.;:!?'\"()\n-]{0,200}") {
        for token in tokenize(&text, TokenizerMode::Word) {
            prop_assert!(is_alphanumeric(&token), "{token:?}");
            prop_assert!(!token.chars().any(char::is_uppercase), "{token:?}");
        }
    }

    #[test]
    fn sentences_reassemble_the_input(text in "[A-Za-z0-9 ,.!?'\n]{0,200}") {
        let sentences = tokenize(&text, TokenizerMode::Sentence);
        let glued: String = sentences.concat();
        prop_assert_eq!(squeeze(&glued), squeeze(&text));
        for sentence in &sentences {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
            prop_assert!(!sentence.contains('\n'), "{sentence:?}");
        }
    }

    #[test]
    fn file_name_list_keeps_every_entry(names in prop::collection::vec("[a-z0-9._ ]{0,12}", 1..8)) {
        let raw = names.join(",");
        let parsed = token_batch::config::parse_file_names(&raw);
        prop_assert_eq!(parsed.len(), names.len());
        for (got, want) in parsed.iter().zip(&names) {
            prop_assert_eq!(got.as_str(), want.trim());
        }
    }
}
