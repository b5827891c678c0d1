//! Social-media-aware tokenization.
//!
//! Splits a document into tokens while keeping the units that matter on
//! social platforms intact: URLs, `@mentions`, `#hashtags`, and words with
//! internal apostrophes each come out as a single token. Anything else
//! that isn't a word or number is emitted as a one-character symbol token.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        https?://\S+          # URLs stay whole
      | @\w+                  # mentions
      | \#\w+                 # hashtags
      | \w+(?:'\w+)*          # words, incl. apostrophe contractions
      | \S                    # any leftover symbol, one char at a time
    ",
    )
    .expect("token pattern compiles")
});

/// Tokenize one document.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("just three words"), vec!["just", "three", "words"]);
    }

    #[test]
    fn test_mentions_and_hashtags_stay_whole() {
        assert_eq!(
            tokenize("thanks @united for #service"),
            vec!["thanks", "@united", "for", "#service"]
        );
    }

    #[test]
    fn test_urls_stay_whole() {
        assert_eq!(
            tokenize("see http://t.co/abc now"),
            vec!["see", "http://t.co/abc", "now"]
        );
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(tokenize("don't won't can't"), vec!["don't", "won't", "can't"]);
    }

    #[test]
    fn test_punctuation_split_off() {
        assert_eq!(
            tokenize("wait, what?!"),
            vec!["wait", ",", "what", "?", "!"]
        );
    }

    #[test]
    fn test_ordinals_are_single_tokens() {
        assert_eq!(tokenize("my 1st and 22nd"), vec!["my", "1st", "and", "22nd"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_non_ascii_words_stay_whole() {
        assert_eq!(tokenize("café olé"), vec!["café", "olé"]);
    }
}
