//! Tokenizer — lowercases text and splits it into word-like tokens.
//!
//! The token alphabet is `[a-z0-9+#.]`, so "c++", "c#" and "node.js" survive
//! as single tokens. Fragments shorter than 2 characters and stop words are dropped.

use std::collections::HashSet;

/// Minimum token length, in characters.
const MIN_TOKEN_LEN: usize = 2;

/// Common English function words plus job-posting filler.
pub const V1_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "our", "your", "their",
    "we", "you", "they", "it", "this", "that", "as", "if", "when", "than",
    "so", "not", "also", "about", "up", "out", "into", "through", "during",
    "including", "across", "per", "between", "experience", "strong", "team",
    "work", "build", "using", "use", "you", "will", "join", "ability",
];

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_stop_words(V1_STOP_WORDS)
    }
}

impl Tokenizer {
    pub fn with_stop_words(words: &[&str]) -> Self {
        Self {
            stop_words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Returns surviving tokens in input order. Duplicates are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !is_token_char(c))
            .filter(|fragment| fragment.len() >= MIN_TOKEN_LEN && !self.is_stop_word(fragment))
            .map(str::to_string)
            .collect()
    }

    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

fn is_token_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '+' | '#' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(Tokenizer::default().tokenize("").is_empty());
    }

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        let tokens = Tokenizer::default().tokenize("Senior React developer with strong TypeScript");
        assert_eq!(tokens, vec!["senior", "react", "developer", "typescript"]);
    }

    #[test]
    fn test_keeps_symbol_heavy_tech_names_intact() {
        let tokens = Tokenizer::default().tokenize("C++, C#, ASP.NET and Node.js!");
        assert_eq!(tokens, vec!["c++", "c#", "asp.net", "node.js"]);
    }

    #[test]
    fn test_drops_single_character_fragments() {
        let tokens = Tokenizer::default().tokenize("R / C and Go");
        assert_eq!(tokens, vec!["go"]);
    }

    #[test]
    fn test_trailing_period_stays_attached() {
        // '.' is part of the alphabet, so sentence-final periods are not stripped
        let tokens = Tokenizer::default().tokenize("Built SaaS products.");
        assert_eq!(tokens, vec!["built", "saas", "products."]);
    }

    #[test]
    fn test_non_ascii_letters_split_tokens() {
        let tokens = Tokenizer::default().tokenize("café résumé");
        assert_eq!(tokens, vec!["caf", "sum"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokens = Tokenizer::default().tokenize("rust go rust");
        assert_eq!(tokens, vec!["rust", "go", "rust"]);
    }

    #[test]
    fn test_retokenizing_tokens_is_idempotent() {
        let tokenizer = Tokenizer::default();
        let first = tokenizer.token_set("Kubernetes, Terraform & AWS across 3 regions");
        let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
        assert_eq!(tokenizer.token_set(&joined), first);
    }

    #[test]
    fn test_custom_stop_words_replace_defaults() {
        let tokenizer = Tokenizer::with_stop_words(&["rust"]);
        assert_eq!(tokenizer.tokenize("the rust team"), vec!["the", "team"]);
    }
}
