// Matching engine: tokenize → skill coverage + description Jaccard → blend → rank.
// Pure functions only; I/O lives in the handlers.

pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod similarity;
pub mod skills;
pub mod tokenizer;
