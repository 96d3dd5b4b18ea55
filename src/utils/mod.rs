pub mod sentence_divider;
pub mod tokenize;
