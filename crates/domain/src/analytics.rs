// crates/domain/src/analytics.rs
pub mod counts;
pub mod lengths;
pub mod palindrome;
pub mod search;
pub mod vocabulary;

pub use counts::{count_lines, count_non_empty_lines, count_unique_words, count_word_occurrences, count_words};
pub use lengths::{
    average_line_length, average_word_length, find_longest_line, find_shortest_line, find_top_n_longest_words,
    first_word_longer_than,
};
pub use palindrome::{find_palindromic_words, is_palindrome};
pub use search::{LinePattern, find_lines_containing_numbers, find_lines_containing_word, find_lines_matching};
pub use vocabulary::{FrequencyTable, WordSet, common_words, word_frequency, word_set};
