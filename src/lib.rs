pub mod segmenter;
pub mod streaming;

// Re-export main types for convenient access
pub use segmenter::{
    contains_sentence_separator, extract_complete_sentences, extract_smart_sentences,
    is_numeric_ordinal, is_pause_punctuation, is_terminal_punctuation, SeparatorSet,
};

// Re-export streaming adapter types
pub use streaming::{segment_stream, StreamConfig, StreamSegmenter};
