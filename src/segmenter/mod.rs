// WHY: Boundary detection is split from extraction so each scan rule can be
// tested in isolation; everything operates on code points, never bytes

pub mod extractor;
pub mod ordinal;
pub mod punctuation;
pub mod scanner;
pub mod scratch;

// Re-export the segmentation surface
pub use extractor::{
    contains_sentence_separator, extract_complete_sentences, extract_smart_sentences,
};
pub use ordinal::{is_numeric_ordinal, is_ordinal_period};
pub use punctuation::{is_pause_punctuation, is_terminal_punctuation, SeparatorSet};
pub use scanner::{last_boundary, next_split_point};
pub use scratch::{Scratch, ScratchGuard, ScratchPool};
