// WHY: Two extraction modes trade off differently: eager splits at every
// terminator for batch flushes, windowed defers short fragments so the
// synthesizer never receives choppy audio chunks

use tracing::debug;

use super::punctuation::{is_terminal_punctuation, SeparatorSet};
use super::scanner::next_split_point;
use super::scratch::{Scratch, SCRATCH_POOL};

/// Slice a code-point segment down to its non-whitespace core.
fn trim_segment(chars: &[char]) -> &[char] {
    let start = chars
        .iter()
        .position(|c| !c.is_whitespace())
        .unwrap_or(chars.len());
    let end = chars.iter().rposition(|c| !c.is_whitespace()).map_or(0, |i| i + 1);
    if start >= end {
        &[]
    } else {
        &chars[start..end]
    }
}

/// Append a rejected or trailing segment to the running remainder, joined by
/// a single space when the remainder is already non-empty.
fn push_remainder(remainder: &mut String, segment: &[char]) {
    if segment.is_empty() {
        return;
    }
    if !remainder.is_empty() {
        remainder.push(' ');
    }
    remainder.extend(segment.iter());
}

/// Extract every terminator-delimited sentence from `text`.
///
/// Walks the text once, flushing the trimmed accumulator at each terminal
/// code point. Trailing unterminated text becomes the remainder. No
/// minimum-length filtering in this mode.
pub fn extract_complete_sentences(text: &str) -> (Vec<String>, String) {
    if text.is_empty() {
        return (Vec::new(), String::new());
    }

    let mut scratch = SCRATCH_POOL.acquire(text.len());
    let current = &mut scratch.text;

    let mut sentences = Vec::new();
    for ch in text.chars() {
        current.push(ch);
        if is_terminal_punctuation(ch) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let remainder = current.trim().to_string();
    debug!(
        sentences = sentences.len(),
        remainder_len = remainder.len(),
        "eager extraction complete"
    );
    (sentences, remainder)
}

/// Extract sentences bounded by the `[min_len, max_len]` window.
///
/// Selects the permissive separator set when `is_first` is true, so the very
/// first utterance can split at a comma and reach the synthesizer sooner.
/// A candidate segment is accepted only when it is at least `min_len` code
/// points long AND its last code point is a boundary in the active set;
/// anything else is folded into the remainder for a later call.
/// `max_len == 0` lifts the window cap; `min_len == 0` accepts any properly
/// terminated segment.
pub fn extract_smart_sentences(
    text: &str,
    min_len: usize,
    max_len: usize,
    is_first: bool,
) -> (Vec<String>, String) {
    let set = SeparatorSet::for_first_pass(is_first);
    let mut sentences = Vec::new();

    let mut scratch = SCRATCH_POOL.acquire(text.len().max(max_len.saturating_mul(2)));
    let Scratch { chars, text: remainder } = &mut *scratch;
    chars.extend(text.chars());

    let mut start = 0;
    while start < chars.len() {
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
        if start >= chars.len() {
            break;
        }

        let Some(split) = next_split_point(chars, start, max_len, set) else {
            // No split point left: the rest rides along to the next call
            let tail = trim_segment(&chars[start..]);
            push_remainder(remainder, tail);
            break;
        };

        let segment = trim_segment(&chars[start..=split]);
        let terminated = segment.last().is_some_and(|&c| set.contains(c));
        if segment.len() >= min_len && terminated {
            sentences.push(segment.iter().collect());
        } else {
            push_remainder(remainder, segment);
        }

        start = split + 1;
    }

    debug!(
        sentences = sentences.len(),
        remainder_len = remainder.len(),
        is_first,
        "windowed extraction complete"
    );
    (sentences, remainder.clone())
}

/// Check whether `text` contains any boundary of the active separator set.
/// Callers use this to skip extraction entirely while a chunk cannot yet
/// complete a sentence.
pub fn contains_sentence_separator(text: &str, is_first: bool) -> bool {
    let set = SeparatorSet::for_first_pass(is_first);
    text.chars().any(|c| set.contains(c))
}
