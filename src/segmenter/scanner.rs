// WHY: Scans operate over code-point slices, never byte offsets, so
// multi-byte characters are never split mid-sequence

use super::ordinal::is_ordinal_period;
use super::punctuation::SeparatorSet;

/// Find the last boundary code point, scanning backward from the end.
///
/// Ordinal periods are skipped, so `"see item 3."` has no boundary even
/// though it ends with a period.
pub fn last_boundary(text: &[char], set: SeparatorSet) -> Option<usize> {
    for i in (0..text.len()).rev() {
        let ch = text[i];
        if set.contains(ch) {
            if ch == '.' && is_ordinal_period(text, i) {
                continue;
            }
            return Some(i);
        }
    }
    None
}

/// Find the next split point at or after `start`.
///
/// Scans forward through the `[start, start + max_len)` window. Inside the
/// window a newline splits only when the following non-space run opens with
/// an ASCII digit — a new list item starting, which must not be merged into
/// the previous sentence. Any other code point in `set` splits, ordinal
/// periods excepted. When the window is exhausted the scan continues without
/// a length cap so an overlong clause still ends at its first real boundary;
/// `max_len == 0` means no window cap at all.
pub fn next_split_point(
    text: &[char],
    start: usize,
    max_len: usize,
    set: SeparatorSet,
) -> Option<usize> {
    let window_end = if max_len == 0 {
        text.len()
    } else {
        text.len().min(start.saturating_add(max_len))
    };

    let mut i = start;
    while i < window_end {
        let ch = text[i];

        if ch == '\n' {
            let mut next = i + 1;
            while next < window_end && matches!(text[next], ' ' | '\t') {
                next += 1;
            }
            if next < window_end && text[next].is_ascii_digit() {
                return Some(i);
            }
            i += 1;
            continue;
        }

        if set.contains(ch) {
            if ch == '.' && is_ordinal_period(text, i) {
                i += 1;
                continue;
            }
            return Some(i);
        }

        i += 1;
    }

    // Nothing inside the window: take the first boundary in the rest of the
    // text, where a bare newline also counts.
    for i in window_end..text.len() {
        let ch = text[i];
        if ch == '\n' || set.contains(ch) {
            if ch == '.' && is_ordinal_period(text, i) {
                continue;
            }
            return Some(i);
        }
    }

    None
}
