// WHY: The remainder hand-off between extraction calls is part of the
// contract, not caller boilerplate; this adapter owns it so every consumer
// chunks a token stream the same way

use anyhow::Result;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::segmenter::{
    contains_sentence_separator, extract_complete_sentences, extract_smart_sentences,
};

/// Tuning for windowed extraction across a token stream.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Segments shorter than this many code points are deferred.
    pub min_sentence_len: usize,
    /// Split-point search window; 0 lifts the cap.
    pub max_sentence_len: usize,
    /// Allow pause punctuation until the first sentence is out, shortening
    /// time-to-first-audio.
    pub eager_first: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            min_sentence_len: 6,
            max_sentence_len: 200,
            eager_first: true,
        }
    }
}

/// Incremental segmenter that carries the unfinished tail between chunks.
///
/// Feed each language-model delta to [`push`](Self::push); completed
/// sentences come back in source order. Call [`finish`](Self::finish) once
/// the stream ends to flush whatever is still pending.
#[derive(Debug)]
pub struct StreamSegmenter {
    config: StreamConfig,
    carry: String,
    emitted_any: bool,
}

impl StreamSegmenter {
    pub fn new(config: StreamConfig) -> Self {
        Self {
            config,
            carry: String::new(),
            emitted_any: false,
        }
    }

    /// Whether the next extraction still runs in first-pass mode.
    fn first_pass(&self) -> bool {
        self.config.eager_first && !self.emitted_any
    }

    /// Unconsumed text currently carried toward the next chunk.
    pub fn pending(&self) -> &str {
        &self.carry
    }

    /// Append one chunk and return the sentences it completed.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.carry.push_str(chunk);

        // No boundary in the carry means no sentence can be complete yet
        if !contains_sentence_separator(&self.carry, self.first_pass()) {
            trace!(carry_len = self.carry.len(), "no separator yet");
            return Vec::new();
        }

        let (sentences, remainder) = extract_smart_sentences(
            &self.carry,
            self.config.min_sentence_len,
            self.config.max_sentence_len,
            self.first_pass(),
        );
        self.carry = remainder;
        if !sentences.is_empty() {
            self.emitted_any = true;
        }
        sentences
    }

    /// Flush the carried tail at end of stream.
    ///
    /// Runs one eager extraction over the carry and emits any leftover
    /// remainder as a final sentence, so no text is ever dropped.
    pub fn finish(&mut self) -> Vec<String> {
        let carry = std::mem::take(&mut self.carry);
        if carry.trim().is_empty() {
            return Vec::new();
        }
        let (mut sentences, remainder) = extract_complete_sentences(&carry);
        if !remainder.is_empty() {
            sentences.push(remainder);
        }
        if !sentences.is_empty() {
            self.emitted_any = true;
        }
        sentences
    }
}

/// Drive a chunk stream into a sentence channel.
///
/// Consumes `chunks` to exhaustion, sending each completed sentence through
/// `out` as soon as it is available, then flushes the tail. A dropped
/// receiver stops the stream early without error, since the consumer has
/// simply gone away.
pub async fn segment_stream<S>(
    mut chunks: S,
    config: StreamConfig,
    out: mpsc::Sender<String>,
) -> Result<()>
where
    S: Stream<Item = String> + Unpin,
{
    let mut segmenter = StreamSegmenter::new(config);

    while let Some(chunk) = chunks.next().await {
        for sentence in segmenter.push(&chunk) {
            if out.send(sentence).await.is_err() {
                debug!("sentence receiver dropped, stopping segmentation");
                return Ok(());
            }
        }
    }

    for sentence in segmenter.finish() {
        if out.send(sentence).await.is_err() {
            debug!("sentence receiver dropped during flush");
            return Ok(());
        }
    }

    Ok(())
}
