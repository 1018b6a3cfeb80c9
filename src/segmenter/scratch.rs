// WHY: Extraction runs once per token-stream delta; reusing scratch buffers
// keeps sustained streaming load from allocating on every call

use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// Mutable working space for a single extraction call: the decoded
/// code-point buffer and a string for remainder assembly.
#[derive(Debug, Default)]
pub struct Scratch {
    pub chars: Vec<char>,
    pub text: String,
}

/// Concurrency-safe pool of idle scratch buffers.
///
/// A borrowed buffer is exclusively owned by one call for its duration and
/// carries no state between calls: it is emptied on acquisition and handed
/// back when the guard drops, on every exit path.
#[derive(Debug, Default)]
pub struct ScratchPool {
    idle: Mutex<Vec<Scratch>>,
}

impl ScratchPool {
    pub const fn new() -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Borrow a scratch buffer, emptied and grown for `size_hint` code
    /// points. The string side reserves twice the hint, since rejected
    /// segments accumulate there with joining spaces.
    pub fn acquire(&self, size_hint: usize) -> ScratchGuard<'_> {
        let mut scratch = self.lock().pop().unwrap_or_default();
        scratch.chars.clear();
        scratch.text.clear();
        scratch.chars.reserve(size_hint);
        scratch.text.reserve(size_hint.saturating_mul(2));
        ScratchGuard {
            pool: self,
            scratch: Some(scratch),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Scratch>> {
        // A poisoned lock only means a borrower panicked; the idle buffers
        // themselves are still consistent.
        self.idle.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Exclusive borrow of a pooled [`Scratch`]; returns it to the pool on drop.
pub struct ScratchGuard<'a> {
    pool: &'a ScratchPool,
    scratch: Option<Scratch>,
}

impl Deref for ScratchGuard<'_> {
    type Target = Scratch;

    fn deref(&self) -> &Scratch {
        self.scratch.as_ref().expect("scratch taken before drop")
    }
}

impl DerefMut for ScratchGuard<'_> {
    fn deref_mut(&mut self) -> &mut Scratch {
        self.scratch.as_mut().expect("scratch taken before drop")
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            self.pool.lock().push(scratch);
        }
    }
}

/// Shared pool used by the extraction entry points.
pub static SCRATCH_POOL: ScratchPool = ScratchPool::new();
