//! Scoped enrichment context
//!
//! A per-thread stack of [`EnrichedFields`]. [`EnrichmentScope::push`] puts
//! a frame on the stack and the returned guard removes it on drop, so the
//! frame is gone on every exit path (early return, `?`, unwinding).
//! Backends that cannot take fields as an argument read them with
//! [`current`].
//!
//! Guards are `!Send`: a frame belongs to the thread that pushed it.

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::domain::EnrichedFields;

thread_local! {
    static STACK: RefCell<Vec<EnrichedFields>> = const { RefCell::new(Vec::new()) };
}

/// RAII guard for one pushed frame
#[must_use = "the frame is popped as soon as the guard is dropped"]
#[derive(Debug)]
pub struct EnrichmentScope {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl EnrichmentScope {
    /// Push `fields` onto this thread's stack
    pub fn push(fields: EnrichedFields) -> Self {
        let depth = STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push(fields);
            stack.len()
        });
        Self {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Stack depth including this frame
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for EnrichmentScope {
    fn drop(&mut self) {
        // try_with: the thread-local may already be gone during thread teardown
        let _ = STACK.try_with(|stack| {
            let mut stack = stack.borrow_mut();
            debug_assert_eq!(stack.len(), self.depth, "enrichment scopes released out of order");
            stack.truncate(self.depth - 1);
        });
    }
}

/// Fields of the innermost frame on this thread
pub fn current() -> Option<EnrichedFields> {
    STACK.with(|stack| stack.borrow().last().cloned())
}

/// Number of frames currently pushed on this thread
pub fn depth() -> usize {
    STACK.with(|stack| stack.borrow().len())
}
