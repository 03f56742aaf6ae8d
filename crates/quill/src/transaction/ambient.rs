use super::Root;

use quill_core::{Error, Result};
use std::{cell::RefCell, future::Future, sync::Arc};

tokio::task_local! {
    /// Open root transaction of the current call chain.
    static AMBIENT: RefCell<Option<Arc<Root>>>;
}

/// Runs `fut` as one logical call chain.
///
/// Transaction scopes opened while `fut` runs share one ambient root; other
/// chains, including ones running concurrently on the same thread, never
/// observe it. Nested calls reuse the enclosing chain.
pub async fn call_chain<F: Future>(fut: F) -> F::Output {
    if in_call_chain() {
        fut.await
    } else {
        AMBIENT.scope(RefCell::new(None), fut).await
    }
}

pub(super) fn in_call_chain() -> bool {
    AMBIENT.try_with(|_| ()).is_ok()
}

/// The open root of the current call chain, if any.
pub(crate) fn current() -> Option<Arc<Root>> {
    AMBIENT
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .filter(|root| root.is_open())
}

pub(super) fn set(root: Arc<Root>) -> Result<()> {
    AMBIENT
        .try_with(|cell| *cell.borrow_mut() = Some(root))
        .map_err(|_| Error::transaction_state("no ambient call chain"))
}

/// Clears the ambient pointer if it still refers to `root`. A no-op outside
/// the chain that opened it.
pub(super) fn clear(root: &Arc<Root>) {
    let _ = AMBIENT.try_with(|cell| {
        let mut cell = cell.borrow_mut();

        if cell.as_ref().is_some_and(|current| Arc::ptr_eq(current, root)) {
            *cell = None;
        }
    });
}
