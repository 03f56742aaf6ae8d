mod ambient;
pub use ambient::call_chain;

use crate::Db;

use quill_core::{
    driver::{operation::Transaction as TransactionOp, Connection, Operation, Response},
    Error, Result,
};
use quill_sql::Serializer;
use std::sync::{
    atomic::{AtomicU64, AtomicU8, Ordering},
    Arc,
};
use tokio::sync::Mutex;
use tracing::{debug, warn};

static NEXT_ROOT_ID: AtomicU64 = AtomicU64::new(0);

const OPEN: u8 = 0;
const COMMITTED: u8 = 1;
const ROLLED_BACK: u8 = 2;

/// A logical transaction boundary bound to the current call chain.
///
/// The first scope opened in a chain is the root: it owns one connection and
/// one physical transaction. Scopes opened while the root is live are nested
/// and only delegate to it.
///
/// Only the root's [`complete`](Self::complete) commits. Cancelling, or
/// disposing without completing, any scope at any depth rolls the physical
/// transaction back. A scope dropped without either is rolled back from a
/// spawned task.
#[derive(Debug)]
pub struct TransactionScope {
    root: Arc<Root>,

    /// Whether this scope opened the physical transaction.
    is_root: bool,

    completed: bool,
    disposed: bool,
}

/// The physical transaction shared by every scope of a call chain.
#[derive(Debug)]
pub(crate) struct Root {
    id: u64,

    /// `None` once the transaction ended
    connection: Mutex<Option<Box<dyn Connection>>>,

    /// Leaves `OPEN` exactly once, by whichever scope ends the transaction
    state: AtomicU8,

    /// Renders transaction control for logs
    serializer: Serializer,
}

impl TransactionScope {
    pub(crate) async fn begin(db: &Db) -> Result<TransactionScope> {
        if !ambient::in_call_chain() {
            return Err(Error::transaction_state(
                "transaction scope opened outside a call chain",
            ));
        }

        if let Some(root) = ambient::current() {
            debug!(root = root.id, "joining ambient transaction");
            return Ok(TransactionScope::new(root, false));
        }

        let connection = db
            .with_timeout(async {
                let mut connection = db.driver.connect().await?;
                connection.exec(TransactionOp::Start.into()).await?;
                Ok::<_, Error>(connection)
            })
            .await?;

        let root = Arc::new(Root {
            id: NEXT_ROOT_ID.fetch_add(1, Ordering::Relaxed),
            connection: Mutex::new(Some(connection)),
            state: AtomicU8::new(OPEN),
            serializer: db.serializer.clone(),
        });

        debug!(
            root = root.id,
            sql = %root.serializer.serialize_transaction(&TransactionOp::Start),
            "began transaction"
        );

        ambient::set(root.clone())?;

        Ok(TransactionScope::new(root, true))
    }

    fn new(root: Arc<Root>, is_root: bool) -> TransactionScope {
        TransactionScope {
            root,
            is_root,
            completed: false,
            disposed: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Whether the physical transaction is still running.
    pub fn is_active(&self) -> bool {
        self.root.is_open()
    }

    /// Marks the scope's work as successful.
    ///
    /// On the root this commits the physical transaction. On a nested scope
    /// it only records the intent; the root decides. Fails if the
    /// transaction was already rolled back through another scope.
    pub async fn complete(&mut self) -> Result<()> {
        if self.completed {
            return Ok(());
        }

        if !self.is_root {
            self.root.ensure_open()?;
            self.completed = true;
            return Ok(());
        }

        ambient::clear(&self.root);

        if !self.root.close(COMMITTED) {
            return self.root.ensure_open();
        }

        self.completed = true;
        self.root.finish(TransactionOp::Commit).await
    }

    /// Rolls the physical transaction back, whatever the scope's depth.
    pub async fn cancel(mut self) -> Result<()> {
        self.disposed = true;
        self.rollback().await
    }

    /// Ends the scope. A completed scope is left alone; otherwise the
    /// physical transaction is rolled back.
    pub async fn dispose(mut self) -> Result<()> {
        self.disposed = true;

        if self.completed {
            return Ok(());
        }

        self.rollback().await
    }

    async fn rollback(&self) -> Result<()> {
        ambient::clear(&self.root);

        if !self.root.close(ROLLED_BACK) {
            return Ok(());
        }

        self.root.finish(TransactionOp::Rollback).await
    }
}

impl Drop for TransactionScope {
    fn drop(&mut self) {
        if self.completed || self.disposed {
            return;
        }

        ambient::clear(&self.root);

        if !self.root.close(ROLLED_BACK) {
            return;
        }

        warn!(
            root = self.root.id,
            "transaction scope dropped without completing; rolling back"
        );

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let root = self.root.clone();
                handle.spawn(async move {
                    if let Err(err) = root.finish(TransactionOp::Rollback).await {
                        warn!(root = root.id, error = %err, "rollback of dropped scope failed");
                    }
                });
            }
            Err(_) => {
                warn!(
                    root = self.root.id,
                    "no runtime to roll back on; closing connection instead"
                );
            }
        }
    }
}

impl Root {
    pub(crate) fn is_open(&self) -> bool {
        self.state.load(Ordering::Acquire) == OPEN
    }

    /// Fails with how the transaction ended, if it did.
    fn ensure_open(&self) -> Result<()> {
        match self.state.load(Ordering::Acquire) {
            OPEN => Ok(()),
            COMMITTED => Err(Error::transaction_state("transaction already committed")),
            _ => Err(Error::transaction_state("transaction already rolled back")),
        }
    }

    /// Records `outcome`. Returns `true` for the one caller that gets to end
    /// the transaction.
    fn close(&self, outcome: u8) -> bool {
        self.state
            .compare_exchange(OPEN, outcome, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Runs a statement on the transaction's connection.
    pub(crate) async fn exec(&self, op: Operation) -> Result<Response> {
        let mut connection = self.connection.lock().await;

        match connection.as_mut() {
            Some(connection) => connection.exec(op).await,
            None => Err(Error::transaction_state("transaction already ended")),
        }
    }

    /// Sends `op` and releases the connection.
    async fn finish(&self, op: TransactionOp) -> Result<()> {
        let Some(mut connection) = self.connection.lock().await.take() else {
            return Err(Error::transaction_state("transaction already ended"));
        };

        debug!(
            root = self.id,
            sql = %self.serializer.serialize_transaction(&op),
            "ending transaction"
        );

        connection.exec(op.into()).await?;
        Ok(())
    }
}

pub(crate) fn current_root() -> Option<Arc<Root>> {
    ambient::current()
}
