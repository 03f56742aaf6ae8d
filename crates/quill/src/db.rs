mod builder;
pub use builder::Builder;

use crate::transaction::{self, TransactionScope};

use quill_core::{
    driver::{operation::Operation, Driver, Rows},
    stmt::Value,
    Error, Model, Result,
};
use quill_sql::{Compiled, Flavor, Probe, Query, Serializer, Statement};
use std::{future::Future, sync::Arc, time::Duration};

/// Executes compiled statements through a [`Driver`].
///
/// Statements run on the ambient transaction's connection when the current
/// call chain has one open, otherwise on a fresh connection per call.
#[derive(Debug, Clone)]
pub struct Db {
    /// Handle to the underlying database driver.
    pub(crate) driver: Arc<dyn Driver>,

    /// Compiles statements for the driver's flavor.
    pub(crate) serializer: Serializer,

    /// Applied to every statement, including transaction control.
    pub(crate) command_timeout: Option<Duration>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new(driver: impl Driver, serializer: Serializer) -> Db {
        Db {
            driver: Arc::new(driver),
            serializer,
            command_timeout: None,
        }
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    pub fn flavor(&self) -> Flavor {
        self.serializer.flavor()
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout
    }

    /// Creates the table backing `M` and its indices.
    pub async fn create_table<M: Model>(&self) -> Result<()> {
        let model = M::definition();

        self.exec(&Statement::create_table(model.clone())).await?;

        for stmt in Statement::create_indices(&model) {
            self.exec(&stmt).await?;
        }

        Ok(())
    }

    pub async fn drop_table<M: Model>(&self) -> Result<()> {
        self.exec(&Statement::drop_table(M::definition())).await?;
        Ok(())
    }

    /// Inserts `records` and returns the generated identity, if the table has
    /// an auto-increment key. For a multi-row insert this is the identity of
    /// the last row.
    pub async fn insert<M: Model>(&self, records: &[M]) -> Result<Option<Value>> {
        let stmt = Statement::insert(records);

        if !stmt.intent().is_scalar() {
            self.exec(&stmt).await?;
            return Ok(None);
        }

        let identity = match self.exec(&stmt).await? {
            Rows::Scalar(value) => Some(value),
            Rows::Values(rows) => rows.into_iter().last().and_then(|row| row.into_iter().next()),
            Rows::Count(_) => None,
        };

        Ok(identity.filter(|value| !value.is_null()))
    }

    /// Writes every column of `record`, matching its row by primary key.
    pub async fn update<M: Model>(&self, record: &M) -> Result<u64> {
        self.execute(&Statement::update_record(record)).await
    }

    pub async fn delete<M: Model>(&self, record: &M) -> Result<u64> {
        self.execute(&Statement::delete_record(record)).await
    }

    /// Rows matching `query`, one `Vec` of projected values per row.
    pub async fn all<M: Model>(&self, query: &Query<M>) -> Result<Vec<Vec<Value>>> {
        self.query(&query.to_select()).await
    }

    pub async fn count<M: Model>(&self, query: &Query<M>) -> Result<i64> {
        self.scalar(&query.to_count())
            .await?
            .as_i64()
            .ok_or_else(|| quill_core::err!("COUNT returned a non-integer value"))
    }

    pub async fn table_exists<M: Model>(&self) -> Result<bool> {
        let model = M::definition();
        let probe = self.serializer.table_exists(&model);
        self.probe(probe, model.effective_name()).await
    }

    pub async fn sequence_exists(&self, name: &str, schema: Option<&str>) -> Result<bool> {
        let probe = self.serializer.sequence_exists(name, schema);
        self.probe(probe, name).await
    }

    /// Runs a statement returning the number of rows it affected.
    pub async fn execute(&self, stmt: &Statement) -> Result<u64> {
        self.exec(stmt).await?.into_count()
    }

    pub async fn query(&self, stmt: &Statement) -> Result<Vec<Vec<Value>>> {
        self.exec(stmt).await?.into_values()
    }

    pub async fn scalar(&self, stmt: &Statement) -> Result<Value> {
        self.exec(stmt).await?.into_scalar()
    }

    /// Compile and execute a statement.
    ///
    /// Driver failures are wrapped in [`Error::execution_failed`] naming the
    /// statement kind and target table.
    pub async fn exec(&self, stmt: &Statement) -> Result<Rows> {
        let compiled = self.serializer.serialize(stmt)?;
        let table = self.serializer.table_name(stmt.model());
        self.exec_compiled(stmt.kind_name(), &table, compiled).await
    }

    /// Execute already compiled SQL. `kind` and `table` only label failures.
    pub async fn exec_compiled(
        &self,
        kind: &'static str,
        table: &str,
        compiled: Compiled,
    ) -> Result<Rows> {
        tracing::debug!(sql = %compiled.sql, params = compiled.params.len(), "executing statement");

        let op = Operation::QuerySql(compiled.into_operation(self.command_timeout));

        let res = match transaction::current_root() {
            Some(root) => self.with_timeout(root.exec(op)).await,
            None => {
                self.with_timeout(async {
                    let mut connection = self.driver.connect().await?;
                    connection.exec(op).await
                })
                .await
            }
        };

        match res {
            Ok(response) => Ok(response.rows),
            Err(err) if err.is_command_timed_out() => Err(err),
            Err(err) => Err(err.context(Error::execution_failed(kind, table))),
        }
    }

    /// Open a transaction scope in the current call chain.
    ///
    /// The first scope of a chain begins a physical transaction; scopes
    /// opened while it is live join it.
    pub async fn scope(&self) -> Result<TransactionScope> {
        TransactionScope::begin(self).await
    }

    /// Runs `work` inside a transaction scope, completing it when `work`
    /// succeeds and cancelling it otherwise. Establishes a call chain if the
    /// caller is not already running inside one.
    pub async fn transaction<O>(&self, work: impl Future<Output = Result<O>>) -> Result<O> {
        transaction::call_chain(async {
            let mut scope = self.scope().await?;

            match work.await {
                Ok(value) => {
                    scope.complete().await?;
                    scope.dispose().await?;
                    Ok(value)
                }
                Err(err) => {
                    scope.cancel().await?;
                    Err(err)
                }
            }
        })
        .await
    }

    pub(crate) async fn with_timeout<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let Some(duration) = self.command_timeout else {
            return fut.await;
        };

        match tokio::time::timeout(duration, fut).await {
            Ok(res) => res,
            Err(_) => Err(Error::command_timed_out(duration)),
        }
    }

    async fn probe(&self, probe: Probe, table: &str) -> Result<bool> {
        match probe {
            Probe::Constant(exists) => Ok(exists),
            Probe::Query(compiled) => {
                let count = self
                    .exec_compiled("SELECT", table, compiled)
                    .await?
                    .into_scalar()?;

                Ok(count.as_i64().is_some_and(|count| count > 0))
            }
        }
    }
}
