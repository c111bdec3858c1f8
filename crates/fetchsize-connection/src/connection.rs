//! Connection decorator that applies a fixed fetch size to new statements.

use std::time::Duration;

use crate::driver::{
    AutoGeneratedKeys, Connection, ResultSetConcurrency, ResultSetHoldability, ResultSetType,
    Statement, TransactionIsolation,
};
use crate::fetch_size::FetchSize;

/// Wraps a [`Connection`] so that every statement it creates carries the same
/// fetch-size hint.
///
/// The twelve statement factories delegate to the wrapped connection with the
/// same arguments, then call [`Statement::set_fetch_size`] on the result.
/// Everything else is forwarded untouched. Errors from either step are the
/// driver's own and are returned as-is.
///
/// The wrapper owns `C`, which may itself be a borrow or an `Arc`, so the
/// caller decides who closes the session. Statements are never retained.
///
/// # Example
///
/// ```rust,ignore
/// use fetchsize_connection::{Connection, FetchSize, FetchSizeConnection};
///
/// let conn = FetchSizeConnection::new(&driver_conn, FetchSize::new(500));
/// let stmt = conn.prepare_statement("SELECT * FROM ORDERS")?;
/// assert_eq!(stmt.fetch_size()?, FetchSize::new(500));
/// ```
#[derive(Debug, Clone)]
pub struct FetchSizeConnection<C> {
    inner: C,
    fetch_size: FetchSize,
}

impl<C> FetchSizeConnection<C> {
    pub const fn new(inner: C, fetch_size: FetchSize) -> Self {
        Self { inner, fetch_size }
    }

    /// Fetch size applied to every statement created through this wrapper.
    #[must_use]
    pub const fn fetch_size(&self) -> FetchSize {
        self.fetch_size
    }

    #[must_use]
    pub const fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwrap, returning the delegate.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Connection> FetchSizeConnection<C> {
    fn apply<S>(&self, operation: &'static str, created: Result<S, C::Error>) -> Result<S, C::Error>
    where
        S: Statement<Error = C::Error>,
    {
        let mut stmt = created.inspect_err(|e| {
            tracing::debug!(db.operation = operation, error = %e, "statement creation failed");
        })?;

        if let Err(e) = stmt.set_fetch_size(self.fetch_size) {
            tracing::debug!(
                db.operation = operation,
                db.fetch_size = self.fetch_size.get(),
                error = %e,
                "fetch size rejected by driver",
            );
            return Err(e);
        }

        tracing::trace!(
            db.operation = operation,
            db.fetch_size = self.fetch_size.get(),
            "applied fetch size",
        );
        Ok(stmt)
    }
}

impl<C: Connection> Connection for FetchSizeConnection<C> {
    type Error = C::Error;
    type Statement = C::Statement;
    type PreparedStatement = C::PreparedStatement;
    type CallableStatement = C::CallableStatement;
    type Metadata = C::Metadata;

    // ═══════════════════════════════════════════════════════════════════════
    // Statement factories
    // ═══════════════════════════════════════════════════════════════════════

    fn create_statement(&self) -> Result<Self::Statement, Self::Error> {
        self.apply("create_statement", self.inner.create_statement())
    }

    fn create_statement_with(
        &self,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<Self::Statement, Self::Error> {
        self.apply(
            "create_statement_with",
            self.inner.create_statement_with(result_set_type, concurrency),
        )
    }

    fn create_statement_with_holdability(
        &self,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<Self::Statement, Self::Error> {
        self.apply(
            "create_statement_with_holdability",
            self.inner
                .create_statement_with_holdability(result_set_type, concurrency, holdability),
        )
    }

    fn prepare_statement(&self, sql: &str) -> Result<Self::PreparedStatement, Self::Error> {
        self.apply("prepare_statement", self.inner.prepare_statement(sql))
    }

    fn prepare_statement_with(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<Self::PreparedStatement, Self::Error> {
        self.apply(
            "prepare_statement_with",
            self.inner
                .prepare_statement_with(sql, result_set_type, concurrency),
        )
    }

    fn prepare_statement_with_holdability(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<Self::PreparedStatement, Self::Error> {
        self.apply(
            "prepare_statement_with_holdability",
            self.inner.prepare_statement_with_holdability(
                sql,
                result_set_type,
                concurrency,
                holdability,
            ),
        )
    }

    fn prepare_statement_with_generated_keys(
        &self,
        sql: &str,
        generated_keys: AutoGeneratedKeys,
    ) -> Result<Self::PreparedStatement, Self::Error> {
        self.apply(
            "prepare_statement_with_generated_keys",
            self.inner
                .prepare_statement_with_generated_keys(sql, generated_keys),
        )
    }

    fn prepare_statement_with_column_indexes(
        &self,
        sql: &str,
        column_indexes: &[usize],
    ) -> Result<Self::PreparedStatement, Self::Error> {
        self.apply(
            "prepare_statement_with_column_indexes",
            self.inner
                .prepare_statement_with_column_indexes(sql, column_indexes),
        )
    }

    fn prepare_statement_with_column_names(
        &self,
        sql: &str,
        column_names: &[&str],
    ) -> Result<Self::PreparedStatement, Self::Error> {
        self.apply(
            "prepare_statement_with_column_names",
            self.inner
                .prepare_statement_with_column_names(sql, column_names),
        )
    }

    fn prepare_call(&self, sql: &str) -> Result<Self::CallableStatement, Self::Error> {
        self.apply("prepare_call", self.inner.prepare_call(sql))
    }

    fn prepare_call_with(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<Self::CallableStatement, Self::Error> {
        self.apply(
            "prepare_call_with",
            self.inner
                .prepare_call_with(sql, result_set_type, concurrency),
        )
    }

    fn prepare_call_with_holdability(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<Self::CallableStatement, Self::Error> {
        self.apply(
            "prepare_call_with_holdability",
            self.inner.prepare_call_with_holdability(
                sql,
                result_set_type,
                concurrency,
                holdability,
            ),
        )
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session (forwarded unchanged)
    // ═══════════════════════════════════════════════════════════════════════

    fn commit(&self) -> Result<(), Self::Error> {
        self.inner.commit()
    }

    fn rollback(&self) -> Result<(), Self::Error> {
        self.inner.rollback()
    }

    fn close(&self) -> Result<(), Self::Error> {
        self.inner.close()
    }

    fn is_closed(&self) -> Result<bool, Self::Error> {
        self.inner.is_closed()
    }

    fn is_valid(&self, timeout: Duration) -> Result<bool, Self::Error> {
        self.inner.is_valid(timeout)
    }

    fn auto_commit(&self) -> Result<bool, Self::Error> {
        self.inner.auto_commit()
    }

    fn set_auto_commit(&self, auto_commit: bool) -> Result<(), Self::Error> {
        self.inner.set_auto_commit(auto_commit)
    }

    fn is_read_only(&self) -> Result<bool, Self::Error> {
        self.inner.is_read_only()
    }

    fn set_read_only(&self, read_only: bool) -> Result<(), Self::Error> {
        self.inner.set_read_only(read_only)
    }

    fn transaction_isolation(&self) -> Result<TransactionIsolation, Self::Error> {
        self.inner.transaction_isolation()
    }

    fn set_transaction_isolation(&self, level: TransactionIsolation) -> Result<(), Self::Error> {
        self.inner.set_transaction_isolation(level)
    }

    fn holdability(&self) -> Result<ResultSetHoldability, Self::Error> {
        self.inner.holdability()
    }

    fn set_holdability(&self, holdability: ResultSetHoldability) -> Result<(), Self::Error> {
        self.inner.set_holdability(holdability)
    }

    fn catalog(&self) -> Result<Option<String>, Self::Error> {
        self.inner.catalog()
    }

    fn set_catalog(&self, catalog: &str) -> Result<(), Self::Error> {
        self.inner.set_catalog(catalog)
    }

    fn schema(&self) -> Result<Option<String>, Self::Error> {
        self.inner.schema()
    }

    fn set_schema(&self, schema: &str) -> Result<(), Self::Error> {
        self.inner.set_schema(schema)
    }

    fn native_sql(&self, sql: &str) -> Result<String, Self::Error> {
        self.inner.native_sql(sql)
    }

    fn metadata(&self) -> Result<Self::Metadata, Self::Error> {
        self.inner.metadata()
    }
}
