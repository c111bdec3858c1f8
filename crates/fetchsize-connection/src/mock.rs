//! In-memory driver for tests and benchmarks.
//!
//! [`MockConnection`] records every call it receives and keeps a small amount
//! of session state so forwarded getters and setters can be observed. Failures
//! can be injected per surface (factories, fetch-size assignment, session).

use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;

use crate::driver::{
    AutoGeneratedKeys, Connection, ResultSetConcurrency, ResultSetHoldability, ResultSetType,
    Statement, TransactionIsolation,
};
use crate::fetch_size::FetchSize;

/// Errors raised by the mock driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MockError {
    #[error("statement factory '{operation}' rejected by driver")]
    Factory { operation: &'static str },

    #[error("driver rejected fetch size {rows}")]
    FetchSize { rows: FetchSize },

    #[error("session operation '{operation}' rejected by driver")]
    Session { operation: &'static str },

    #[error("connection is closed")]
    Closed,
}

/// One call received by a [`MockConnection`], with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateStatement,
    CreateStatementWith(ResultSetType, ResultSetConcurrency),
    CreateStatementWithHoldability(ResultSetType, ResultSetConcurrency, ResultSetHoldability),
    PrepareStatement(String),
    PrepareStatementWith(String, ResultSetType, ResultSetConcurrency),
    PrepareStatementWithHoldability(
        String,
        ResultSetType,
        ResultSetConcurrency,
        ResultSetHoldability,
    ),
    PrepareStatementWithGeneratedKeys(String, AutoGeneratedKeys),
    PrepareStatementWithColumnIndexes(String, Vec<usize>),
    PrepareStatementWithColumnNames(String, Vec<String>),
    PrepareCall(String),
    PrepareCallWith(String, ResultSetType, ResultSetConcurrency),
    PrepareCallWithHoldability(
        String,
        ResultSetType,
        ResultSetConcurrency,
        ResultSetHoldability,
    ),
    Commit,
    Rollback,
    Close,
    IsClosed,
    IsValid(Duration),
    AutoCommit,
    SetAutoCommit(bool),
    IsReadOnly,
    SetReadOnly(bool),
    TransactionIsolation,
    SetTransactionIsolation(TransactionIsolation),
    Holdability,
    SetHoldability(ResultSetHoldability),
    Catalog,
    SetCatalog(String),
    Schema,
    SetSchema(String),
    NativeSql(String),
    Metadata,
}

/// Which factory family produced a [`MockStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Plain,
    Prepared,
    Callable,
}

/// Statement handle produced by [`MockConnection`].
#[derive(Debug, Clone)]
pub struct MockStatement {
    kind: StatementKind,
    sql: Option<String>,
    fetch_size: FetchSize,
    fetch_size_assignments: usize,
    reject_fetch_size: bool,
}

impl MockStatement {
    fn new(kind: StatementKind, sql: Option<&str>, reject_fetch_size: bool) -> Self {
        Self {
            kind,
            sql: sql.map(str::to_owned),
            fetch_size: FetchSize::DRIVER_DEFAULT,
            fetch_size_assignments: 0,
            reject_fetch_size,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// SQL text the statement was created with, if any.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// How many times `set_fetch_size` succeeded on this handle.
    #[must_use]
    pub const fn fetch_size_assignments(&self) -> usize {
        self.fetch_size_assignments
    }
}

impl Statement for MockStatement {
    type Error = MockError;

    fn set_fetch_size(&mut self, rows: FetchSize) -> Result<(), MockError> {
        if self.reject_fetch_size {
            return Err(MockError::FetchSize { rows });
        }
        self.fetch_size = rows;
        self.fetch_size_assignments += 1;
        Ok(())
    }

    fn fetch_size(&self) -> Result<FetchSize, MockError> {
        Ok(self.fetch_size)
    }
}

/// Metadata returned by [`MockConnection::metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockMetadata {
    pub product_name: String,
    pub product_version: String,
}

#[derive(Debug)]
struct Session {
    closed: bool,
    auto_commit: bool,
    read_only: bool,
    isolation: TransactionIsolation,
    holdability: ResultSetHoldability,
    catalog: Option<String>,
    schema: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            closed: false,
            auto_commit: true,
            read_only: false,
            isolation: TransactionIsolation::ReadCommitted,
            holdability: ResultSetHoldability::CloseCursorsAtCommit,
            catalog: None,
            schema: None,
        }
    }
}

/// Recording in-memory connection.
#[derive(Debug, Default)]
pub struct MockConnection {
    calls: Mutex<Vec<Call>>,
    session: Mutex<Session>,
    fail_factories: bool,
    fail_fetch_size: bool,
    fail_session: bool,
}

impl MockConnection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every statement factory returns [`MockError::Factory`].
    #[must_use]
    pub const fn with_factory_failure(mut self) -> Self {
        self.fail_factories = true;
        self
    }

    /// Statements reject `set_fetch_size` with [`MockError::FetchSize`].
    #[must_use]
    pub const fn with_fetch_size_failure(mut self) -> Self {
        self.fail_fetch_size = true;
        self
    }

    /// Every non-factory operation returns [`MockError::Session`].
    #[must_use]
    pub const fn with_session_failure(mut self) -> Self {
        self.fail_session = true;
        self
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn factory(
        &self,
        call: Call,
        operation: &'static str,
        kind: StatementKind,
        sql: Option<&str>,
    ) -> Result<MockStatement, MockError> {
        self.calls.lock().push(call);
        if self.session.lock().closed {
            return Err(MockError::Closed);
        }
        if self.fail_factories {
            return Err(MockError::Factory { operation });
        }
        Ok(MockStatement::new(kind, sql, self.fail_fetch_size))
    }

    fn session<T>(
        &self,
        call: Call,
        operation: &'static str,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, MockError> {
        self.calls.lock().push(call);
        if self.fail_session {
            return Err(MockError::Session { operation });
        }
        let mut session = self.session.lock();
        if session.closed && operation != "close" && operation != "is_closed" {
            return Err(MockError::Closed);
        }
        Ok(f(&mut session))
    }
}

impl Connection for MockConnection {
    type Error = MockError;
    type Statement = MockStatement;
    type PreparedStatement = MockStatement;
    type CallableStatement = MockStatement;
    type Metadata = MockMetadata;

    fn create_statement(&self) -> Result<MockStatement, MockError> {
        self.factory(
            Call::CreateStatement,
            "create_statement",
            StatementKind::Plain,
            None,
        )
    }

    fn create_statement_with(
        &self,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::CreateStatementWith(result_set_type, concurrency),
            "create_statement_with",
            StatementKind::Plain,
            None,
        )
    }

    fn create_statement_with_holdability(
        &self,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::CreateStatementWithHoldability(result_set_type, concurrency, holdability),
            "create_statement_with_holdability",
            StatementKind::Plain,
            None,
        )
    }

    fn prepare_statement(&self, sql: &str) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareStatement(sql.to_owned()),
            "prepare_statement",
            StatementKind::Prepared,
            Some(sql),
        )
    }

    fn prepare_statement_with(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareStatementWith(sql.to_owned(), result_set_type, concurrency),
            "prepare_statement_with",
            StatementKind::Prepared,
            Some(sql),
        )
    }

    fn prepare_statement_with_holdability(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareStatementWithHoldability(
                sql.to_owned(),
                result_set_type,
                concurrency,
                holdability,
            ),
            "prepare_statement_with_holdability",
            StatementKind::Prepared,
            Some(sql),
        )
    }

    fn prepare_statement_with_generated_keys(
        &self,
        sql: &str,
        generated_keys: AutoGeneratedKeys,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareStatementWithGeneratedKeys(sql.to_owned(), generated_keys),
            "prepare_statement_with_generated_keys",
            StatementKind::Prepared,
            Some(sql),
        )
    }

    fn prepare_statement_with_column_indexes(
        &self,
        sql: &str,
        column_indexes: &[usize],
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareStatementWithColumnIndexes(sql.to_owned(), column_indexes.to_vec()),
            "prepare_statement_with_column_indexes",
            StatementKind::Prepared,
            Some(sql),
        )
    }

    fn prepare_statement_with_column_names(
        &self,
        sql: &str,
        column_names: &[&str],
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareStatementWithColumnNames(
                sql.to_owned(),
                column_names.iter().map(|&name| name.to_owned()).collect(),
            ),
            "prepare_statement_with_column_names",
            StatementKind::Prepared,
            Some(sql),
        )
    }

    fn prepare_call(&self, sql: &str) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareCall(sql.to_owned()),
            "prepare_call",
            StatementKind::Callable,
            Some(sql),
        )
    }

    fn prepare_call_with(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareCallWith(sql.to_owned(), result_set_type, concurrency),
            "prepare_call_with",
            StatementKind::Callable,
            Some(sql),
        )
    }

    fn prepare_call_with_holdability(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<MockStatement, MockError> {
        self.factory(
            Call::PrepareCallWithHoldability(
                sql.to_owned(),
                result_set_type,
                concurrency,
                holdability,
            ),
            "prepare_call_with_holdability",
            StatementKind::Callable,
            Some(sql),
        )
    }

    fn commit(&self) -> Result<(), MockError> {
        self.session(Call::Commit, "commit", |_| ())
    }

    fn rollback(&self) -> Result<(), MockError> {
        self.session(Call::Rollback, "rollback", |_| ())
    }

    fn close(&self) -> Result<(), MockError> {
        self.session(Call::Close, "close", |s| s.closed = true)
    }

    fn is_closed(&self) -> Result<bool, MockError> {
        self.session(Call::IsClosed, "is_closed", |s| s.closed)
    }

    fn is_valid(&self, timeout: Duration) -> Result<bool, MockError> {
        self.session(Call::IsValid(timeout), "is_valid", |_| true)
    }

    fn auto_commit(&self) -> Result<bool, MockError> {
        self.session(Call::AutoCommit, "auto_commit", |s| s.auto_commit)
    }

    fn set_auto_commit(&self, auto_commit: bool) -> Result<(), MockError> {
        self.session(Call::SetAutoCommit(auto_commit), "set_auto_commit", |s| {
            s.auto_commit = auto_commit;
        })
    }

    fn is_read_only(&self) -> Result<bool, MockError> {
        self.session(Call::IsReadOnly, "is_read_only", |s| s.read_only)
    }

    fn set_read_only(&self, read_only: bool) -> Result<(), MockError> {
        self.session(Call::SetReadOnly(read_only), "set_read_only", |s| {
            s.read_only = read_only;
        })
    }

    fn transaction_isolation(&self) -> Result<TransactionIsolation, MockError> {
        self.session(Call::TransactionIsolation, "transaction_isolation", |s| {
            s.isolation
        })
    }

    fn set_transaction_isolation(&self, level: TransactionIsolation) -> Result<(), MockError> {
        self.session(
            Call::SetTransactionIsolation(level),
            "set_transaction_isolation",
            |s| s.isolation = level,
        )
    }

    fn holdability(&self) -> Result<ResultSetHoldability, MockError> {
        self.session(Call::Holdability, "holdability", |s| s.holdability)
    }

    fn set_holdability(&self, holdability: ResultSetHoldability) -> Result<(), MockError> {
        self.session(Call::SetHoldability(holdability), "set_holdability", |s| {
            s.holdability = holdability;
        })
    }

    fn catalog(&self) -> Result<Option<String>, MockError> {
        self.session(Call::Catalog, "catalog", |s| s.catalog.clone())
    }

    fn set_catalog(&self, catalog: &str) -> Result<(), MockError> {
        self.session(Call::SetCatalog(catalog.to_owned()), "set_catalog", |s| {
            s.catalog = Some(catalog.to_owned());
        })
    }

    fn schema(&self) -> Result<Option<String>, MockError> {
        self.session(Call::Schema, "schema", |s| s.schema.clone())
    }

    fn set_schema(&self, schema: &str) -> Result<(), MockError> {
        self.session(Call::SetSchema(schema.to_owned()), "set_schema", |s| {
            s.schema = Some(schema.to_owned());
        })
    }

    fn native_sql(&self, sql: &str) -> Result<String, MockError> {
        self.session(Call::NativeSql(sql.to_owned()), "native_sql", |_| {
            sql.trim().to_owned()
        })
    }

    fn metadata(&self) -> Result<MockMetadata, MockError> {
        self.session(Call::Metadata, "metadata", |_| MockMetadata {
            product_name: "MockDB".to_owned(),
            product_version: "1.0".to_owned(),
        })
    }
}
