//! Capability traits a database driver implements.
//!
//! - [`Connection`] - a live session and its statement factories
//! - [`Statement`] - the part of a statement handle this crate touches
//! - [`options`] - pass-through option enums for the factory overloads
//! - [`forward`] - impls for borrowed, boxed and shared handles
//!
//! Methods take `&self`. A driver that needs mutation behind a shared handle
//! brings its own interior mutability; decorators built on these traits add
//! no synchronization of their own.

pub mod forward;
pub mod options;

use std::time::Duration;

pub use options::{
    AutoGeneratedKeys, ResultSetConcurrency, ResultSetHoldability, ResultSetType,
    TransactionIsolation,
};

use crate::fetch_size::FetchSize;

/// A statement handle produced by a [`Connection`].
///
/// Only the fetch-size hint is part of this trait; executing SQL and walking
/// results stay on the driver's concrete type.
pub trait Statement {
    /// Driver error type.
    type Error: std::error::Error;

    /// Set how many rows the driver should retrieve per round-trip.
    fn set_fetch_size(&mut self, rows: FetchSize) -> Result<(), Self::Error>;

    /// Current fetch-size hint of this statement.
    fn fetch_size(&self) -> Result<FetchSize, Self::Error>;
}

/// A live database session.
///
/// All statement types share the connection's error type, so a failure from
/// either creating a statement or configuring it surfaces as the same driver
/// error.
pub trait Connection {
    /// Driver error type.
    type Error: std::error::Error;

    /// Handle for ad-hoc SQL.
    type Statement: Statement<Error = Self::Error>;

    /// Handle for parameterized, precompiled SQL.
    type PreparedStatement: Statement<Error = Self::Error>;

    /// Handle for stored-procedure invocations.
    type CallableStatement: Statement<Error = Self::Error>;

    /// Database metadata returned by [`Connection::metadata`].
    type Metadata;

    // ═══════════════════════════════════════════════════════════════════
    // Statement factories
    // ═══════════════════════════════════════════════════════════════════

    fn create_statement(&self) -> Result<Self::Statement, Self::Error>;

    fn create_statement_with(
        &self,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<Self::Statement, Self::Error>;

    fn create_statement_with_holdability(
        &self,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<Self::Statement, Self::Error>;

    fn prepare_statement(&self, sql: &str) -> Result<Self::PreparedStatement, Self::Error>;

    fn prepare_statement_with(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<Self::PreparedStatement, Self::Error>;

    fn prepare_statement_with_holdability(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<Self::PreparedStatement, Self::Error>;

    fn prepare_statement_with_generated_keys(
        &self,
        sql: &str,
        generated_keys: AutoGeneratedKeys,
    ) -> Result<Self::PreparedStatement, Self::Error>;

    /// `column_indexes` are 1-based, as in the result set.
    fn prepare_statement_with_column_indexes(
        &self,
        sql: &str,
        column_indexes: &[usize],
    ) -> Result<Self::PreparedStatement, Self::Error>;

    fn prepare_statement_with_column_names(
        &self,
        sql: &str,
        column_names: &[&str],
    ) -> Result<Self::PreparedStatement, Self::Error>;

    fn prepare_call(&self, sql: &str) -> Result<Self::CallableStatement, Self::Error>;

    fn prepare_call_with(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
    ) -> Result<Self::CallableStatement, Self::Error>;

    fn prepare_call_with_holdability(
        &self,
        sql: &str,
        result_set_type: ResultSetType,
        concurrency: ResultSetConcurrency,
        holdability: ResultSetHoldability,
    ) -> Result<Self::CallableStatement, Self::Error>;

    // ═══════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════

    fn commit(&self) -> Result<(), Self::Error>;

    fn rollback(&self) -> Result<(), Self::Error>;

    fn close(&self) -> Result<(), Self::Error>;

    fn is_closed(&self) -> Result<bool, Self::Error>;

    /// Check that the session is still usable, waiting at most `timeout`.
    fn is_valid(&self, timeout: Duration) -> Result<bool, Self::Error>;

    fn auto_commit(&self) -> Result<bool, Self::Error>;

    fn set_auto_commit(&self, auto_commit: bool) -> Result<(), Self::Error>;

    fn is_read_only(&self) -> Result<bool, Self::Error>;

    fn set_read_only(&self, read_only: bool) -> Result<(), Self::Error>;

    fn transaction_isolation(&self) -> Result<TransactionIsolation, Self::Error>;

    fn set_transaction_isolation(&self, level: TransactionIsolation) -> Result<(), Self::Error>;

    fn holdability(&self) -> Result<ResultSetHoldability, Self::Error>;

    fn set_holdability(&self, holdability: ResultSetHoldability) -> Result<(), Self::Error>;

    fn catalog(&self) -> Result<Option<String>, Self::Error>;

    fn set_catalog(&self, catalog: &str) -> Result<(), Self::Error>;

    fn schema(&self) -> Result<Option<String>, Self::Error>;

    fn set_schema(&self, schema: &str) -> Result<(), Self::Error>;

    /// The driver's native form of `sql`.
    fn native_sql(&self, sql: &str) -> Result<String, Self::Error>;

    fn metadata(&self) -> Result<Self::Metadata, Self::Error>;
}
