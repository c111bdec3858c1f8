//! Pass-through impls for pointer types.
//!
//! A decorator owns whatever handle it is given. These impls let that handle
//! be a borrow (`&C`), a box or an `Arc`, so the caller keeps ownership and
//! lifetime control of the underlying session.

use std::sync::Arc;
use std::time::Duration;

use super::{
    AutoGeneratedKeys, Connection, ResultSetConcurrency, ResultSetHoldability, ResultSetType,
    Statement, TransactionIsolation,
};
use crate::fetch_size::FetchSize;

macro_rules! forward_connection {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<C: Connection + ?Sized> Connection for $ptr {
            type Error = C::Error;
            type Statement = C::Statement;
            type PreparedStatement = C::PreparedStatement;
            type CallableStatement = C::CallableStatement;
            type Metadata = C::Metadata;

            fn create_statement(&self) -> Result<Self::Statement, Self::Error> {
                (**self).create_statement()
            }

            fn create_statement_with(
                &self,
                result_set_type: ResultSetType,
                concurrency: ResultSetConcurrency,
            ) -> Result<Self::Statement, Self::Error> {
                (**self).create_statement_with(result_set_type, concurrency)
            }

            fn create_statement_with_holdability(
                &self,
                result_set_type: ResultSetType,
                concurrency: ResultSetConcurrency,
                holdability: ResultSetHoldability,
            ) -> Result<Self::Statement, Self::Error> {
                (**self).create_statement_with_holdability(result_set_type, concurrency, holdability)
            }

            fn prepare_statement(&self, sql: &str) -> Result<Self::PreparedStatement, Self::Error> {
                (**self).prepare_statement(sql)
            }

            fn prepare_statement_with(
                &self,
                sql: &str,
                result_set_type: ResultSetType,
                concurrency: ResultSetConcurrency,
            ) -> Result<Self::PreparedStatement, Self::Error> {
                (**self).prepare_statement_with(sql, result_set_type, concurrency)
            }

            fn prepare_statement_with_holdability(
                &self,
                sql: &str,
                result_set_type: ResultSetType,
                concurrency: ResultSetConcurrency,
                holdability: ResultSetHoldability,
            ) -> Result<Self::PreparedStatement, Self::Error> {
                (**self).prepare_statement_with_holdability(
                    sql,
                    result_set_type,
                    concurrency,
                    holdability,
                )
            }

            fn prepare_statement_with_generated_keys(
                &self,
                sql: &str,
                generated_keys: AutoGeneratedKeys,
            ) -> Result<Self::PreparedStatement, Self::Error> {
                (**self).prepare_statement_with_generated_keys(sql, generated_keys)
            }

            fn prepare_statement_with_column_indexes(
                &self,
                sql: &str,
                column_indexes: &[usize],
            ) -> Result<Self::PreparedStatement, Self::Error> {
                (**self).prepare_statement_with_column_indexes(sql, column_indexes)
            }

            fn prepare_statement_with_column_names(
                &self,
                sql: &str,
                column_names: &[&str],
            ) -> Result<Self::PreparedStatement, Self::Error> {
                (**self).prepare_statement_with_column_names(sql, column_names)
            }

            fn prepare_call(&self, sql: &str) -> Result<Self::CallableStatement, Self::Error> {
                (**self).prepare_call(sql)
            }

            fn prepare_call_with(
                &self,
                sql: &str,
                result_set_type: ResultSetType,
                concurrency: ResultSetConcurrency,
            ) -> Result<Self::CallableStatement, Self::Error> {
                (**self).prepare_call_with(sql, result_set_type, concurrency)
            }

            fn prepare_call_with_holdability(
                &self,
                sql: &str,
                result_set_type: ResultSetType,
                concurrency: ResultSetConcurrency,
                holdability: ResultSetHoldability,
            ) -> Result<Self::CallableStatement, Self::Error> {
                (**self).prepare_call_with_holdability(sql, result_set_type, concurrency, holdability)
            }

            fn commit(&self) -> Result<(), Self::Error> {
                (**self).commit()
            }

            fn rollback(&self) -> Result<(), Self::Error> {
                (**self).rollback()
            }

            fn close(&self) -> Result<(), Self::Error> {
                (**self).close()
            }

            fn is_closed(&self) -> Result<bool, Self::Error> {
                (**self).is_closed()
            }

            fn is_valid(&self, timeout: Duration) -> Result<bool, Self::Error> {
                (**self).is_valid(timeout)
            }

            fn auto_commit(&self) -> Result<bool, Self::Error> {
                (**self).auto_commit()
            }

            fn set_auto_commit(&self, auto_commit: bool) -> Result<(), Self::Error> {
                (**self).set_auto_commit(auto_commit)
            }

            fn is_read_only(&self) -> Result<bool, Self::Error> {
                (**self).is_read_only()
            }

            fn set_read_only(&self, read_only: bool) -> Result<(), Self::Error> {
                (**self).set_read_only(read_only)
            }

            fn transaction_isolation(&self) -> Result<TransactionIsolation, Self::Error> {
                (**self).transaction_isolation()
            }

            fn set_transaction_isolation(
                &self,
                level: TransactionIsolation,
            ) -> Result<(), Self::Error> {
                (**self).set_transaction_isolation(level)
            }

            fn holdability(&self) -> Result<ResultSetHoldability, Self::Error> {
                (**self).holdability()
            }

            fn set_holdability(&self, holdability: ResultSetHoldability) -> Result<(), Self::Error> {
                (**self).set_holdability(holdability)
            }

            fn catalog(&self) -> Result<Option<String>, Self::Error> {
                (**self).catalog()
            }

            fn set_catalog(&self, catalog: &str) -> Result<(), Self::Error> {
                (**self).set_catalog(catalog)
            }

            fn schema(&self) -> Result<Option<String>, Self::Error> {
                (**self).schema()
            }

            fn set_schema(&self, schema: &str) -> Result<(), Self::Error> {
                (**self).set_schema(schema)
            }

            fn native_sql(&self, sql: &str) -> Result<String, Self::Error> {
                (**self).native_sql(sql)
            }

            fn metadata(&self) -> Result<Self::Metadata, Self::Error> {
                (**self).metadata()
            }
        }
    )+};
}

forward_connection!(&C, Box<C>, Arc<C>);

macro_rules! forward_statement {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<S: Statement + ?Sized> Statement for $ptr {
            type Error = S::Error;

            fn set_fetch_size(&mut self, rows: FetchSize) -> Result<(), Self::Error> {
                (**self).set_fetch_size(rows)
            }

            fn fetch_size(&self) -> Result<FetchSize, Self::Error> {
                (**self).fetch_size()
            }
        }
    )+};
}

forward_statement!(&mut S, Box<S>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockConnection};

    fn assert_forwards<C: Connection>(conn: &C) -> Result<(), C::Error> {
        let mut stmt = conn.prepare_statement("SELECT 1")?;
        stmt.set_fetch_size(FetchSize::new(7))?;
        assert_eq!(stmt.fetch_size()?, FetchSize::new(7));
        conn.commit()
    }

    #[test]
    fn test_borrowed_connection() {
        let conn = MockConnection::new();
        assert_forwards(&&conn).unwrap();
        assert_eq!(
            conn.calls(),
            vec![Call::PrepareStatement("SELECT 1".into()), Call::Commit]
        );
    }

    #[test]
    fn test_boxed_connection() {
        let conn: Box<MockConnection> = Box::new(MockConnection::new());
        assert_forwards(&conn).unwrap();
        assert_eq!(conn.calls().len(), 2);
    }

    #[test]
    fn test_shared_connection() {
        let conn = Arc::new(MockConnection::new());
        let shared = Arc::clone(&conn);
        assert_forwards(&shared).unwrap();
        assert_eq!(conn.calls().len(), 2);
    }

    #[test]
    fn test_borrowed_statement() {
        let conn = MockConnection::new();
        let mut stmt = conn.create_statement().unwrap();
        let mut borrowed = &mut stmt;
        Statement::set_fetch_size(&mut borrowed, FetchSize::new(3)).unwrap();
        assert_eq!(stmt.fetch_size().unwrap(), FetchSize::new(3));
    }
}
