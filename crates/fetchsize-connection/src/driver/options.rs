//! Statement and session options passed through to the driver.
//!
//! None of these are interpreted by this crate; they exist so that every
//! factory call can be forwarded argument-for-argument.

/// Cursor movement and change visibility of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultSetType {
    /// Cursor moves forward only.
    #[default]
    ForwardOnly,
    /// Scrollable, not sensitive to changes made by others.
    ScrollInsensitive,
    /// Scrollable and sensitive to changes made by others.
    ScrollSensitive,
}

/// Whether a result set may be updated through its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultSetConcurrency {
    #[default]
    ReadOnly,
    Updatable,
}

/// What happens to open cursors when the transaction commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultSetHoldability {
    HoldCursorsOverCommit,
    CloseCursorsAtCommit,
}

/// Whether a prepared statement should make auto-generated keys retrievable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutoGeneratedKeys {
    Return,
    #[default]
    NoReturn,
}

/// Transaction isolation level of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionIsolation {
    /// Driver does not support transactions.
    None,
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}
