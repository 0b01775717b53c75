use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Row decode error: {message} {location}")]
    RowDecode {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Column named in a SQLite UNIQUE-constraint failure, if this error
    /// is one. SQLite reports these as "UNIQUE constraint failed:
    /// {table}.{column}".
    pub fn unique_violation_column(&self) -> Option<&str> {
        let Self::Sqlx {
            source: sqlx::Error::Database(db_err),
            ..
        } = self
        else {
            return None;
        };

        let message = db_err.message();
        let columns = message.strip_prefix("UNIQUE constraint failed: ")?;
        // A multi-column constraint lists every column; one column here.
        columns.split(',').next()?.trim().split('.').next_back()
    }

    /// Whether redelivering the same operation could succeed.
    /// Connection, pool, and I/O failures are operational noise; anything
    /// the database itself rejected will be rejected again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlx { source, .. } => matches!(
                source,
                sqlx::Error::Io(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            ),
            Self::Migration { .. } | Self::RowDecode { .. } => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
