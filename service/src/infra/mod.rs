//! Infrastructure implementations.

pub mod fixture;
#[cfg(feature = "remote")]
pub mod remote;

use std::sync::Arc;

use common::operations::{By, Select};

use crate::domain::Item;
#[cfg(doc)]
use crate::Service;

pub use self::fixture::Fixture;
#[cfg(feature = "remote")]
pub use self::remote::Remote;

/// Catalog [`Source`] of a [`Service`].
pub use common::Handler as Source;

/// Immutable point-in-time view of the catalog.
///
/// A [`Snapshot`] is never mutated after construction: queries only read
/// it, producing new sequences.
pub type Snapshot = Arc<[Item]>;

/// Operation loading a full catalog [`Snapshot`] out of a [`Source`].
pub type LoadSnapshot = Select<By<Snapshot, ()>>;

/// Creates a new [`LoadSnapshot`] operation.
#[must_use]
pub fn load_snapshot() -> LoadSnapshot {
    Select(By::new(()))
}

pub mod source {
    //! [`Source`] error definitions.

    use derive_more::{Display, Error as StdError};

    #[cfg(doc)]
    use super::{Snapshot, Source};

    /// Error of loading a catalog [`Snapshot`] out of a [`Source`].
    #[derive(Debug, Display, StdError)]
    pub enum Error {
        /// [`Source`] cannot be reached at all.
        #[display("catalog source is unreachable: {_0}")]
        Unreachable(#[error(not(source))] Box<dyn std::error::Error + Send + Sync>),

        /// [`Source`] responded with something other than a catalog.
        #[display("catalog source returned a malformed response: {_0}")]
        Malformed(#[error(not(source))] Box<dyn std::error::Error + Send + Sync>),
    }
}

#[cfg(test)]
mod spec {
    use super::source;

    #[test]
    fn source_errors_describe_their_cause() {
        let unreachable = source::Error::Unreachable(
            std::io::Error::from(std::io::ErrorKind::ConnectionRefused)
                .into(),
        );
        assert!(unreachable
            .to_string()
            .starts_with("catalog source is unreachable: "));

        let malformed = source::Error::Malformed("not a catalog".into());
        assert_eq!(
            malformed.to_string(),
            "catalog source returned a malformed response: not a catalog",
        );
    }
}
