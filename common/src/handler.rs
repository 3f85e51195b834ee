//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Queries and catalog sources are all [`Handler`]s over their argument
/// types, so callers depend on the operation shape rather than on a
/// concrete implementation.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// The returned [`Future`] is [`Send`], so [`Handler`]s may be driven
    /// from multi-threaded executors behind generic seams.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>> + Send;
}
