//! REST API definitions.

pub mod params;

use axum::{
    extract::{Extension, Query},
    Json,
};
use service::{
    infra::{source, LoadSnapshot, Snapshot, Source},
    query,
    read::Selection,
    Service,
};
use tracerr::Traced;

use crate::error::{AsError as _, Error};

pub use self::params::Params;

/// Handles the `GET /items/available` request.
///
/// An empty selection is a normal `200 OK` response with zero items, not an
/// error.
///
/// # Errors
///
/// - `400` if `category` or `fecha_inicio` cannot be parsed.
/// - `502` if the catalog source cannot be reached or returns something
///   other than a catalog.
pub async fn available_items<Src>(
    Extension(service): Extension<Service<Src>>,
    Query(params): Query<Params>,
) -> Result<Json<Selection>, Error>
where
    Src: Source<LoadSnapshot, Ok = Snapshot, Err = Traced<source::Error>>
        + Clone
        + Send
        + Sync
        + 'static,
{
    let filter = params.into_filter().map_err(|e| e.into_error())?;

    service
        .execute(query::items::Available(filter))
        .await
        .map(Json)
        .map_err(|e| e.as_error())
}
