//! [`Error`]-related definitions.

use std::fmt;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::infra::source;
use tracerr::{Trace, Traced};

use crate::api::params;

/// REST API [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// [`http::StatusCode`] of this [`Error`].
    pub status_code: http::StatusCode,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an internal server error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_SERVER_ERROR",
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            status_code: _,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("{trace}"))),
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{self}");
        }

        (
            self.status_code,
            Json(serde_json::json!({
                "code": self.code,
                "message": self.message,
            })),
        )
            .into_response()
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an
    /// [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for source::Error {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Unreachable(e) => Error {
                code: "SOURCE_UNREACHABLE",
                status_code: http::StatusCode::BAD_GATEWAY,
                message: format!("catalog source is unreachable: {e}"),
                backtrace: None,
            },
            Self::Malformed(e) => Error {
                code: "SOURCE_MALFORMED",
                status_code: http::StatusCode::BAD_GATEWAY,
                message: format!(
                    "catalog source returned a malformed response: {e}",
                ),
                backtrace: None,
            },
        })
    }
}

impl AsError for params::ParseError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Category(token) => Error {
                code: "INVALID_CATEGORY",
                status_code: http::StatusCode::BAD_REQUEST,
                message: format!("unknown `category` token: {token}"),
                backtrace: None,
            },
            Self::Date(e) => Error {
                code: "INVALID_DATE",
                status_code: http::StatusCode::BAD_REQUEST,
                message: format!(
                    "`fecha_inicio` is not a valid ISO `YYYY-MM-DD` date: \
                     {e}",
                ),
                backtrace: None,
            },
        })
    }
}

#[cfg(test)]
mod spec {
    use common::date;
    use service::infra::source;

    use crate::api::params::ParseError;

    use super::AsError as _;

    #[test]
    fn invalid_date_maps_to_bad_request() {
        let e = date::Date::from_iso("05/06/2025").unwrap_err();
        let error = ParseError::Date(e).into_error();

        assert_eq!(error.code, "INVALID_DATE");
        assert_eq!(error.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_category_maps_to_bad_request() {
        let error = ParseError::Category("YATE".to_owned()).into_error();

        assert_eq!(error.code, "INVALID_CATEGORY");
        assert_eq!(error.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unreachable_source_maps_to_bad_gateway() {
        let error = source::Error::Unreachable(
            std::io::Error::from(std::io::ErrorKind::ConnectionRefused)
                .into(),
        )
        .into_error();

        assert_eq!(error.code, "SOURCE_UNREACHABLE");
        assert_eq!(error.status_code, http::StatusCode::BAD_GATEWAY);
    }
}
