/// Result type for [`ClaimApi`] operations.
///
/// [`ClaimApi`]: crate::client::ClaimApi
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors returned while fetching claim data or turning it into an
/// offering.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// The claim API does not know the requested instance.
    #[error("claim not found")]
    NotFound,

    /// An error occurred while parsing the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// An error occurred while contacting the claim API.
    #[error("error contacting claim API: {0}")]
    Reqwest(reqwest::Error),

    /// The claim data lacks a field an offering cannot do without.
    #[error("claim data is missing {0}")]
    MissingField(&'static str),

    /// A claim data field could not be interpreted.
    #[error("invalid {field} in claim data: {reason}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(reqwest::StatusCode::NOT_FOUND) => CatalogError::NotFound,
            _ => CatalogError::Reqwest(err),
        }
    }
}
