//! Backend API: wire types, the HTTP client and its error taxonomy.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{FetchError, FetchErrorKind};
pub use types::{CollectionId, Movie, MoviesResponse, QrCode};
