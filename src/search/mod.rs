//! Interactive search session
//!
//! Ties the pipeline together: issue a search through a
//! [`PlaceSearch`](crate::provider::PlaceSearch) provider, rank the candidates
//! with the current criteria and sort key, and page through the result.
//!
//! Every search is stamped with a [`SearchTicket`]. Only the response for the
//! most recently issued ticket is applied; a slow response that lands after
//! a newer search was started is discarded.

pub mod error;
pub mod session;

pub use error::SearchError;
pub use session::{SearchSession, SearchStatus, SearchTicket};
