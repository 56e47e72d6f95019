//! Station repository: the backend REST API behind a trait.
//!
//! [`StationClient`] talks to the real backend over HTTP;
//! [`MockStationRepository`] keeps records in memory for development
//! and tests. Every operation is a single attempt with no retry.

mod error;
mod http;
mod mock;
mod repository;

pub use error::ClientError;
pub use http::{StationClient, StationClientConfig};
pub use mock::{CallCounts, FailureMode, MockStationRepository};
pub use repository::StationRepository;
