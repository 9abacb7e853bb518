//! The remote Blocktank service capability the store consumes.
//!
//! The concrete HTTP transport lives outside this crate; the store only
//! depends on this trait, and tests inject scripted implementations.

use thiserror::Error;

use crate::entities::InfoEntity;
use crate::entities::OrderEntity;

/// An error from a remote operation.
///
/// Network, decoding and server-side failures are collapsed into this one
/// kind: the store only needs to know that a refresh failed, not why.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The HTTP transport failed or the response body could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered but reported a failure.
    #[error("remote service error: {0}")]
    Service(String),
}

/// A client able to fetch the two entity kinds the store synchronizes.
#[allow(async_fn_in_trait)]
pub trait RemoteClient {
    /// Fetches the current service info snapshot.
    async fn get_info(&self) -> Result<InfoEntity, RemoteError>;

    /// Fetches a single order by its identifier.
    async fn get_order(&self, order_id: &str) -> Result<OrderEntity, RemoteError>;
}
