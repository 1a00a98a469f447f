// Document existence check.

use super::models::ExistsParams;
use crate::client::Client;
use crate::core::error::ApiError;
use crate::core::transport::Transport;
use log::debug;
use reqwest::StatusCode;
use serde_json::Value;

impl<T: Transport> Client<T> {
    /// Returns `true` if the document exists, `false` otherwise.
    ///
    /// Issues a single `HEAD {index}/{type}/{id}` request. A not-found
    /// answer from the transport yields `Ok(false)`; any other transport
    /// failure is returned unchanged.
    ///
    /// ```no_run
    /// # use search_exists::{Client, ClientConfig, ExistsParams};
    /// # async fn run() -> Result<(), search_exists::ApiError> {
    /// let client = Client::new(&ClientConfig::default())?;
    /// let found = client
    ///     .exists(ExistsParams::new("myindex", "1").with_type("mytype"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn exists(&self, params: ExistsParams) -> Result<bool, ApiError> {
        let request = params.to_request()?;
        debug!("Checking existence: HEAD {}", request.path);

        match self.perform_request(request).await {
            Ok(response) => Ok(response.status == StatusCode::OK),
            Err(e) if e.is_not_found() => {
                debug!("Document not found: {}", e);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// [`exists`](Self::exists) with a JSON argument map
    /// (`{"index": .., "type": .., "id": .., "routing": ..}`).
    /// Keys outside the recognised set are ignored.
    pub async fn exists_with_arguments(&self, arguments: Value) -> Result<bool, ApiError> {
        self.exists(ExistsParams::try_from(arguments)?).await
    }
}
