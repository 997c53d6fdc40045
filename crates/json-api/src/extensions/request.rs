//! Request parsing extensions.

use salvo::prelude::Request;
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

use catalog_app::products::models::ProductId;

use crate::error_handling::ApiError;

const PRODUCT_ID_PARAM: &str = "product_id";

pub(crate) trait RequestExt {
    /// The `{product_id}` path segment as an integer.
    fn product_id_or_400(&self) -> Result<ProductId, ApiError>;

    /// Deserialize the JSON body and run its field validation.
    async fn validated_json<T>(&mut self) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate + Send;
}

impl RequestExt for Request {
    fn product_id_or_400(&self) -> Result<ProductId, ApiError> {
        let raw = self.param::<String>(PRODUCT_ID_PARAM).unwrap_or_default();

        raw.parse::<ProductId>().map_err(|source| {
            warn!(product_id = %raw, "could not parse product id: {source}");

            ApiError::bad_request("Product Id must be an integer")
        })
    }

    async fn validated_json<T>(&mut self) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate + Send,
    {
        let body = self.parse_json::<T>().await.map_err(|source| {
            warn!("could not parse request body: {source}");

            ApiError::bad_request("Request body must be valid JSON")
        })?;

        body.validate()?;

        Ok(body)
    }
}
