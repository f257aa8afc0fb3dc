use super::super::http_client::HTTPClient;
use super::super::http_handler_common::HTTPError;
use super::super::http_response::response_common::HTTPResponseType;
use crate::{error, info, log};
use strum_macros::Display;

/// The request methods this layer issues. The dashboard surface is
/// read-only reporting, so only `GET` exists here.
#[derive(Debug, Display, Clone, Copy)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HTTPRequestMethod {
    Get,
}

#[derive(Debug, Display)]
pub enum RequestError {
    #[strum(to_string = "Failed to send request: {0}")]
    FailedToSend(String),
}

impl std::error::Error for RequestError {}

#[allow(async_fn_in_trait)]
pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Serializable query parameter mapping. `Option` fields must carry
    /// `skip_serializing_if = "Option::is_none"` so an omitted parameter
    /// never reaches the query string.
    type Query: serde::Serialize + std::fmt::Debug;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn query(&self) -> &Self::Query;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

#[allow(async_fn_in_trait)]
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Issues the request against `client` and resolves with the parsed
    /// response body.
    ///
    /// One log line goes out before dispatch (method, resolved URL, query)
    /// and one after resolution (parsed body or normalized error). The log
    /// lines are diagnostic only and never feed into the returned value.
    /// A failed attempt surfaces immediately; there is no retry.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError>
    where
        <Self::Response as HTTPResponseType>::ParsedResponseType: std::fmt::Debug,
    {
        let compound_url = format!("{}{}", client.url(), self.endpoint());
        let request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(&compound_url),
        }
        .headers(self.header_params())
        .query(self.query());
        info!("Request: {} {} {:?}", self.request_method(), compound_url, self.query());
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let send_err = HTTPError::from_send_error(err);
                error!("Error: {} {send_err}", self.endpoint());
                return Err(send_err);
            }
        };
        match <Self::Response as HTTPResponseType>::read_response(response).await {
            Ok(parsed) => {
                log!("Response: {} {parsed:?}", self.endpoint());
                Ok(parsed)
            }
            Err(err) => {
                error!("Error: {} {err}", self.endpoint());
                Err(HTTPError::HTTPResponseError(err))
            }
        }
    }
}
