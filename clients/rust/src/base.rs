use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

const SESSION_TOKEN_HEADER: &str = "renewal-keeper-token";

pub(crate) struct BaseClient {
    client: Client,
    address: String,
    session_token: Option<String>,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    Unauthorized,
    BadClientData,
    Conflict,
    NotFound,
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
            session_token: None,
        }
    }

    pub fn set_session_token(&mut self, token: String) {
        self.session_token = Some(token);
    }

    fn get_client(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = self.client.request(method, &url);

        match &self.session_token {
            Some(token) => builder.header(SESSION_TOKEN_HEADER, token.as_str()),
            None => builder,
        }
    }

    fn check_status_code(
        &self,
        res: &Response,
        expected_status_code: StatusCode,
    ) -> Result<(), APIError> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(());
        }
        Err(match status {
            StatusCode::UNAUTHORIZED => APIError::Unauthorized,
            StatusCode::BAD_REQUEST => APIError::BadClientData,
            StatusCode::CONFLICT => APIError::Conflict,
            StatusCode::NOT_FOUND => APIError::NotFound,
            _ => APIError::UnexpectedStatusCode(status),
        })
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.check_status_code(&res, expected_status_code)?;
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    async fn send(&self, builder: RequestBuilder) -> APIResponse<Response> {
        builder.send().await.map_err(|_| APIError::Network)
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(self.get_client(Method::GET, path)).await?;
        self.handle_api_response(res, expected_status_code).await
    }

    /// Like `get` but for html pages
    pub async fn get_text(
        &self,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<String> {
        let res = self.send(self.get_client(Method::GET, path)).await?;
        self.check_status_code(&res, expected_status_code)?;
        res.text().await.map_err(|_| APIError::MalformedResponse)
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::POST, path).json(&body))
            .await?;
        self.handle_api_response(res, expected_status_code).await
    }
}
