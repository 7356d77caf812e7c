//! Client for the chat and prediction services.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ServicesConfig;
use crate::error::{Service, ServiceError};
use crate::protocol::{ChatRequest, ChatResponse, PredictRequest, PredictResponse};

/// The two remote calls the orchestrator makes. Implemented over HTTP by
/// [`HttpClient`]; tests substitute recording fakes.
pub trait MoodService: Send + Sync {
    /// Send a chat message; returns the bot's reply text.
    fn chat(&self, message: &str) -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Ask for emotion analysis and track recommendations.
    fn predict(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<PredictResponse, ServiceError>> + Send;

    /// Where `service` lives, for error hints.
    fn endpoint(&self, service: Service) -> &str;
}

pub struct HttpClient {
    http: reqwest::Client,
    chat_url: String,
    predict_url: String,
}

impl HttpClient {
    pub fn new(config: &ServicesConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            chat_url: config.chat_url.clone(),
            predict_url: config.predict_url.clone(),
        })
    }

    async fn post_json<B, R>(&self, service: Service, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(service);
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| ServiceError::Transport { service, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                service,
                status: status.as_u16(),
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|source| ServiceError::Decode { service, source })
    }
}

impl MoodService for HttpClient {
    async fn chat(&self, message: &str) -> Result<String, ServiceError> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        let reply: ChatResponse = self.post_json(Service::Chat, &body).await?;
        Ok(reply.response)
    }

    async fn predict(&self, text: &str) -> Result<PredictResponse, ServiceError> {
        let body = PredictRequest {
            text: text.to_string(),
        };
        self.post_json(Service::Predict, &body).await
    }

    fn endpoint(&self, service: Service) -> &str {
        match service {
            Service::Chat => &self.chat_url,
            Service::Predict => &self.predict_url,
        }
    }
}
