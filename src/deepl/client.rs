//! HTTP client for the DeepL v2 REST API.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::body::{create_glossary_body, rewrite_body, translate_body};
use super::credentials::Credentials;
use super::error::{ApiError, DeepLError};
use super::glossary::Glossary;
use super::options::{RewriteOptions, TranslateOptions, TranslateResult};

const TSV_MEDIA_TYPE: &str = "text/tab-separated-values";

/// Source of credentials, consulted once per request.
///
/// Preferences can change between invocations, so the client never keeps a
/// key of its own.
pub trait CredentialsProvider {
    fn credentials(&self) -> Result<Credentials, DeepLError>;
}

impl CredentialsProvider for Credentials {
    fn credentials(&self) -> Result<Credentials, DeepLError> {
        Ok(self.clone())
    }
}

impl<P: CredentialsProvider + ?Sized> CredentialsProvider for &P {
    fn credentials(&self) -> Result<Credentials, DeepLError> {
        (**self).credentials()
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
    detected_source_language: String,
    #[serde(default)]
    billed_characters: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RewriteResponse {
    improvements: Vec<Improvement>,
}

#[derive(Debug, Deserialize)]
struct Improvement {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GlossaryListResponse {
    glossaries: Vec<Glossary>,
}

/// Whether a failed response's body is read into the [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorBody {
    Capture,
    Discard,
}

/// Client for the DeepL v2 REST API.
pub struct DeepLClient<P> {
    http: Client,
    provider: P,
}

impl<P: CredentialsProvider> DeepLClient<P> {
    pub fn new(provider: P) -> Self {
        Self::with_http(Client::new(), provider)
    }

    pub fn with_http(http: Client, provider: P) -> Self {
        Self { http, provider }
    }

    /// Translates `text` and returns the single translation.
    pub async fn translate(
        &self,
        text: &str,
        options: &TranslateOptions,
    ) -> Result<TranslateResult, DeepLError> {
        let body = translate_body(text, options);
        let response: TranslateResponse = self.post_json("/translate", &body).await?;

        let translation = response
            .translations
            .into_iter()
            .next()
            .ok_or(DeepLError::EmptyResponse("translations"))?;

        Ok(TranslateResult {
            text: translation.text,
            detected_source_language: translation.detected_source_language,
            billed_characters: translation.billed_characters,
        })
    }

    /// Rephrases `text` and returns the first improvement.
    pub async fn rewrite(&self, text: &str, options: &RewriteOptions) -> Result<String, DeepLError> {
        let body = rewrite_body(text, options);
        let response: RewriteResponse = self.post_json("/write/rephrase", &body).await?;

        response
            .improvements
            .into_iter()
            .next()
            .map(|improvement| improvement.text)
            .ok_or(DeepLError::EmptyResponse("improvements"))
    }

    pub async fn list_glossaries(&self) -> Result<Vec<Glossary>, DeepLError> {
        let response: GlossaryListResponse = self.get_json("/glossaries").await?;
        Ok(response.glossaries)
    }

    pub async fn get_glossary(&self, id: &str) -> Result<Glossary, DeepLError> {
        self.get_json(&format!("/glossaries/{id}")).await
    }

    /// Fetches the raw TSV entries of a glossary. Parsing is left to the
    /// caller.
    pub async fn get_glossary_entries(&self, id: &str) -> Result<String, DeepLError> {
        let (request, url) = self.request(Method::GET, &format!("/glossaries/{id}/entries"))?;
        let response = send(request.header(ACCEPT, TSV_MEDIA_TYPE), &url).await?;
        let response = check_status(response, ErrorBody::Discard).await?;

        response
            .text()
            .await
            .map_err(|source| DeepLError::Decode { url, source })
    }

    pub async fn create_glossary(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        entries_tsv: &str,
    ) -> Result<Glossary, DeepLError> {
        let body = create_glossary_body(name, source_lang, target_lang, entries_tsv);
        self.post_json("/glossaries", &body).await
    }

    pub async fn delete_glossary(&self, id: &str) -> Result<(), DeepLError> {
        let (request, url) = self.request(Method::DELETE, &format!("/glossaries/{id}"))?;
        let response = send(request, &url).await?;
        check_status(response, ErrorBody::Discard).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> Result<(RequestBuilder, String), DeepLError> {
        let credentials = self.provider.credentials()?;
        let url = credentials.url(path);

        debug!(%method, %url, "sending DeepL request");

        let request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, credentials.authorization());

        Ok((request, url))
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, DeepLError> {
        let (request, url) = self.request(Method::POST, path)?;
        let response = send(request.json(body), &url).await?;
        let response = check_status(response, ErrorBody::Capture).await?;
        decode(response, url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeepLError> {
        let (request, url) = self.request(Method::GET, path)?;
        let response = send(request, &url).await?;
        let response = check_status(response, ErrorBody::Discard).await?;
        decode(response, url).await
    }
}

async fn send(request: RequestBuilder, url: &str) -> Result<Response, DeepLError> {
    request.send().await.map_err(|source| DeepLError::Transport {
        url: url.to_string(),
        source,
    })
}

async fn check_status(response: Response, error_body: ErrorBody) -> Result<Response, DeepLError> {
    let status = response.status();
    debug!(status = status.as_u16(), "DeepL responded");

    if status.is_success() {
        return Ok(response);
    }

    // A body that cannot be read is simply left out.
    let body = match error_body {
        ErrorBody::Capture => response.text().await.ok(),
        ErrorBody::Discard => None,
    };

    Err(ApiError::with_body(status.as_u16(), body).into())
}

async fn decode<T: DeserializeOwned>(response: Response, url: String) -> Result<T, DeepLError> {
    response
        .json::<T>()
        .await
        .map_err(|source| DeepLError::Decode { url, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::deepl::credentials::ApiTier;

    struct Counting {
        calls: std::cell::Cell<usize>,
    }

    impl CredentialsProvider for Counting {
        fn credentials(&self) -> Result<Credentials, DeepLError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Credentials::new(format!("key-{}", self.calls.get()), ApiTier::Free))
        }
    }

    struct Missing;

    impl CredentialsProvider for Missing {
        fn credentials(&self) -> Result<Credentials, DeepLError> {
            Err(DeepLError::MissingApiKey {
                env_var: "DEEPL_API_KEY".to_string(),
            })
        }
    }

    #[test]
    fn test_credentials_read_on_every_request() {
        let provider = Counting {
            calls: std::cell::Cell::new(0),
        };
        let client = DeepLClient::new(&provider);

        let (first, _) = client.request(Method::GET, "/glossaries").unwrap();
        let (second, _) = client.request(Method::GET, "/glossaries").unwrap();

        let first = first.build().unwrap();
        let second = second.build().unwrap();
        assert_eq!(provider.calls.get(), 2);
        assert_eq!(first.headers()[AUTHORIZATION], "DeepL-Auth-Key key-1");
        assert_eq!(second.headers()[AUTHORIZATION], "DeepL-Auth-Key key-2");
    }

    #[test]
    fn test_request_uses_tier_url() {
        let client = DeepLClient::new(Credentials::new("k", ApiTier::Pro));
        let (request, url) = client.request(Method::DELETE, "/glossaries/abc").unwrap();
        assert_eq!(url, "https://api.deepl.com/v2/glossaries/abc");
        assert_eq!(*request.build().unwrap().method(), Method::DELETE);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = DeepLClient::new(Missing);
        let err = client
            .translate("hi", &TranslateOptions::new("DE"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeepLError::MissingApiKey { .. }));
    }
}
