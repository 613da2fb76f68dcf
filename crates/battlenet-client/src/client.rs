//! The Battle.net API client
//!
//! Owns the token state, region/locale settings, and the transport, and
//! exposes the two call surfaces: `fetch` for resource requests and
//! `request_access_token` for the token endpoint. Construction acquires a
//! client-credentials token and caches it as a Bearer token for the
//! client's lifetime; there is no automatic refresh.
//!
//! All mutable state (token, usage snapshot, last transport failure) is
//! instance-owned and mutated through `&mut self` — callers wanting to
//! share a client across tasks must add their own synchronization.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use battlenet_auth::{
    AccessTokenType, ClientAuthType, TokenState, build_token_request, mac_authorization,
};
use common::SecretString;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::endpoint;
use crate::error::{Error, Result};
use crate::region::Region;
use crate::response::{self, FetchResult};
use crate::transport::{FormContentType, Method, Transport, TransportFailure, TransportRequest};

/// Snapshot of the last built request, for callers that track usage.
///
/// `response_code` and `content_type` are filled in once the transport
/// answers; a transport failure leaves `response_code` unset.
#[derive(Debug, Clone, Default)]
pub struct Usage {
    pub resource: String,
    pub url: String,
    pub locale: String,
    pub response_code: Option<u16>,
    pub content_type: Option<String>,
}

/// OAuth2 client for the Battle.net WoW API.
pub struct ApiClient {
    client_id: String,
    client_secret: SecretString,
    client_auth: ClientAuthType,
    region: Region,
    locale: String,
    redirect_uri: String,
    token: TokenState,
    transport: Arc<dyn Transport>,
    usage: Usage,
    last_failure: Option<TransportFailure>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("client_auth", &self.client_auth)
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("redirect_uri", &self.redirect_uri)
            .field("token", &self.token)
            .field("usage", &self.usage)
            .field("last_failure", &self.last_failure)
            .finish()
    }
}

impl ApiClient {
    /// Construct a client and acquire an access token via the
    /// client-credentials grant. The token is cached as a Bearer token for
    /// the client's lifetime.
    pub async fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let mut client = Self::bare(config, transport);
        let result = client
            .request_access_token("client_credentials", &BTreeMap::new())
            .await?;
        let access_token = extract_access_token(&result)?;
        client.token.set_access_token(access_token);
        client
            .token
            .set_token_type(AccessTokenType::Bearer, None, None);
        info!(region = %client.region, "acquired client-credentials token");
        Ok(client)
    }

    /// Construct a client around an externally-obtained token (no token
    /// endpoint call). The token is presented as a Bearer token until
    /// [`set_access_token_type`](Self::set_access_token_type) says
    /// otherwise.
    pub fn with_access_token(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        access_token: impl Into<String>,
    ) -> Self {
        let mut client = Self::bare(config, transport);
        client.token.set_access_token(access_token);
        client
            .token
            .set_token_type(AccessTokenType::Bearer, None, None);
        client
    }

    /// Client auth always starts as URI mode regardless of what the
    /// surrounding configuration wanted; `set_client_auth_type` exists for
    /// callers that override it before token calls.
    fn bare(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            client_id: config.client_id,
            client_secret: config.client_secret,
            client_auth: ClientAuthType::Uri,
            region: config.region,
            locale: config.locale,
            redirect_uri: config.redirect_uri,
            token: TokenState::new(),
            transport,
            usage: Usage::default(),
            last_failure: None,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Last built request and its outcome.
    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    /// Transport failure from the most recent request, if any.
    pub fn last_transport_failure(&self) -> Option<&TransportFailure> {
        self.last_failure.as_ref()
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Replace the cached access token (supports externally-obtained
    /// tokens).
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.token.set_access_token(token);
    }

    /// Set how the token is presented, with the signing secret and
    /// algorithm MAC mode needs.
    pub fn set_access_token_type(
        &mut self,
        token_type: AccessTokenType,
        secret: Option<String>,
        algorithm: Option<String>,
    ) {
        self.token.set_token_type(token_type, secret, algorithm);
    }

    /// Override the query parameter name used in URI token mode.
    pub fn set_access_token_param_name(&mut self, name: impl Into<String>) {
        self.token.set_param_name(name);
    }

    pub fn set_client_auth_type(&mut self, client_auth: ClientAuthType) {
        self.client_auth = client_auth;
    }

    /// Build the user-authorization URL for the authorization-code flow.
    ///
    /// Caller-supplied extras override the defaults on key collision.
    /// Unlike resource query strings, this surface form-encodes values.
    pub fn authentication_url(&self, extra_parameters: &BTreeMap<String, String>) -> String {
        let mut params: BTreeMap<String, String> = BTreeMap::from([
            ("response_type".to_string(), "code".to_string()),
            ("client_id".to_string(), self.client_id.clone()),
            ("scope".to_string(), "wow.profile".to_string()),
            ("auth_flow".to_string(), "auth_code".to_string()),
            ("redirect_uri".to_string(), self.redirect_uri.clone()),
        ]);
        params.extend(
            extra_parameters
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&params)
            .finish();
        format!(
            "{}?{}",
            self.region.config().authorization_endpoint,
            query
        )
    }

    /// Request an access token from the region token endpoint.
    ///
    /// `grant_key` selects the grant strategy (`client_credentials`,
    /// `authorization_code`, ...). The response envelope is returned as-is;
    /// use the setters to install a token from it.
    pub async fn request_access_token(
        &mut self,
        grant_key: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<FetchResult> {
        let token_request = build_token_request(
            grant_key,
            parameters,
            &self.client_id,
            self.client_secret.expose(),
            self.client_auth,
            &self.redirect_uri,
        )?;
        let token_endpoint = self.region.config().token_endpoint.to_string();
        debug!(grant = grant_key, endpoint = %token_endpoint, "requesting access token");

        Ok(self
            .execute_request(
                token_endpoint,
                token_request.params,
                Method::Post,
                token_request.headers,
                FormContentType::UrlEncoded,
            )
            .await)
    }

    /// Fetch a resource with GET and no extra headers.
    pub async fn fetch(
        &mut self,
        resource: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<FetchResult> {
        self.fetch_with(
            resource,
            parameters,
            &[],
            Method::Get,
            FormContentType::Multipart,
        )
        .await
    }

    /// Fetch a resource.
    ///
    /// Resolves the URL, attaches the cached token per its type (query
    /// parameter, Bearer/OAuth header, or MAC signature), and dispatches.
    /// Caller-input problems (unknown resource, missing path field,
    /// MAC material missing) fail fast; transport failures come back
    /// inside the envelope.
    pub async fn fetch_with(
        &mut self,
        resource: &str,
        parameters: &BTreeMap<String, String>,
        headers: &[(String, String)],
        method: Method,
        form_content_type: FormContentType,
    ) -> Result<FetchResult> {
        let url = self.build_url(resource, parameters)?;

        let mut parameters = parameters.clone();
        let mut headers = headers.to_vec();
        if let Some(token) = self.token.access_token().map(str::to_string) {
            match self.token.token_type() {
                AccessTokenType::Uri => {
                    parameters.insert(self.token.param_name().to_string(), token);
                }
                AccessTokenType::Bearer => {
                    headers.push(("Authorization".to_string(), format!("Bearer {token}")));
                }
                AccessTokenType::OAuth => {
                    headers.push(("Authorization".to_string(), format!("OAuth {token}")));
                }
                AccessTokenType::Mac => {
                    let value =
                        mac_authorization(&self.token, &url, method.as_str(), &parameters)?;
                    headers.push(("Authorization".to_string(), format!("MAC {value}")));
                }
            }
        }

        Ok(self
            .execute_request(
                url,
                parameters.into_iter().collect(),
                method,
                headers,
                form_content_type,
            )
            .await)
    }

    /// Compose the full request URL for a resource.
    ///
    /// Injects `apikey`, the cached token, `locale`, and the namespace
    /// parameter; selects the account endpoint for `account` and the
    /// region urlbase for everything else; strips `name`/`server` from the
    /// query once the path has consumed them. Query values are emitted
    /// verbatim — only path substitutions are percent-encoded.
    fn build_url(
        &mut self,
        resource: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<String> {
        let mut query = parameters.clone();
        query.insert("apikey".to_string(), self.client_id.clone());
        if let Some(token) = self.token.access_token() {
            query.insert("access_token".to_string(), token.to_string());
        }
        query.insert("locale".to_string(), self.locale.clone());

        let namespace = endpoint::classify(resource)?;
        if let Some(tag) = namespace.tag() {
            query.insert(
                "namespace".to_string(),
                format!("{tag}-{}", self.region.namespace_suffix()),
            );
        }

        let path = endpoint::resolve(resource, parameters)?;
        let config = self.region.config();
        let base = if resource == "account" {
            config.account_endpoint
        } else {
            config.urlbase
        };

        query.remove("name");
        query.remove("server");

        let mut url = format!("{base}{path}");
        if !query.is_empty() {
            url.push('?');
            url.push_str(&build_query(&query));
        }
        debug!(resource, url = %url, "built request url");

        self.usage = Usage {
            resource: resource.to_string(),
            url: url.clone(),
            locale: self.locale.clone(),
            response_code: None,
            content_type: None,
        };

        Ok(url)
    }

    /// Dispatch through the transport and normalize the outcome.
    ///
    /// Never returns an error: transport failures are recorded on the
    /// client and reflected in the envelope's sentinel `http_code`.
    async fn execute_request(
        &mut self,
        url: String,
        parameters: Vec<(String, String)>,
        method: Method,
        headers: Vec<(String, String)>,
        form_content_type: FormContentType,
    ) -> FetchResult {
        let body = method
            .has_body()
            .then(|| (form_content_type, parameters));
        let request = TransportRequest {
            url: url.clone(),
            method,
            headers,
            body,
        };

        let transport = Arc::clone(&self.transport);
        match transport.execute(request).await {
            Ok(transport_response) => {
                self.last_failure = None;
                self.usage.response_code = Some(transport_response.status);
                self.usage.content_type = transport_response.content_type.clone();
                response::from_transport(&transport_response)
            }
            Err(failure) => {
                warn!(url = %url, code = failure.code, error = %failure.message, "transport failure");
                self.usage.response_code = None;
                self.last_failure = Some(failure);
                response::from_failure(&url)
            }
        }
    }
}

/// Pull the access token out of a token-endpoint response envelope.
fn extract_access_token(result: &FetchResult) -> Result<String> {
    match result {
        FetchResult::Json(envelope) => envelope
            .data
            .get("access_token")
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::TokenExchange(format!(
                    "token endpoint returned {}: {}",
                    envelope.http_code, envelope.data
                ))
            }),
        FetchResult::Raw(body) => Err(Error::TokenExchange(format!(
            "invalid token response: {body}"
        ))),
    }
}

fn build_query(parameters: &BTreeMap<String, String>) -> String {
    parameters
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportResponse;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    /// Canned transport: hands out queued responses and records requests.
    struct MockTransport {
        responses: Mutex<VecDeque<std::result::Result<TransportResponse, TransportFailure>>>,
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl MockTransport {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn queue_json(&self, status: u16, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(TransportResponse {
                    status,
                    status_line: format!("HTTP/1.1 {status} OK"),
                    headers: vec![(
                        "content-type".to_string(),
                        "application/json".to_string(),
                    )],
                    content_type: Some("application/json".to_string()),
                    body: body.to_string(),
                    effective_url: "https://mock.invalid/effective".to_string(),
                }));
        }

        fn queue_failure(&self, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(TransportFailure {
                    code: 7,
                    message: message.to_string(),
                }));
        }

        fn last_request(&self) -> TransportRequest {
            self.requests.lock().unwrap().pop().expect("a request")
        }
    }

    impl Transport for MockTransport {
        fn execute(
            &self,
            request: TransportRequest,
        ) -> Pin<
            Box<
                dyn Future<Output = std::result::Result<TransportResponse, TransportFailure>>
                    + Send
                    + '_,
            >,
        > {
            let response = {
                let mut responses = self.responses.lock().unwrap();
                responses.pop_front().expect("a queued response")
            };
            self.requests.lock().unwrap().push(request);
            Box::pin(async move { response })
        }
    }

    fn config(region: Region) -> ClientConfig {
        ClientConfig::new(
            "my-client-id",
            SecretString::new("my-client-secret"),
            region,
            "en_US",
            "https://example.org/callback",
        )
    }

    fn client(region: Region) -> (ApiClient, Arc<MockTransport>) {
        let transport = MockTransport::new();
        let client = ApiClient::bare(config(region), transport.clone());
        (client, transport)
    }

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn header<'a>(request: &'a TransportRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[tokio::test]
    async fn new_acquires_token_and_switches_to_bearer() {
        let transport = MockTransport::new();
        transport.queue_json(200, r#"{"access_token":"at_fresh","token_type":"bearer"}"#);

        let mut client = ApiClient::new(config(Region::Us), transport.clone())
            .await
            .unwrap();

        // the token request went to the global token endpoint, form-encoded
        let request = transport.last_request();
        assert_eq!(request.url, "https://oauth.battle.net/token");
        assert_eq!(request.method, Method::Post);
        let (content_type, body) = request.body.as_ref().unwrap();
        assert_eq!(*content_type, FormContentType::UrlEncoded);
        assert!(body.contains(&("grant_type".to_string(), "client_credentials".to_string())));
        assert!(body.contains(&("client_id".to_string(), "my-client-id".to_string())));
        assert!(body.contains(&("client_secret".to_string(), "my-client-secret".to_string())));

        // subsequent fetches carry the Bearer header
        transport.queue_json(200, r#"{"id":19019}"#);
        client.fetch("item", &params(&[("itemId", "19019")])).await.unwrap();
        let request = transport.last_request();
        assert_eq!(header(&request, "Authorization"), Some("Bearer at_fresh"));
    }

    #[tokio::test]
    async fn new_fails_on_token_response_without_token() {
        let transport = MockTransport::new();
        transport.queue_json(401, r#"{"error":"invalid_client"}"#);

        let err = ApiClient::new(config(Region::Us), transport).await.unwrap_err();
        assert!(matches!(err, Error::TokenExchange(_)), "got {err:?}");
    }

    #[test]
    fn build_url_injects_apikey_token_locale_and_namespace() {
        let (mut client, _) = client(Region::Eu);
        client.set_access_token("at_1");

        let url = client
            .build_url("item", &params(&[("itemId", "19019")]))
            .unwrap();
        assert!(url.starts_with("https://eu.api.blizzard.com/data/wow/item/19019?"));
        let query = url.split_once('?').unwrap().1;
        let pairs: Vec<&str> = query.split('&').collect();
        assert!(pairs.contains(&"apikey=my-client-id"));
        assert!(pairs.contains(&"access_token=at_1"));
        assert!(pairs.contains(&"locale=en_US"));
        assert!(pairs.contains(&"namespace=static-eu"));
        assert!(pairs.contains(&"itemId=19019"));
    }

    #[test]
    fn build_url_without_token_omits_access_token() {
        let (mut client, _) = client(Region::Us);
        let url = client.build_url("realms_index", &BTreeMap::new()).unwrap();
        assert!(!url.contains("access_token="));
        assert!(url.contains("namespace=dynamic-us"));
    }

    #[test]
    fn cn_region_routes_to_gateway_and_cn_account_host() {
        let (mut client, _) = client(Region::Cn);

        let url = client
            .build_url("realm", &params(&[("server", "Stormrage")]))
            .unwrap();
        assert!(
            url.starts_with("https://gateway.battlenet.com.cn/data/wow/realm/Stormrage?"),
            "got {url}"
        );

        let url = client.build_url("account", &BTreeMap::new()).unwrap();
        assert!(
            url.starts_with("https://oauth.battlenet.com.cn/oauth/userinfo?"),
            "got {url}"
        );
    }

    #[test]
    fn account_gets_no_namespace_parameter() {
        let (mut client, _) = client(Region::Us);
        let url = client.build_url("account", &BTreeMap::new()).unwrap();
        assert!(!url.contains("namespace="));
    }

    #[test]
    fn name_and_server_never_leak_into_the_query() {
        let (mut client, _) = client(Region::Us);
        let url = client
            .build_url(
                "character_profile_summary",
                &params(&[("server", "Area-52"), ("name", "Thrall")]),
            )
            .unwrap();
        assert!(url.contains("/profile/wow/character/Area-52/thrall?"));
        let query = url.split_once('?').unwrap().1;
        assert!(!query.contains("name="));
        assert!(!query.contains("server="));
    }

    #[test]
    fn query_values_are_emitted_verbatim() {
        let (mut client, _) = client(Region::Us);
        let url = client
            .build_url("item_search", &params(&[("name.en_US", "Garrosh Hellscream")]))
            .unwrap();
        // naive splitting recovers the original un-escaped value
        let query = url.split_once('?').unwrap().1;
        let value = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("name.en_US="))
            .unwrap();
        assert_eq!(value, "Garrosh Hellscream");
    }

    #[test]
    fn build_url_records_usage_snapshot() {
        let (mut client, _) = client(Region::Us);
        let url = client
            .build_url("item", &params(&[("itemId", "19019")]))
            .unwrap();
        assert_eq!(client.usage().resource, "item");
        assert_eq!(client.usage().url, url);
        assert_eq!(client.usage().locale, "en_US");
        assert_eq!(client.usage().response_code, None);
    }

    #[test]
    fn unknown_resource_fails_fast() {
        let (mut client, _) = client(Region::Us);
        let err = client.build_url("totally_bogus", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownResource(name) if name == "totally_bogus"));
    }

    #[tokio::test]
    async fn uri_token_mode_injects_token_under_param_name() {
        let (mut client, transport) = client(Region::Us);
        client.set_access_token("at_uri");
        client.set_access_token_type(AccessTokenType::Uri, None, None);
        client.set_access_token_param_name("token");

        transport.queue_json(200, "{}");
        client
            .fetch_with(
                "item",
                &params(&[("itemId", "19019")]),
                &[],
                Method::Post,
                FormContentType::UrlEncoded,
            )
            .await
            .unwrap();

        let request = transport.last_request();
        assert!(header(&request, "Authorization").is_none());
        let (_, body) = request.body.as_ref().unwrap();
        assert!(body.contains(&("token".to_string(), "at_uri".to_string())));
    }

    #[tokio::test]
    async fn oauth_token_mode_sets_oauth_header() {
        let (mut client, transport) = client(Region::Us);
        client.set_access_token("at_oauth");
        client.set_access_token_type(AccessTokenType::OAuth, None, None);

        transport.queue_json(200, "{}");
        client.fetch("item", &params(&[("itemId", "19019")])).await.unwrap();

        let request = transport.last_request();
        assert_eq!(header(&request, "Authorization"), Some("OAuth at_oauth"));
    }

    #[tokio::test]
    async fn mac_token_mode_sets_mac_header() {
        let (mut client, transport) = client(Region::Us);
        client.set_access_token("at_mac");
        client.set_access_token_type(
            AccessTokenType::Mac,
            Some("signing-secret".into()),
            Some("sha256".into()),
        );

        transport.queue_json(200, "{}");
        client.fetch("item", &params(&[("itemId", "19019")])).await.unwrap();

        let request = transport.last_request();
        let value = header(&request, "Authorization").unwrap();
        assert!(value.starts_with("MAC id=\"at_mac\", ts=\""), "got {value}");
        assert!(value.contains("nonce=\""));
        assert!(value.contains("mac=\""));
    }

    #[tokio::test]
    async fn get_requests_carry_no_body() {
        let (mut client, transport) = client(Region::Us);
        transport.queue_json(200, "{}");
        client.fetch("commodities", &BTreeMap::new()).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_soft_surfaced() {
        let (mut client, transport) = client(Region::Us);
        transport.queue_failure("connection refused");

        let result = client.fetch("commodities", &BTreeMap::new()).await.unwrap();
        let FetchResult::Json(envelope) = result else {
            panic!("expected envelope");
        };
        assert_eq!(envelope.http_code, "~0");

        let failure = client.last_transport_failure().unwrap();
        assert_eq!(failure.message, "connection refused");
        assert_eq!(client.usage().response_code, None);
    }

    #[tokio::test]
    async fn successful_fetch_clears_previous_failure_and_fills_usage() {
        let (mut client, transport) = client(Region::Us);
        transport.queue_failure("connection refused");
        client.fetch("commodities", &BTreeMap::new()).await.unwrap();
        assert!(client.last_transport_failure().is_some());

        transport.queue_json(200, r#"{"auctions":[]}"#);
        let result = client.fetch("commodities", &BTreeMap::new()).await.unwrap();
        assert!(client.last_transport_failure().is_none());
        assert_eq!(client.usage().response_code, Some(200));
        assert_eq!(
            client.usage().content_type.as_deref(),
            Some("application/json")
        );
        assert!(matches!(result, FetchResult::Json(_)));
    }

    #[test]
    fn authentication_url_carries_defaults_and_encodes() {
        let (client, _) = client(Region::Eu);
        let url = client.authentication_url(&BTreeMap::new());
        assert!(url.starts_with("https://oauth.battle.net/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=my-client-id"));
        assert!(url.contains("scope=wow.profile"));
        assert!(url.contains("auth_flow=auth_code"));
        // form-encoded, unlike resource query strings
        assert!(url.contains("redirect_uri=https%3A%2F%2Fexample.org%2Fcallback"));
    }

    #[test]
    fn authentication_url_extras_override_defaults() {
        let (client, _) = client(Region::Us);
        let url = client.authentication_url(&params(&[
            ("scope", "wow.profile openid"),
            ("state", "xyzzy"),
        ]));
        assert!(url.contains("scope=wow.profile+openid"));
        assert!(url.contains("state=xyzzy"));
        assert!(!url.contains("scope=wow.profile&"));
    }

    #[tokio::test]
    async fn basic_client_auth_moves_secret_to_header() {
        let (mut client, transport) = client(Region::Us);
        client.set_client_auth_type(ClientAuthType::Basic);

        transport.queue_json(200, r#"{"access_token":"at"}"#);
        client
            .request_access_token("client_credentials", &BTreeMap::new())
            .await
            .unwrap();

        let request = transport.last_request();
        let auth = header(&request, "Authorization").unwrap();
        assert!(auth.starts_with("Basic "));
        let (_, body) = request.body.as_ref().unwrap();
        assert!(!body.iter().any(|(key, _)| key == "client_secret"));
    }

    #[tokio::test]
    async fn unknown_grant_type_fails_fast() {
        let (mut client, _) = client(Region::Us);
        let err = client
            .request_access_token("implicit", &BTreeMap::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Auth(battlenet_auth::Error::UnknownGrantType(_))
        ));
    }
}
