//! Larder Function - Serverless entry point
//!
//! Translates one function event into a call to the shared recipe search
//! pipeline and renders the function response. The event and response follow
//! the `httpMethod` / `queryStringParameters` / `statusCode` shape used by
//! serverless function hosts.

use std::collections::{BTreeMap, HashMap};

use larder_domain::{ports::RecipeProvider, ErrorBody, RecipeError, RecipeSearchService};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Incoming function event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl FunctionEvent {
    /// Build a GET event with the given query parameters
    pub fn get(params: &[(&str, &str)]) -> Self {
        Self {
            http_method: "GET".to_string(),
            query_string_parameters: Some(
                params
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            ),
        }
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// Outgoing function response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded response body
    pub body: String,
}

impl FunctionResponse {
    fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        let (status_code, body) = match serde_json::to_string(payload) {
            Ok(body) => (status_code, body),
            Err(err) => {
                error!(error = %err, "Failed to serialize function response");
                let fallback = RecipeError::unhandled(err.to_string());
                let body = serde_json::json!({
                    "error": fallback.error_message(),
                    "userMessage": fallback.user_message(),
                });
                (fallback.http_status(), body.to_string())
            }
        };

        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);

        Self {
            status_code,
            headers,
            body,
        }
    }

    fn from_error(err: &RecipeError) -> Self {
        if err.http_status() >= 500 {
            error!(error = %err, "Recipe search failed");
        } else {
            warn!(error = %err, "Rejected recipe search request");
        }
        Self::json(err.http_status(), &err.to_body())
    }
}

/// Parse a JSON-encoded event and handle it
///
/// An event that cannot be parsed is answered with the generic internal
/// error, so the host always gets a function response.
pub async fn handle_raw_event<P>(
    service: &RecipeSearchService<P>,
    raw: &str,
) -> FunctionResponse
where
    P: RecipeProvider,
{
    match serde_json::from_str::<FunctionEvent>(raw) {
        Ok(event) => handle_event(service, &event).await,
        Err(err) => FunctionResponse::from_error(&RecipeError::unhandled(format!(
            "function event is not valid JSON: {err}"
        ))),
    }
}

/// Handle one function event with the shared search pipeline
pub async fn handle_event<P>(
    service: &RecipeSearchService<P>,
    event: &FunctionEvent,
) -> FunctionResponse
where
    P: RecipeProvider,
{
    if !event.http_method.eq_ignore_ascii_case("GET") {
        warn!(method = %event.http_method, "Rejected non-GET function event");
        return FunctionResponse::json(405, &ErrorBody::method_not_allowed());
    }

    info!(
        ingredients = ?event.param("ingredients"),
        dietary_restrictions = ?event.param("dietaryRestrictions"),
        "Received recipe search event"
    );

    match service
        .search(event.param("ingredients"), event.param("dietaryRestrictions"))
        .await
    {
        Ok(envelope) => FunctionResponse::json(200, &envelope),
        Err(err) => FunctionResponse::from_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_spoonacular::{SpoonacularClient, SpoonacularConfig};
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(
        server: &MockServer,
        api_key: Option<&str>,
    ) -> RecipeSearchService<SpoonacularClient> {
        let mut config = SpoonacularConfig::default().with_base_url(server.uri());
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        RecipeSearchService::with_provider(SpoonacularClient::new(config).unwrap())
    }

    fn body(response: &FunctionResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_event_deserializes_host_shape() {
        let event: FunctionEvent = serde_json::from_value(json!({
            "httpMethod": "GET",
            "queryStringParameters": { "ingredients": "eggs" },
            "path": "/.netlify/functions/recipes"
        }))
        .unwrap();

        assert_eq!(event.param("ingredients"), Some("eggs"));
        assert_eq!(event.param("dietaryRestrictions"), None);
    }

    #[tokio::test]
    async fn test_invalid_raw_event_returns_unhandled_error() {
        let server = MockServer::start().await;
        let service = service_for(&server, Some("key"));

        for raw in ["{", "", r#"{"queryStringParameters":{}}"#] {
            let response = handle_raw_event(&service, raw).await;

            assert_eq!(response.status_code, 500, "{raw:?}");
            assert_eq!(body(&response)["error"], "Internal Server Error");
            assert_eq!(
                body(&response)["userMessage"],
                "An unexpected error occurred. Please try again later."
            );
            assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        }
    }

    #[tokio::test]
    async fn test_valid_raw_event_is_handled() {
        let server = MockServer::start().await;
        let service = service_for(&server, Some("key"));

        let raw = r#"{"httpMethod":"DELETE","queryStringParameters":null}"#;

        let response = handle_raw_event(&service, raw).await;

        assert_eq!(response.status_code, 405);
    }

    #[tokio::test]
    async fn test_non_get_event_returns_405() {
        let server = MockServer::start().await;
        let service = service_for(&server, Some("key"));
        let event = FunctionEvent {
            http_method: "POST".to_string(),
            query_string_parameters: None,
        };

        let response = handle_event(&service, &event).await;

        assert_eq!(response.status_code, 405);
        assert_eq!(body(&response)["error"], "Method Not Allowed");
        assert_eq!(body(&response)["userMessage"], "Only GET requests are allowed.");
    }

    #[tokio::test]
    async fn test_missing_query_parameters_returns_400() {
        let server = MockServer::start().await;
        let service = service_for(&server, Some("key"));
        let event = FunctionEvent {
            http_method: "GET".to_string(),
            query_string_parameters: None,
        };

        let response = handle_event(&service, &event).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(body(&response)["error"], "Missing ingredients parameter");
    }

    #[tokio::test]
    async fn test_success_sets_json_and_cors_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/findByIngredients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 3 }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/3/information"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "title": "Lentil Curry",
                "readyInMinutes": 40,
                "vegetarian": true,
                "vegan": true,
                "glutenFree": true,
                "dairyFree": true
            })))
            .mount(&server)
            .await;

        let service = service_for(&server, Some("key"));
        let event = FunctionEvent::get(&[
            ("ingredients", "lentils, rice"),
            ("dietaryRestrictions", r#"{"vegan":true}"#),
        ]);

        let response = handle_event(&service, &event).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        let payload = body(&response);
        assert_eq!(payload["recipes"][0]["title"], "Lentil Curry");
        assert!(payload["message"].is_null());
    }

    #[tokio::test]
    async fn test_malformed_restrictions_do_not_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/findByIngredients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let service = service_for(&server, Some("key"));
        let event = FunctionEvent::get(&[
            ("ingredients", "kale"),
            ("dietaryRestrictions", "{not-json"),
        ]);

        let response = handle_event(&service, &event).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response)["message"],
            "No recipes found with these ingredients."
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_returns_500() {
        let server = MockServer::start().await;
        let service = service_for(&server, None);

        let event = FunctionEvent::get(&[("ingredients", "kale")]);
        let response = handle_event(&service, &event).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body(&response)["error"],
            "Server configuration error: API key not found"
        );
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
    }
}
