//! Integration tests for WeatherClient using wiremock.

use weather_lookup::client::{LookupError, WeatherClient};
use weather_lookup::config::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    let config = Config {
        api_key: "test-key".into(),
        base_url: server.uri(),
        timeout: None,
    };
    WeatherClient::new(&config).unwrap()
}

fn weather_body(name: &str, temp: f64, descriptions: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.35, "lat": 48.85 },
        "name": name,
        "main": { "temp": temp, "feels_like": temp - 1.0, "humidity": 60 },
        "weather": descriptions
            .iter()
            .map(|d| serde_json::json!({ "id": 800, "main": "Clear", "description": d }))
            .collect::<Vec<_>>(),
        "cod": 200
    })
}

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_body("Paris", 18.5, &["clear sky"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .current_weather("Paris")
        .await
        .unwrap();

    assert_eq!(result.location_name, "Paris");
    assert_eq!(result.temperature_celsius, 18.5);
    assert_eq!(result.condition_description, "clear sky");
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New York"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(weather_body("New York", 21.0, &["few clouds"])),
        )
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .current_weather("New York")
        .await
        .unwrap();

    assert_eq!(result.location_name, "New York");
}

#[tokio::test]
async fn test_only_first_condition_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(weather_body("London", 9.0, &["light rain", "mist", "fog"])),
        )
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .current_weather("London")
        .await
        .unwrap();

    assert_eq!(result.condition_description, "light rain");
}

#[tokio::test]
async fn test_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .current_weather("Atlantis")
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::NotFound(ref city) if city == "Atlantis"));
}

#[tokio::test]
async fn test_error_status_fails_even_with_valid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(weather_body("Paris", 18.5, &["clear sky"])),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .current_weather("Paris")
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Status(500)));
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .current_weather("Paris")
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1
    let client = WeatherClient::new(&Config {
        api_key: "test-key".into(),
        base_url: "http://127.0.0.1:1".into(),
        timeout: None,
    })
    .unwrap();

    let err = client.current_weather("Paris").await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
}
