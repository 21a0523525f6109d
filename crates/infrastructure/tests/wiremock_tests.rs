//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - The wired workflow against mocked CEP and forecast services
//! - Error mapping from the HTTP clients up to the workflow state

use domain::WorkflowPhase;
use infrastructure::{AppConfig, build_workflow};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cep_body(lat: serde_json::Value, lng: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "cep": "01001000",
        "address_type": "Praça",
        "address_name": "da Sé",
        "address": "Praça da Sé",
        "state": "SP",
        "district": "Sé",
        "lat": lat,
        "lng": lng,
        "city": "São Paulo",
        "city_ibge": "3550308",
        "ddd": "11"
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": -23.5,
        "longitude": -46.625,
        "timezone": "America/Sao_Paulo",
        "current_weather": {
            "time": "2024-01-15T12:00",
            "temperature": 27.3,
            "windspeed": 9.4,
            "winddirection": 135,
            "weathercode": 0
        },
        "hourly": {
            "time": ["2024-01-15T11:00", "2024-01-15T12:00"],
            "temperature_2m": [26.1, 27.3],
            "relativehumidity_2m": [68, 62],
            "windspeed_10m": [8.0, 9.4]
        },
        "daily": {
            "time": [
                "2024-01-15", "2024-01-16", "2024-01-17", "2024-01-18",
                "2024-01-19", "2024-01-20", "2024-01-21"
            ],
            "weathercode": [0, 61, 80, 95, 3, 0, 1],
            "temperature_2m_max": [30.1, 26.4, 25.0, 27.8, 29.2, 31.0, 30.5],
            "temperature_2m_min": [19.8, 18.9, 18.2, 19.0, 19.5, 20.1, 20.4]
        }
    })
}

struct Services {
    cep: MockServer,
    weather: MockServer,
}

impl Services {
    async fn start() -> Self {
        Self {
            cep: MockServer::start().await,
            weather: MockServer::start().await,
        }
    }

    fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.cep.base_url = self.cep.uri();
        config.cep.timeout_secs = Some(5);
        config.weather.base_url = self.weather.uri();
        config.weather.timeout_secs = Some(5);
        config
    }

    async fn cep_responds(&self, cep: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/json/{cep}")))
            .respond_with(response)
            .mount(&self.cep)
            .await;
    }

    async fn weather_responds(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.weather)
            .await;
    }
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn hyphenated_cep_resolves_and_enriches() {
    let services = Services::start().await;
    services
        .cep_responds(
            "01001000",
            ResponseTemplate::new(200)
                .set_body_json(cep_body("-23.5502784".into(), "-46.6342179".into())),
        )
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "-23.5502784"))
        .and(query_param("longitude", "-46.6342179"))
        .and(query_param("timezone", "America/Sao_Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&services.weather)
        .await;

    let workflow = build_workflow(&services.config()).unwrap();
    let state = workflow.submit("01001-000").await.unwrap();

    assert_eq!(state.phase, WorkflowPhase::Settled);
    assert!(!state.is_loading());
    assert!(state.error.is_none());

    let address = state.address.as_ref().unwrap();
    assert_eq!(address.one_line(), "Praça da Sé, Sé - São Paulo/SP");
    assert_eq!(address.area_code.as_deref(), Some("11"));

    let weather = state.weather.as_ref().unwrap();
    assert_eq!(weather.current.condition().description, "Clear sky");
    assert_eq!(weather.current.humidity.map(|h| h.value()), Some(62));
    assert_eq!(weather.daily.len(), 7);

    assert_eq!(workflow.state(), state);
}

// ============================================================================
// Address failures
// ============================================================================

#[tokio::test]
async fn not_found_cep_fails_without_weather_call() {
    let services = Services::start().await;
    services
        .cep_responds(
            "99999999",
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "not_found",
                "message": "O CEP 99999999 não foi encontrado",
                "status": 404
            })),
        )
        .await;
    services
        .weather_responds(ResponseTemplate::new(200).set_body_json(forecast_body()), 0)
        .await;

    let workflow = build_workflow(&services.config()).unwrap();
    let err = workflow.submit("99999-999").await.unwrap_err();

    assert!(err.is_not_found());
    let state = workflow.state();
    assert_eq!(state.phase, WorkflowPhase::Failed);
    assert_eq!(state.error.as_deref(), Some("CEP 99999999 not found"));
}

#[tokio::test]
async fn cep_service_outage_fails_the_submission() {
    let services = Services::start().await;
    services
        .cep_responds("01001000", ResponseTemplate::new(503))
        .await;
    services
        .weather_responds(ResponseTemplate::new(200).set_body_json(forecast_body()), 0)
        .await;

    let workflow = build_workflow(&services.config()).unwrap();
    let err = workflow.submit("01001000").await.unwrap_err();

    assert!(!err.is_not_found());
    assert!(err.to_string().contains("503"));
    assert_eq!(workflow.state().phase, WorkflowPhase::Failed);
}

#[tokio::test]
async fn short_cep_never_reaches_either_service() {
    let services = Services::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&services.cep)
        .await;
    services
        .weather_responds(ResponseTemplate::new(500), 0)
        .await;

    let workflow = build_workflow(&services.config()).unwrap();
    let err = workflow.submit("0100-100").await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(workflow.state().phase, WorkflowPhase::Failed);
}

// ============================================================================
// Weather degradation
// ============================================================================

#[tokio::test]
async fn weather_outage_still_settles_with_address() {
    let services = Services::start().await;
    services
        .cep_responds(
            "01001000",
            ResponseTemplate::new(200)
                .set_body_json(cep_body((-23.5502784).into(), (-46.6342179).into())),
        )
        .await;
    services
        .weather_responds(ResponseTemplate::new(500), 1)
        .await;

    let workflow = build_workflow(&services.config()).unwrap();
    let state = workflow.submit("01001000").await.unwrap();

    assert_eq!(state.phase, WorkflowPhase::Settled);
    assert!(state.address.is_some());
    assert!(state.weather.is_none());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn address_without_coordinates_skips_weather() {
    let services = Services::start().await;
    services
        .cep_responds(
            "01001000",
            ResponseTemplate::new(200).set_body_json(cep_body("".into(), "".into())),
        )
        .await;
    services
        .weather_responds(ResponseTemplate::new(200).set_body_json(forecast_body()), 0)
        .await;

    let workflow = build_workflow(&services.config()).unwrap();
    let state = workflow.submit("01001000").await.unwrap();

    assert_eq!(state.phase, WorkflowPhase::Settled);
    assert!(state.address.as_ref().unwrap().location.is_none());
    assert!(state.weather.is_none());
}
