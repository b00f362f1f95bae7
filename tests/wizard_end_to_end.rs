//! End-to-end tests for the report wizard.
//!
//! These tests drive complete reporting sessions through the application
//! handlers and the HTTP router, backed by the in-memory adapters:
//! 1. Start a session and resolve the reporter's location
//! 2. Pick a hazard type, fill in its fields and attach a photo
//! 3. Review the frozen draft
//! 4. Submit and find the report in the listing

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use coastal_sentinel::adapters::http::{app_router, ReportsAppState, WizardAppState};
use coastal_sentinel::adapters::{
    ClientGeolocationProvider, FixedGeolocationProvider, InMemoryReportStore,
    InMemoryWizardRepository, SimulatedSubmissionSink,
};
use coastal_sentinel::application::{
    AcquireLocationCommand, AcquireLocationHandler, DetailsUpdate, ListReportsHandler,
    ListReportsQuery, ProceedToReviewCommand, ProceedToReviewHandler, SelectHazardCommand,
    SelectHazardHandler, StartWizardCommand, StartWizardHandler, SubmitReportCommand,
    SubmitReportHandler, UpdateDetailsCommand, UpdateDetailsHandler,
};
use coastal_sentinel::domain::foundation::WizardId;
use coastal_sentinel::domain::hazard::{FieldValue, HazardCatalog, HazardType};
use coastal_sentinel::domain::location::{Coordinates, PlaceAddress};
use coastal_sentinel::domain::photo::SelectedImage;
use coastal_sentinel::domain::reports::ReportFilter;
use coastal_sentinel::domain::wizard::WizardStep;
use coastal_sentinel::ports::{
    GeocodingError, GeolocationOptions, ReportedPosition, ReverseGeocoder, WizardRepository,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Geocoder that always answers with Santa Monica.
struct SantaMonicaGeocoder;

#[async_trait]
impl ReverseGeocoder for SantaMonicaGeocoder {
    async fn lookup(&self, _coordinates: &Coordinates) -> Result<PlaceAddress, GeocodingError> {
        Ok(PlaceAddress {
            city: Some("Santa Monica".to_string()),
            state: Some("CA".to_string()),
            ..Default::default()
        })
    }
}

/// Geocoder whose service is down.
struct OfflineGeocoder;

#[async_trait]
impl ReverseGeocoder for OfflineGeocoder {
    async fn lookup(&self, _coordinates: &Coordinates) -> Result<PlaceAddress, GeocodingError> {
        Err(GeocodingError::Network("connection refused".to_string()))
    }
}

struct Fixture {
    repository: Arc<InMemoryWizardRepository>,
    reports: InMemoryReportStore,
    sink: SimulatedSubmissionSink,
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl Fixture {
    fn new() -> Self {
        let reports = InMemoryReportStore::new();
        Self {
            repository: Arc::new(InMemoryWizardRepository::new()),
            sink: SimulatedSubmissionSink::new(reports.clone()),
            reports,
            geocoder: Arc::new(SantaMonicaGeocoder),
        }
    }

    fn acquire_handler(&self) -> AcquireLocationHandler {
        AcquireLocationHandler::new(
            self.repository.clone(),
            Arc::new(ClientGeolocationProvider::new()),
            self.geocoder.clone(),
            GeolocationOptions::default(),
        )
    }

    async fn update(&self, wizard_id: WizardId, update: DetailsUpdate) {
        UpdateDetailsHandler::new(self.repository.clone())
            .handle(UpdateDetailsCommand { wizard_id, update })
            .await
            .unwrap();
    }
}

fn pier_position() -> ReportedPosition {
    ReportedPosition::Fix {
        latitude: 34.0194,
        longitude: -118.4912,
        captured_at: None,
    }
}

fn beach_photo() -> SelectedImage {
    SelectedImage {
        file_name: "algae.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
    }
}

// =============================================================================
// Application Flow
// =============================================================================

#[tokio::test]
async fn water_quality_report_from_start_to_confirmation() {
    let fixture = Fixture::new();

    // 1. Start and locate
    let wizard = StartWizardHandler::new(fixture.repository.clone())
        .handle(StartWizardCommand)
        .await
        .unwrap();
    let id = *wizard.id();
    assert!(!wizard.can_select_hazard());

    let located = fixture
        .acquire_handler()
        .handle(AcquireLocationCommand {
            wizard_id: id,
            reported: Some(pier_position()),
        })
        .await
        .unwrap();
    assert!(located.wizard.can_select_hazard());

    // 2. Select and fill in the form
    let selected = SelectHazardHandler::new(fixture.repository.clone(), HazardCatalog::standard())
        .handle(SelectHazardCommand {
            wizard_id: id,
            hazard_type: "water-quality".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(selected.schema.form_title, "Water Quality Report");

    fixture
        .update(
            id,
            DetailsUpdate::SetField {
                name: "issue".to_string(),
                value: FieldValue::choice("Algae Bloom"),
            },
        )
        .await;
    fixture
        .update(
            id,
            DetailsUpdate::SetField {
                name: "severity".to_string(),
                value: FieldValue::Position(2),
            },
        )
        .await;
    fixture
        .update(id, DetailsUpdate::SetDescription("Green film along the tide line".to_string()))
        .await;
    fixture
        .update(id, DetailsUpdate::CapturePhoto(Some(beach_photo())))
        .await;

    // 3. Review
    let reviewed = ProceedToReviewHandler::new(fixture.repository.clone())
        .handle(ProceedToReviewCommand { wizard_id: id })
        .await
        .unwrap();
    assert_eq!(reviewed.wizard.step(), WizardStep::Reviewing);
    assert_eq!(reviewed.review.hazard_label, "Water Quality Issue");
    assert_eq!(reviewed.review.location_name, "Santa Monica, CA");
    assert_eq!(reviewed.review.value_of("issue"), Some("Algae Bloom"));
    assert_eq!(reviewed.review.value_of("severity"), Some("Severe"));

    let draft = serde_json::to_value(reviewed.wizard.draft().unwrap()).unwrap();
    assert_eq!(draft["hazardType"], "water-quality");
    assert_eq!(draft["location"]["lat"], 34.0194);
    assert_eq!(draft["locationName"], "Santa Monica, CA");
    assert_eq!(draft["fields"]["severity"], 2);
    assert!(draft["photo"]
        .as_str()
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));

    // 4. Submit
    let submitted = SubmitReportHandler::new(fixture.repository.clone(), Arc::new(fixture.sink.clone()))
        .handle(SubmitReportCommand { wizard_id: id })
        .await
        .unwrap();
    assert_eq!(submitted.wizard.step(), WizardStep::Confirmed);
    assert!(submitted.report_id.as_str().starts_with("CS-"));
    assert!(submitted.wizard.draft().is_none());

    let listed = ListReportsHandler::new(Arc::new(fixture.reports.clone()))
        .handle(ListReportsQuery {
            filter: ReportFilter::all().with_types([HazardType::WaterQuality]),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, submitted.report_id);
    assert_eq!(listed[0].description, "Green film along the tide line");
}

#[tokio::test]
async fn offline_geocoder_still_allows_reporting() {
    let mut fixture = Fixture::new();
    fixture.geocoder = Arc::new(OfflineGeocoder);

    let wizard = StartWizardHandler::new(fixture.repository.clone())
        .handle(StartWizardCommand)
        .await
        .unwrap();

    let located = fixture
        .acquire_handler()
        .handle(AcquireLocationCommand {
            wizard_id: *wizard.id(),
            reported: Some(pier_position()),
        })
        .await
        .unwrap();

    let resolved = located.wizard.probe().fix().resolved().unwrap();
    assert_eq!(resolved.place_name, "Location Acquired");
    assert!(located.wizard.can_select_hazard());
}

#[tokio::test]
async fn configured_fallback_position_is_used_when_device_sends_none() {
    let fixture = Fixture::new();
    let fallback = FixedGeolocationProvider::at(Coordinates::new(34.0194, -118.4912).unwrap());
    let handler = AcquireLocationHandler::new(
        fixture.repository.clone(),
        Arc::new(ClientGeolocationProvider::new().with_fallback(Arc::new(fallback))),
        fixture.geocoder.clone(),
        GeolocationOptions::default(),
    );
    let wizard = StartWizardHandler::new(fixture.repository.clone())
        .handle(StartWizardCommand)
        .await
        .unwrap();

    let located = handler
        .handle(AcquireLocationCommand {
            wizard_id: *wizard.id(),
            reported: None,
        })
        .await
        .unwrap();

    assert!(located.wizard.can_select_hazard());
    let stored = fixture
        .repository
        .find_by_id(wizard.id())
        .await
        .unwrap()
        .unwrap();
    assert!(stored.can_select_hazard());
}

// =============================================================================
// HTTP Flow
// =============================================================================

async fn call(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn submitted_report_appears_in_listing_over_http() {
    let fixture = Fixture::new();
    let app = app_router(
        WizardAppState {
            repository: fixture.repository.clone(),
            geolocation: Arc::new(ClientGeolocationProvider::new()),
            geocoder: fixture.geocoder.clone(),
            sink: Arc::new(fixture.sink.clone()),
            geolocation_options: GeolocationOptions::default(),
            catalog: HazardCatalog::standard(),
            submission_lease: Duration::from_secs(60),
            photo_body_limit: 16 * 1024 * 1024,
        },
        ReportsAppState {
            reader: Arc::new(fixture.reports.clone()),
        },
    );

    let (status, body) = call(&app, "POST", "/api/wizards", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let base = format!("/api/wizards/{}", body["wizard_id"].as_str().unwrap());

    let steps = [
        ("POST", format!("{}/location", base), Some(json!({"latitude": 34.0194, "longitude": -118.4912}))),
        ("POST", format!("{}/hazard", base), Some(json!({"hazard_type": "injured-animal"}))),
        ("PUT", format!("{}/fields/animalType", base), Some(json!({"value": "Seal/Sea Lion"}))),
        ("PUT", format!("{}/fields/condition", base), Some(json!({"value": "Entangled"}))),
        ("POST", format!("{}/photo", base), Some(json!({"data_url": "data:image/png;base64,iVBORw0KGgo="}))),
        ("POST", format!("{}/review", base), None),
    ];
    for (method, uri, body) in steps {
        let (status, response) = call(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::OK, "{} {} -> {}", method, uri, response);
    }

    let (status, body) = call(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::OK);
    let report_id = body["confirmation"]["report_id"].as_str().unwrap().to_string();

    let (status, listing) = call(&app, "GET", "/api/reports?types=injured-animal&window=24h", None).await;
    assert_eq!(status, StatusCode::OK);
    let listing = listing.as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["id"], report_id.as_str());
    assert_eq!(listing[0]["title"], "Injured Marine Life");
    assert_eq!(listing[0]["fields"]["condition"], "Entangled");
}
