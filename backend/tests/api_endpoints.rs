//! End-to-end endpoint behaviour against the production app wiring.

use actix_web::{http::StatusCode, test as actix_test, web};
use serde_json::{json, Value};

use techpulse_backend::domain::metrics::{Measurement, Metric, Trend};
use techpulse_backend::domain::records::{
    NewAnalyticsPoint, NewActivity, NewDepartment, NewEmployee, NewRecommendation, NewTechnology,
};
use techpulse_backend::inbound::http::health::HealthState;
use techpulse_backend::server::build_app;
use techpulse_backend::storage::MemoryStore;

fn small_dataset() -> MemoryStore {
    let store = MemoryStore::new();
    for name in ["IT", "Marketing"] {
        store
            .create_department(NewDepartment { name: name.to_owned() })
            .expect("create department");
    }
    store.create_technology(NewTechnology {
        name: "CRM System".to_owned(),
        description: Some("Customer relationship management software".to_owned()),
    });
    store.create_technology(NewTechnology {
        name: "ERP Solution".to_owned(),
        description: None,
    });
    for (name, email, department_id) in [
        ("John Smith", "john@example.com", 1),
        ("Sarah Johnson", "sarah@example.com", 2),
    ] {
        store
            .create_employee(NewEmployee {
                name: name.to_owned(),
                email: email.to_owned(),
                department_id,
            })
            .expect("create employee");
    }
    store
        .record_activity(NewActivity {
            employee_id: 1,
            technology_id: 1,
            feature_used: "Search".to_owned(),
            usage_count: 5,
            successful: true,
        })
        .expect("record activity");
    store
        .record_activity(NewActivity {
            employee_id: 2,
            technology_id: 2,
            feature_used: "Export".to_owned(),
            usage_count: 1,
            successful: false,
        })
        .expect("record activity");
    store
        .create_recommendation(NewRecommendation {
            employee_id: 1,
            technology_id: 2,
            recommendation_type: "Peer Training".to_owned(),
            description: "Collaboration features deep dive".to_owned(),
        })
        .expect("create recommendation");
    store
        .record_analytics(NewAnalyticsPoint {
            department_id: Some(1),
            technology_id: 1,
            metric: Metric::AdoptionRate(Measurement::percent(80, Trend::Up)),
        })
        .expect("record analytics");
    store
        .record_analytics(NewAnalyticsPoint {
            department_id: None,
            technology_id: 1,
            metric: Metric::AdoptionRate(Measurement::percent(64, Trend::Down)),
        })
        .expect("record analytics");
    store
}

#[actix_web::test]
async fn single_record_reads_cover_success_and_failure() {
    let app = actix_test::init_service(build_app(
        web::Data::new(small_dataset()),
        web::Data::new(HealthState::new()),
    ))
    .await;

    let ok = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/departments/2").to_request(),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(ok).await;
    assert_eq!(body, json!({"id": 2, "name": "Marketing"}));

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/technologies/99").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(missing).await;
    assert_eq!(body, json!({"error": "Technology not found"}));

    let invalid = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/departments/oops").to_request(),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(invalid).await;
    assert_eq!(body, json!({"error": "Invalid department ID"}));
}

#[actix_web::test]
async fn activity_filters_apply_in_precedence_order() {
    let app = actix_test::init_service(build_app(
        web::Data::new(small_dataset()),
        web::Data::new(HealthState::new()),
    ))
    .await;

    let by_employee = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/activities?employeeId=1")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(by_employee).await;
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["featureUsed"], "Search");

    // Employee filter wins even when another filter is present.
    let combined = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/activities?employeeId=1&technologyId=2")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(combined).await;
    assert_eq!(body.as_array().expect("array").len(), 1);
    assert_eq!(body[0]["technologyId"], 1);

    let by_department = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/activities?departmentId=2")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(by_department).await;
    assert_eq!(body.as_array().expect("array").len(), 1);
    assert_eq!(body[0]["employeeId"], 2);
}

#[actix_web::test]
async fn analytics_department_filter_takes_precedence() {
    let app = actix_test::init_service(build_app(
        web::Data::new(small_dataset()),
        web::Data::new(HealthState::new()),
    ))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/analytics?departmentId=1&technologyId=1")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(response).await;
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["departmentId"], 1);
    assert_eq!(rows[0]["metricName"], "adoption_rate");

    let technology_level = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/analytics?technologyId=1")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(technology_level).await;
    assert_eq!(body.as_array().expect("array").len(), 2);
}

#[actix_web::test]
async fn malformed_json_bodies_use_the_error_envelope() {
    let app = actix_test::init_service(build_app(
        web::Data::new(MemoryStore::new()),
        web::Data::new(HealthState::new()),
    ))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/waitlist")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"not-email\": true}")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn responses_carry_request_ids() {
    let app = actix_test::init_service(build_app(
        web::Data::new(MemoryStore::new()),
        web::Data::new(HealthState::new()),
    ))
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/departments").to_request(),
    )
    .await;
    assert!(response.headers().contains_key("x-request-id"));
}
