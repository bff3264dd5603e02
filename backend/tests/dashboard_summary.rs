//! Dashboard summary endpoint behaviour over hand-built and generated data.

use actix_web::{test as actix_test, web};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::Value;

use techpulse_backend::domain::metrics::{Measurement, Metric, Trend};
use techpulse_backend::domain::records::{
    NewAnalyticsPoint, NewActivity, NewDepartment, NewEmployee, NewTechnology,
};
use techpulse_backend::inbound::http::health::HealthState;
use techpulse_backend::sample_data::seed_demo_data;
use techpulse_backend::server::build_app;
use techpulse_backend::storage::MemoryStore;

async fn fetch_summary(store: MemoryStore) -> Value {
    let app = actix_test::init_service(build_app(
        web::Data::new(store),
        web::Data::new(HealthState::new()),
    ))
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/dashboard/summary")
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());
    actix_test::read_body_json(response).await
}

fn scenario_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .create_department(NewDepartment { name: "IT".to_owned() })
        .expect("create department");
    store.create_technology(NewTechnology {
        name: "CRM System".to_owned(),
        description: None,
    });
    store
        .create_employee(NewEmployee {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            department_id: 1,
        })
        .expect("create employee");
    for (feature, usage_count, successful) in
        [("Search", 5, true), ("Search", 2, false), ("Export", 1, true)]
    {
        store
            .record_activity(NewActivity {
                employee_id: 1,
                technology_id: 1,
                feature_used: feature.to_owned(),
                usage_count,
                successful,
            })
            .expect("record activity");
    }
    store
}

#[actix_web::test]
async fn scenario_dataset_produces_expected_figures() {
    let summary = fetch_summary(scenario_store()).await;

    assert_eq!(summary["successRate"]["value"], 67);
    assert_eq!(summary["successRate"]["unit"], "percent");
    assert_eq!(
        summary["featureUsage"],
        serde_json::json!({"Search": 7, "Export": 1})
    );
    assert_eq!(summary["counts"]["activities"], 3);
    assert_eq!(summary["counts"]["employees"], 1);
}

#[actix_web::test]
async fn technologies_without_observations_default_to_zero_neutral() {
    let store = scenario_store();
    store
        .record_analytics(NewAnalyticsPoint {
            department_id: Some(1),
            technology_id: 1,
            metric: Metric::AdoptionRate(Measurement::percent(80, Trend::Up)),
        })
        .expect("record analytics");

    let summary = fetch_summary(store).await;

    // No technology-level observation exists, so the default applies.
    assert_eq!(
        summary["adoptionByTechnology"]["CRM System"],
        serde_json::json!({"value": 0, "unit": "percent", "trend": "neutral"})
    );
    // The one department observation averages to itself, trend neutral.
    assert_eq!(
        summary["adoptionByDepartment"]["IT"],
        serde_json::json!({"value": 80, "unit": "percent", "trend": "neutral"})
    );
}

#[actix_web::test]
async fn empty_store_summarises_without_division_errors() {
    let summary = fetch_summary(MemoryStore::new()).await;

    assert_eq!(summary["successRate"]["value"], 0);
    assert_eq!(summary["counts"]["departments"], 0);
    assert_eq!(summary["featureUsage"], serde_json::json!({}));
    assert_eq!(summary["recentActivities"], serde_json::json!([]));
    assert_eq!(summary["pendingRecommendations"], serde_json::json!([]));
}

#[actix_web::test]
async fn generated_demo_data_yields_a_well_formed_summary() {
    let store = MemoryStore::new();
    let mut rng = SmallRng::seed_from_u64(42);
    seed_demo_data(&store, &mut rng).expect("seed demo data");

    let summary = fetch_summary(store).await;

    assert_eq!(summary["counts"]["departments"], 5);
    assert_eq!(summary["counts"]["technologies"], 4);
    assert_eq!(summary["counts"]["employees"], 10);

    let feature_usage = summary["featureUsage"].as_object().expect("object");
    assert!(feature_usage.len() <= 5);
    let totals: Vec<i64> = feature_usage
        .values()
        .map(|v| v.as_i64().expect("total"))
        .collect();
    assert!(totals.windows(2).all(|w| w[0] >= w[1]), "usage descending");

    // Every technology gets an adoption entry; the seeded grid provides one
    // technology-level observation each, in the generated 50-95 band.
    let adoption = summary["adoptionByTechnology"].as_object().expect("object");
    assert_eq!(adoption.len(), 4);
    for measurement in adoption.values() {
        let value = measurement["value"].as_i64().expect("value");
        assert!((50..=95).contains(&value));
    }

    let recent = summary["recentActivities"].as_array().expect("array");
    assert_eq!(recent.len(), 10);

    let pending = summary["pendingRecommendations"].as_array().expect("array");
    assert!(pending.len() <= 10);
    assert!(pending.iter().all(|r| r["isCompleted"] == false));
}
