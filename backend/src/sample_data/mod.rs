//! Demo dataset generation.
//!
//! Populates a fresh store with the sample organisation the dashboard demo
//! renders: five departments, four technologies, ten employees, randomised
//! activity and recommendation records, and a full analytics grid. Pass an
//! RNG seeded from a fixed value for a reproducible dataset.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::domain::metrics::{FeatureBreakdown, Measurement, Metric, MetricUnit, Trend};
use crate::domain::records::{
    NewAnalyticsPoint, NewActivity, NewDepartment, NewEmployee, NewRecommendation, NewTechnology,
};
use crate::storage::{MemoryStore, StoreError};

const DEPARTMENTS: [&str; 5] = ["IT", "Marketing", "Sales", "Finance", "HR"];

const TECHNOLOGIES: [(&str, &str); 4] = [
    ("CRM System", "Customer relationship management software"),
    ("ERP Solution", "Enterprise resource planning system"),
    ("Collaboration Tools", "Team communication and file sharing"),
    ("Data Analytics Platform", "Business intelligence and reporting"),
];

const EMPLOYEES: [(&str, &str, i32); 10] = [
    ("John Smith", "john@example.com", 1),
    ("Sarah Johnson", "sarah@example.com", 1),
    ("Michael Brown", "michael@example.com", 2),
    ("Emily Davis", "emily@example.com", 2),
    ("David Wilson", "david@example.com", 3),
    ("Jennifer Lee", "jennifer@example.com", 3),
    ("Robert Taylor", "robert@example.com", 4),
    ("Lisa Martinez", "lisa@example.com", 4),
    ("James Anderson", "james@example.com", 5),
    ("Patricia Thomas", "patricia@example.com", 5),
];

const FEATURES: [&str; 10] = [
    "Dashboard",
    "Reports",
    "Configuration",
    "Search",
    "Export",
    "Import",
    "User Management",
    "Settings",
    "Notifications",
    "Calendar",
];

const RECOMMENDATION_TYPES: [&str; 5] = [
    "Video Tutorial",
    "Interactive Guide",
    "Hands-on Workshop",
    "Documentation Review",
    "Peer Training",
];

const DESCRIPTIONS: [&str; 7] = [
    "Learn the basics of using the reporting features",
    "Advanced data visualization techniques",
    "Efficient workflow configuration",
    "Best practices for data management",
    "Collaboration features deep dive",
    "Security and permissions overview",
    "Integration with other systems",
];

/// Seed the demo dataset into `store`.
///
/// # Errors
/// Propagates [`StoreError`] on duplicate or dangling references; the
/// generated data never triggers either on a fresh store.
pub fn seed_demo_data(store: &MemoryStore, rng: &mut impl Rng) -> Result<(), StoreError> {
    for name in DEPARTMENTS {
        store.create_department(NewDepartment { name: name.to_owned() })?;
    }
    for (name, description) in TECHNOLOGIES {
        store.create_technology(NewTechnology {
            name: name.to_owned(),
            description: Some(description.to_owned()),
        });
    }
    for (name, email, department_id) in EMPLOYEES {
        store.create_employee(NewEmployee {
            name: name.to_owned(),
            email: email.to_owned(),
            department_id,
        })?;
    }

    generate_activities(store, rng)?;
    generate_recommendations(store, rng)?;
    generate_analytics(store, rng)?;

    debug!(
        activities = store.activities().len(),
        recommendations = store.recommendations().len(),
        analytics = store.analytics().len(),
        "demo data generated"
    );
    Ok(())
}

/// Each employee uses one or two technologies, with 10-20 activities per
/// pairing and a 70% success rate.
fn generate_activities(store: &MemoryStore, rng: &mut impl Rng) -> Result<(), StoreError> {
    let employee_count = i32::try_from(EMPLOYEES.len()).unwrap_or(0);
    let technology_count = i32::try_from(TECHNOLOGIES.len()).unwrap_or(1);
    for employee_id in 1..=employee_count {
        let technology_uses = rng.gen_range(1..=2);
        for _ in 0..technology_uses {
            let technology_id = rng.gen_range(1..=technology_count);
            let activity_count = rng.gen_range(10..=20);
            for _ in 0..activity_count {
                let feature = FEATURES[rng.gen_range(0..FEATURES.len())];
                store.record_activity(NewActivity {
                    employee_id,
                    technology_id,
                    feature_used: feature.to_owned(),
                    usage_count: rng.gen_range(1..=10),
                    successful: rng.gen_bool(0.7),
                })?;
            }
        }
    }
    Ok(())
}

/// One or two open recommendations per employee.
fn generate_recommendations(store: &MemoryStore, rng: &mut impl Rng) -> Result<(), StoreError> {
    let employee_count = i32::try_from(EMPLOYEES.len()).unwrap_or(0);
    let technology_count = i32::try_from(TECHNOLOGIES.len()).unwrap_or(1);
    for employee_id in 1..=employee_count {
        for _ in 0..rng.gen_range(1..=2) {
            store.create_recommendation(NewRecommendation {
                employee_id,
                technology_id: rng.gen_range(1..=technology_count),
                recommendation_type: RECOMMENDATION_TYPES
                    [rng.gen_range(0..RECOMMENDATION_TYPES.len())]
                .to_owned(),
                description: DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())].to_owned(),
            })?;
        }
    }
    Ok(())
}

/// Analytics grid: every metric kind per department-technology pairing, plus
/// technology-level observations without a department scope.
fn generate_analytics(store: &MemoryStore, rng: &mut impl Rng) -> Result<(), StoreError> {
    let department_count = i32::try_from(DEPARTMENTS.len()).unwrap_or(0);
    let technology_count = i32::try_from(TECHNOLOGIES.len()).unwrap_or(0);

    for department_id in 1..=department_count {
        for technology_id in 1..=technology_count {
            for metric in department_metrics(rng) {
                store.record_analytics(NewAnalyticsPoint {
                    department_id: Some(department_id),
                    technology_id,
                    metric,
                })?;
            }
        }
    }

    for technology_id in 1..=technology_count {
        for metric in technology_metrics(rng) {
            store.record_analytics(NewAnalyticsPoint {
                department_id: None,
                technology_id,
                metric,
            })?;
        }
    }
    Ok(())
}

fn department_metrics(rng: &mut impl Rng) -> Vec<Metric> {
    vec![
        Metric::AdoptionRate(gauge(rng, 50..=95, MetricUnit::Percent)),
        Metric::ProficiencyScore(gauge(rng, 1..=10, MetricUnit::Score)),
        Metric::FeatureUsage(usage_breakdown(rng, 1, 200..=500)),
        Metric::CompletionRate(gauge(rng, 30..=100, MetricUnit::Percent)),
        Metric::TimeSpent(gauge(rng, 10..=130, MetricUnit::Minutes)),
    ]
}

fn technology_metrics(rng: &mut impl Rng) -> Vec<Metric> {
    vec![
        Metric::AdoptionRate(gauge(rng, 50..=95, MetricUnit::Percent)),
        Metric::ProficiencyScore(gauge(rng, 0..=99, MetricUnit::Score)),
        Metric::FeatureUsage(usage_breakdown(rng, 3, 600..=1600)),
        Metric::CompletionRate(gauge(rng, 0..=99, MetricUnit::Percent)),
        Metric::TimeSpent(gauge(rng, 0..=99, MetricUnit::Minutes)),
    ]
}

fn gauge(rng: &mut impl Rng, range: RangeInclusive<i64>, unit: MetricUnit) -> Measurement {
    Measurement {
        value: rng.gen_range(range),
        unit,
        trend: if rng.gen_bool(0.5) { Trend::Up } else { Trend::Down },
    }
}

/// Counts for the five dashboard-visible features, scaled up for the
/// technology-level grid.
fn usage_breakdown(
    rng: &mut impl Rng,
    scale: u64,
    total: RangeInclusive<u64>,
) -> FeatureBreakdown {
    let bases: [(&str, u64, u64); 5] = [
        ("Dashboard", 50, 100),
        ("Reports", 30, 80),
        ("Configuration", 10, 40),
        ("Search", 40, 90),
        ("Export", 20, 60),
    ];
    let features = bases
        .into_iter()
        .map(|(name, base, spread)| {
            (
                name.to_owned(),
                scale * base + rng.gen_range(0..scale * spread),
            )
        })
        .collect();
    FeatureBreakdown {
        features,
        total: rng.gen_range(total),
    }
}
