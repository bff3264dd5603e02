//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every REST path and schema. The generated document
//! backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::metrics::{FeatureBreakdown, Measurement, Metric, MetricUnit, Trend};
use crate::domain::records::{
    AnalyticsPoint, Department, Employee, Technology, TrainingRecommendation, UserActivity,
    WaitlistSubscriber,
};
use crate::domain::summary::{CollectionCounts, DashboardSummary};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::waitlist::WaitlistRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TechPulse backend API",
        description = "Technology adoption records, waitlist signup, and the dashboard summary."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::waitlist::join_waitlist,
        crate::inbound::http::waitlist::list_waitlist_subscribers,
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::departments::get_department,
        crate::inbound::http::technologies::list_technologies,
        crate::inbound::http::technologies::get_technology,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::activities::list_activities,
        crate::inbound::http::recommendations::list_recommendations,
        crate::inbound::http::recommendations::complete_recommendation,
        crate::inbound::http::analytics::list_analytics,
        crate::inbound::http::dashboard::dashboard_summary,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        ErrorBody,
        WaitlistRequest,
        WaitlistSubscriber,
        Department,
        Technology,
        Employee,
        UserActivity,
        TrainingRecommendation,
        AnalyticsPoint,
        Metric,
        Measurement,
        MetricUnit,
        Trend,
        FeatureBreakdown,
        DashboardSummary,
        CollectionCounts,
    )),
    tags(
        (name = "waitlist", description = "Marketing site signups"),
        (name = "departments", description = "Organisation structure"),
        (name = "technologies", description = "Tracked technology rollouts"),
        (name = "employees", description = "Employee records"),
        (name = "activities", description = "Feature usage activity"),
        (name = "recommendations", description = "Training recommendations"),
        (name = "analytics", description = "Metric observations"),
        (name = "dashboard", description = "Aggregated dashboard payloads"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
