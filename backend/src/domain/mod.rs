//! Domain records and aggregation logic.
//!
//! Purpose: define the strongly typed entities served by the API and the
//! pure dashboard summary computation over them. Types are immutable once
//! stored; serialisation contracts (serde, camelCase) are documented on each
//! type.

pub mod metrics;
pub mod records;
pub mod summary;

pub use self::metrics::{FeatureBreakdown, Measurement, Metric, MetricUnit, Trend};
pub use self::records::{
    AnalyticsPoint, Department, EmailAddress, EmailValidationError, Employee, NewAnalyticsPoint,
    NewActivity, NewDepartment, NewEmployee, NewRecommendation, NewTechnology, Technology,
    TrainingRecommendation, UserActivity, WaitlistSubscriber,
};
pub use self::summary::{CollectionCounts, DashboardSummary};
