//! In-memory record store.
//!
//! One table per entity type, each keyed by a monotonically increasing `i32`
//! starting at 1. Identifiers are never reused and iteration follows
//! insertion order. The store is an explicitly constructed value injected
//! into handlers through `web::Data`, so tests get isolated instances.
//!
//! Writes validate foreign keys: a record referencing a missing department,
//! technology, or employee is rejected instead of stored dangling. Department
//! names and employee emails are unique, and activity usage counts must be
//! positive.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use thiserror::Error;

use crate::domain::records::{
    AnalyticsPoint, Department, EmailAddress, Employee, NewAnalyticsPoint, NewActivity,
    NewDepartment, NewEmployee, NewRecommendation, NewTechnology, Technology,
    TrainingRecommendation, UserActivity, WaitlistSubscriber,
};

/// Failures raised by store write operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("department {0} does not exist")]
    UnknownDepartment(i32),
    #[error("technology {0} does not exist")]
    UnknownTechnology(i32),
    #[error("employee {0} does not exist")]
    UnknownEmployee(i32),
    #[error("recommendation {0} does not exist")]
    UnknownRecommendation(i32),
    #[error("department name {0:?} already exists")]
    DuplicateDepartmentName(String),
    #[error("employee email {0:?} already exists")]
    DuplicateEmployeeEmail(String),
    #[error("usage count must be positive")]
    ZeroUsageCount,
}

/// Keyed rows plus the next identifier for one entity type.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Insert a row built from the next identifier and return it.
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }

    /// Every row in insertion order. Ascending ids coincide with insertion
    /// order because ids are assigned sequentially.
    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }
}

#[derive(Debug, Default)]
struct Tables {
    waitlist: Table<WaitlistSubscriber>,
    departments: Table<Department>,
    technologies: Table<Technology>,
    employees: Table<Employee>,
    activities: Table<UserActivity>,
    recommendations: Table<TrainingRecommendation>,
    analytics: Table<AnalyticsPoint>,
}

/// Shared in-memory store for all record collections.
///
/// Operations are short synchronous critical sections behind an `RwLock`;
/// consumers always receive cloned records, never references into the tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn tables_mut(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // Waitlist

    /// Add an email to the waitlist. Idempotent: re-submitting a known email
    /// returns the existing subscriber without inserting a duplicate row.
    pub fn add_waitlist_subscriber(&self, email: EmailAddress) -> WaitlistSubscriber {
        let mut tables = self.tables_mut();
        if let Some(existing) = tables
            .waitlist
            .rows
            .values()
            .find(|subscriber| subscriber.email == email)
        {
            return existing.clone();
        }
        tables.waitlist.insert_with(|id| WaitlistSubscriber {
            id,
            email,
            created_at: Utc::now(),
        })
    }

    #[must_use]
    pub fn waitlist_subscribers(&self) -> Vec<WaitlistSubscriber> {
        self.tables().waitlist.all()
    }

    // Departments

    pub fn create_department(&self, new: NewDepartment) -> Result<Department, StoreError> {
        let mut tables = self.tables_mut();
        if tables
            .departments
            .rows
            .values()
            .any(|department| department.name == new.name)
        {
            return Err(StoreError::DuplicateDepartmentName(new.name));
        }
        Ok(tables
            .departments
            .insert_with(|id| Department { id, name: new.name.clone() }))
    }

    #[must_use]
    pub fn departments(&self) -> Vec<Department> {
        self.tables().departments.all()
    }

    #[must_use]
    pub fn department(&self, id: i32) -> Option<Department> {
        self.tables().departments.get(id)
    }

    // Technologies

    pub fn create_technology(&self, new: NewTechnology) -> Technology {
        self.tables_mut().technologies.insert_with(|id| Technology {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
        })
    }

    #[must_use]
    pub fn technologies(&self) -> Vec<Technology> {
        self.tables().technologies.all()
    }

    #[must_use]
    pub fn technology(&self, id: i32) -> Option<Technology> {
        self.tables().technologies.get(id)
    }

    // Employees

    /// Create an employee. Emails are unique across employees.
    pub fn create_employee(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let mut tables = self.tables_mut();
        if !tables.departments.contains(new.department_id) {
            return Err(StoreError::UnknownDepartment(new.department_id));
        }
        if tables
            .employees
            .rows
            .values()
            .any(|employee| employee.email == new.email)
        {
            return Err(StoreError::DuplicateEmployeeEmail(new.email));
        }
        Ok(tables.employees.insert_with(|id| Employee {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            department_id: new.department_id,
        }))
    }

    #[must_use]
    pub fn employees(&self) -> Vec<Employee> {
        self.tables().employees.all()
    }

    #[must_use]
    pub fn employee(&self, id: i32) -> Option<Employee> {
        self.tables().employees.get(id)
    }

    #[must_use]
    pub fn employees_by_department(&self, department_id: i32) -> Vec<Employee> {
        self.tables()
            .employees
            .filtered(|employee| employee.department_id == department_id)
    }

    // Activities

    /// Record an activity with a server-assigned timestamp. The usage count
    /// must be at least 1.
    pub fn record_activity(&self, new: NewActivity) -> Result<UserActivity, StoreError> {
        if new.usage_count == 0 {
            return Err(StoreError::ZeroUsageCount);
        }
        let mut tables = self.tables_mut();
        if !tables.employees.contains(new.employee_id) {
            return Err(StoreError::UnknownEmployee(new.employee_id));
        }
        if !tables.technologies.contains(new.technology_id) {
            return Err(StoreError::UnknownTechnology(new.technology_id));
        }
        Ok(tables.activities.insert_with(|id| UserActivity {
            id,
            employee_id: new.employee_id,
            technology_id: new.technology_id,
            feature_used: new.feature_used.clone(),
            usage_count: new.usage_count,
            timestamp: Utc::now(),
            successful: new.successful,
        }))
    }

    #[must_use]
    pub fn activities(&self) -> Vec<UserActivity> {
        self.tables().activities.all()
    }

    #[must_use]
    pub fn activities_by_employee(&self, employee_id: i32) -> Vec<UserActivity> {
        self.tables()
            .activities
            .filtered(|activity| activity.employee_id == employee_id)
    }

    #[must_use]
    pub fn activities_by_technology(&self, technology_id: i32) -> Vec<UserActivity> {
        self.tables()
            .activities
            .filtered(|activity| activity.technology_id == technology_id)
    }

    /// Activities performed by any employee of the department.
    #[must_use]
    pub fn activities_by_department(&self, department_id: i32) -> Vec<UserActivity> {
        let tables = self.tables();
        let employee_ids: Vec<i32> = tables
            .employees
            .rows
            .values()
            .filter(|employee| employee.department_id == department_id)
            .map(|employee| employee.id)
            .collect();
        tables
            .activities
            .filtered(|activity| employee_ids.contains(&activity.employee_id))
    }

    // Recommendations

    pub fn create_recommendation(
        &self,
        new: NewRecommendation,
    ) -> Result<TrainingRecommendation, StoreError> {
        let mut tables = self.tables_mut();
        if !tables.employees.contains(new.employee_id) {
            return Err(StoreError::UnknownEmployee(new.employee_id));
        }
        if !tables.technologies.contains(new.technology_id) {
            return Err(StoreError::UnknownTechnology(new.technology_id));
        }
        Ok(tables
            .recommendations
            .insert_with(|id| TrainingRecommendation {
                id,
                employee_id: new.employee_id,
                technology_id: new.technology_id,
                recommendation_type: new.recommendation_type.clone(),
                description: new.description.clone(),
                is_completed: false,
                created_at: Utc::now(),
            }))
    }

    #[must_use]
    pub fn recommendations(&self) -> Vec<TrainingRecommendation> {
        self.tables().recommendations.all()
    }

    #[must_use]
    pub fn recommendations_by_employee(&self, employee_id: i32) -> Vec<TrainingRecommendation> {
        self.tables()
            .recommendations
            .filtered(|recommendation| recommendation.employee_id == employee_id)
    }

    /// Mark a recommendation completed. Completing twice is a no-op that
    /// still returns the completed record; the flag never reverts.
    pub fn complete_recommendation(&self, id: i32) -> Result<TrainingRecommendation, StoreError> {
        let mut tables = self.tables_mut();
        let recommendation = tables
            .recommendations
            .rows
            .get_mut(&id)
            .ok_or(StoreError::UnknownRecommendation(id))?;
        recommendation.is_completed = true;
        Ok(recommendation.clone())
    }

    // Analytics

    pub fn record_analytics(&self, new: NewAnalyticsPoint) -> Result<AnalyticsPoint, StoreError> {
        let mut tables = self.tables_mut();
        if !tables.technologies.contains(new.technology_id) {
            return Err(StoreError::UnknownTechnology(new.technology_id));
        }
        if let Some(department_id) = new.department_id {
            if !tables.departments.contains(department_id) {
                return Err(StoreError::UnknownDepartment(department_id));
            }
        }
        Ok(tables.analytics.insert_with(|id| AnalyticsPoint {
            id,
            department_id: new.department_id,
            technology_id: new.technology_id,
            metric: new.metric.clone(),
            timestamp: Utc::now(),
        }))
    }

    #[must_use]
    pub fn analytics(&self) -> Vec<AnalyticsPoint> {
        self.tables().analytics.all()
    }

    #[must_use]
    pub fn analytics_by_department(&self, department_id: i32) -> Vec<AnalyticsPoint> {
        self.tables()
            .analytics
            .filtered(|point| point.department_id == Some(department_id))
    }

    #[must_use]
    pub fn analytics_by_technology(&self, technology_id: i32) -> Vec<AnalyticsPoint> {
        self.tables()
            .analytics
            .filtered(|point| point.technology_id == technology_id)
    }
}
