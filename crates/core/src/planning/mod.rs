//! Monthly budget plans and budget-vs-actual reconciliation.

pub mod chart;
pub mod comparator;
pub mod error;
pub mod normalize;
pub mod types;


pub use chart::{ChartData, ChartProjector, DistributionSlice, SeriesPoint};
pub use comparator::PlanComparator;
pub use error::PlanError;
pub use normalize::{PlanCategoryRecord, PlanCategoriesShape, PlanRecord};
pub use types::{ComparisonRecord, ComparisonStatus, MonthlyPlan, PlanCategory};
