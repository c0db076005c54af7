//! Construction cost estimation from floor area, material grade, labor grade, and duration.

pub mod catalog;
pub mod estimator;
pub mod router;

pub use catalog::{CatalogView, LaborGrade, MaterialGrade, LABOR_GRADES, MATERIAL_GRADES};
pub use estimator::{
    crew_size, estimate, CostBreakdown, CostEstimate, CostEstimator, EstimateError,
    EstimateOutcome, EstimateRequest,
};
pub use router::construction_router;
