use serde::{Deserialize, Serialize};

use super::catalog::{LaborGrade, MaterialGrade, LABOR_GRADES, MATERIAL_GRADES};

/// Contingency and overhead, charged on materials only.
pub const ADDITIONAL_COST_RATE: f64 = 0.18;
/// Floor area one extra worker is added for.
pub const SQUARE_FEET_PER_WORKER: f64 = 1000.0;
pub const BASE_CREW: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Floor area in square feet.
    pub area: f64,
    pub material_grade: String,
    pub labor_grade: String,
    pub duration_days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub labor_cost: f64,
    pub additional_costs: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub breakdown: CostBreakdown,
    /// Whole workers, kept as `f64` so very large sites cannot overflow.
    pub crew_size: f64,
    pub cost_per_square_foot: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid material type or labor rate selected")]
    InvalidSelection {
        material_grade: String,
        labor_grade: String,
    },
    #[error("{field} must be a positive number (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Estimates construction costs against a pair of grade catalogs.
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator<'a> {
    materials: &'a [MaterialGrade],
    labor: &'a [LaborGrade],
}

impl Default for CostEstimator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl CostEstimator<'static> {
    pub fn standard() -> Self {
        Self::new(&MATERIAL_GRADES, &LABOR_GRADES)
    }
}

impl<'a> CostEstimator<'a> {
    pub fn new(materials: &'a [MaterialGrade], labor: &'a [LaborGrade]) -> Self {
        Self { materials, labor }
    }

    pub fn materials(&self) -> &'a [MaterialGrade] {
        self.materials
    }

    pub fn labor(&self) -> &'a [LaborGrade] {
        self.labor
    }

    pub fn material(&self, id: &str) -> Option<&'a MaterialGrade> {
        self.materials.iter().find(|grade| grade.id == id)
    }

    pub fn labor_grade(&self, id: &str) -> Option<&'a LaborGrade> {
        self.labor.iter().find(|grade| grade.id == id)
    }

    pub fn estimate(
        &self,
        area: f64,
        material_grade: &str,
        labor_grade: &str,
        duration_days: f64,
    ) -> Result<CostEstimate, EstimateError> {
        let (Some(material), Some(labor)) =
            (self.material(material_grade), self.labor_grade(labor_grade))
        else {
            return Err(EstimateError::InvalidSelection {
                material_grade: material_grade.to_string(),
                labor_grade: labor_grade.to_string(),
            });
        };
        ensure_positive("area", area)?;
        ensure_positive("duration_days", duration_days)?;

        let crew_size = crew_size(area);
        let material_cost = area * material.cost_per_square_foot;
        let labor_cost = labor.rate_per_day * duration_days * crew_size;
        let additional_costs = material_cost * ADDITIONAL_COST_RATE;
        let total_cost = material_cost + labor_cost + additional_costs;

        Ok(CostEstimate {
            breakdown: CostBreakdown {
                material_cost,
                labor_cost,
                additional_costs,
                total_cost,
            },
            crew_size,
            cost_per_square_foot: total_cost / area,
        })
    }

    pub fn estimate_request(
        &self,
        request: &EstimateRequest,
    ) -> Result<CostEstimate, EstimateError> {
        self.estimate(
            request.area,
            &request.material_grade,
            &request.labor_grade,
            request.duration_days,
        )
    }
}

/// Estimate against the standard catalogs.
pub fn estimate(
    area: f64,
    material_grade: &str,
    labor_grade: &str,
    duration_days: f64,
) -> Result<CostEstimate, EstimateError> {
    CostEstimator::standard().estimate(area, material_grade, labor_grade, duration_days)
}

/// Workers on site: two plus one per started thousand square feet.
pub fn crew_size(area: f64) -> f64 {
    (area / SQUARE_FEET_PER_WORKER).ceil() + BASE_CREW
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimateError::InvalidInput { field, value })
    }
}

/// Wire shape of an estimate: callers branch on `success` before reading `breakdown`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CostBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_square_foot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EstimateOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            breakdown: None,
            crew_size: None,
            cost_per_square_foot: None,
            error: Some(message.into()),
        }
    }
}

impl From<Result<CostEstimate, EstimateError>> for EstimateOutcome {
    fn from(result: Result<CostEstimate, EstimateError>) -> Self {
        match result {
            Ok(estimate) => Self {
                success: true,
                breakdown: Some(estimate.breakdown),
                crew_size: Some(estimate.crew_size),
                cost_per_square_foot: Some(estimate.cost_per_square_foot),
                error: None,
            },
            Err(error) => Self::failure(error.to_string()),
        }
    }
}
