use serde::Serialize;

/// Material quality tier priced per square foot of floor area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialGrade {
    pub id: &'static str,
    pub name: &'static str,
    pub cost_per_square_foot: f64,
    pub description: &'static str,
}

/// Labor skill tier priced per worker-day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaborGrade {
    pub id: &'static str,
    pub name: &'static str,
    pub rate_per_day: f64,
    pub description: &'static str,
}

pub static MATERIAL_GRADES: [MaterialGrade; 4] = [
    MaterialGrade {
        id: "standard",
        name: "Standard Quality",
        cost_per_square_foot: 3500.0,
        description: "Budget materials with basic finishes.",
    },
    MaterialGrade {
        id: "medium",
        name: "Medium Quality",
        cost_per_square_foot: 5000.0,
        description: "Mid-range materials with more durable fittings.",
    },
    MaterialGrade {
        id: "premium",
        name: "Premium Quality",
        cost_per_square_foot: 7500.0,
        description: "High-end materials and superior finishes.",
    },
    MaterialGrade {
        id: "luxury",
        name: "Luxury Quality",
        cost_per_square_foot: 10000.0,
        description: "Imported finishes for top-tier builds.",
    },
];

pub static LABOR_GRADES: [LaborGrade; 3] = [
    LaborGrade {
        id: "basic",
        name: "Basic Labor",
        rate_per_day: 1000.0,
        description: "General crews for structural and finishing work.",
    },
    LaborGrade {
        id: "skilled",
        name: "Skilled Labor",
        rate_per_day: 1500.0,
        description: "Tradespeople experienced in specific crafts.",
    },
    LaborGrade {
        id: "expert",
        name: "Expert Labor",
        rate_per_day: 2500.0,
        description: "Specialists for complex or custom construction.",
    },
];

/// Snapshot of both catalogs for display.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub materials: &'a [MaterialGrade],
    pub labor: &'a [LaborGrade],
}
