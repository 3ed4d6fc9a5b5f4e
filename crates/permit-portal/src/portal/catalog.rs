//! Immutable permit catalog: categories, document requirements, and fees.
//!
//! Everything here is compile-time constant. The catalog is the only data the
//! three portal surfaces share, and nothing mutates it.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitType {
    Residential,
    Commercial,
    Agricultural,
}

impl PermitType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Residential, Self::Commercial, Self::Agricultural]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Agricultural => "Agricultural",
        }
    }

    /// Lowercase segment used in navigation paths (`/submit/residential`).
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Agricultural => "agricultural",
        }
    }

    /// Administrative review fee in whole dollars. Informational only; no
    /// payment is collected through the portal.
    pub const fn processing_fee(self) -> u32 {
        match self {
            Self::Commercial => 350,
            Self::Residential => 250,
            Self::Agricultural => 200,
        }
    }

    pub fn from_path_segment(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "residential" => Some(Self::Residential),
            "commercial" => Some(Self::Commercial),
            "agricultural" => Some(Self::Agricultural),
            _ => None,
        }
    }
}

/// A named document the applicant must supply for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// One permit category with its requirement list.
#[derive(Debug, Clone, Serialize)]
pub struct PermitCategory {
    pub permit_type: PermitType,
    pub description: &'static str,
    pub requirements: Vec<DocumentRequirement>,
}

/// Step shown on the landing page explaining the submission process.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug)]
pub struct PermitCatalog {
    categories: Vec<PermitCategory>,
}

impl PermitCatalog {
    pub fn standard() -> Self {
        Self {
            categories: PermitType::ordered()
                .into_iter()
                .map(standard_category)
                .collect(),
        }
    }

    pub fn categories(&self) -> &[PermitCategory] {
        &self.categories
    }

    pub fn category(&self, permit_type: PermitType) -> &PermitCategory {
        self.categories
            .iter()
            .find(|category| category.permit_type == permit_type)
            .expect("catalog covers every permit type")
    }

    pub fn requirements_for(&self, permit_type: PermitType) -> &[DocumentRequirement] {
        &self.category(permit_type).requirements
    }

    pub fn process_steps() -> Vec<ProcessStep> {
        vec![
            ProcessStep {
                title: "Select Permit Type",
                detail: "Choose your permit category to see required documents",
            },
            ProcessStep {
                title: "Submit Documents",
                detail: "Upload all required pre-approval documents",
            },
            ProcessStep {
                title: "Review Process",
                detail: "Documents reviewed within 14 business days",
            },
            ProcessStep {
                title: "Next Steps",
                detail: "Receive notification about permit readiness",
            },
        ]
    }
}

fn standard_category(permit_type: PermitType) -> PermitCategory {
    let (description, requirements) = match permit_type {
        PermitType::Residential => (
            "Single-family homes, duplexes, residential developments",
            vec![
                DocumentRequirement {
                    name: "Site Plan",
                    required: true,
                    description: "Detailed site layout and boundaries",
                },
                DocumentRequirement {
                    name: "Environmental Impact Assessment",
                    required: true,
                    description: "EPA-approved environmental study",
                },
                DocumentRequirement {
                    name: "Zoning Compliance Form",
                    required: true,
                    description: "Current zoning verification document",
                },
                DocumentRequirement {
                    name: "Utility Connection Plan",
                    required: true,
                    description: "Water, sewer, and electrical connection plans",
                },
            ],
        ),
        PermitType::Commercial => (
            "Retail, office buildings, industrial facilities",
            vec![
                DocumentRequirement {
                    name: "EPA Form XYZ",
                    required: true,
                    description: "Environmental Protection Agency compliance form",
                },
                DocumentRequirement {
                    name: "Site Plan",
                    required: true,
                    description: "Detailed commercial site layout",
                },
                DocumentRequirement {
                    name: "Traffic Impact Study",
                    required: true,
                    description: "Professional traffic analysis report",
                },
                DocumentRequirement {
                    name: "Fire Safety Certificate",
                    required: true,
                    description: "Fire department pre-approval certificate",
                },
                DocumentRequirement {
                    name: "Parking Analysis",
                    required: true,
                    description: "Parking capacity and compliance study",
                },
            ],
        ),
        PermitType::Agricultural => (
            "Farming operations, agricultural structures",
            vec![
                DocumentRequirement {
                    name: "Agricultural Use Plan",
                    required: true,
                    description: "Detailed farming operation plan",
                },
                DocumentRequirement {
                    name: "Water Rights Documentation",
                    required: true,
                    description: "Legal water usage rights verification",
                },
                DocumentRequirement {
                    name: "Soil Analysis Report",
                    required: true,
                    description: "Professional soil composition study",
                },
                DocumentRequirement {
                    name: "Environmental Compliance Form",
                    required: true,
                    description: "Agricultural environmental impact form",
                },
            ],
        ),
    };

    PermitCategory {
        permit_type,
        description,
        requirements,
    }
}

#[derive(Debug, Serialize)]
struct CategoryView {
    permit_type: PermitType,
    label: &'static str,
    description: &'static str,
    submit_path: String,
    processing_fee: u32,
    requirements: Vec<DocumentRequirement>,
}

impl CategoryView {
    fn from_category(category: &PermitCategory) -> Self {
        Self {
            permit_type: category.permit_type,
            label: category.permit_type.label(),
            description: category.description,
            submit_path: format!("/submit/{}", category.permit_type.path_segment()),
            processing_fee: category.permit_type.processing_fee(),
            requirements: category.requirements.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CatalogResponse {
    categories: Vec<CategoryView>,
    process_steps: Vec<ProcessStep>,
}

/// Router exposing the read-only catalog endpoints.
pub fn catalog_router() -> Router {
    Router::new()
        .route("/api/v1/permits", get(catalog_handler))
        .route("/api/v1/permits/:permit_type", get(category_handler))
}

async fn catalog_handler() -> Json<CatalogResponse> {
    let catalog = PermitCatalog::standard();
    Json(CatalogResponse {
        categories: catalog
            .categories()
            .iter()
            .map(CategoryView::from_category)
            .collect(),
        process_steps: PermitCatalog::process_steps(),
    })
}

async fn category_handler(Path(permit_type): Path<String>) -> Response {
    match PermitType::from_path_segment(&permit_type) {
        Some(permit_type) => {
            let catalog = PermitCatalog::standard();
            let view = CategoryView::from_category(catalog.category(permit_type));
            (StatusCode::OK, Json(view)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown permit type '{permit_type}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_three_categories_in_order() {
        let catalog = PermitCatalog::standard();
        let types: Vec<PermitType> = catalog
            .categories()
            .iter()
            .map(|category| category.permit_type)
            .collect();
        assert_eq!(
            types,
            vec![
                PermitType::Residential,
                PermitType::Commercial,
                PermitType::Agricultural
            ]
        );
    }

    #[test]
    fn commercial_category_has_five_requirements_and_350_fee() {
        let catalog = PermitCatalog::standard();
        let commercial = catalog.category(PermitType::Commercial);
        assert_eq!(commercial.requirements.len(), 5);
        assert!(commercial.requirements.iter().all(|req| req.required));
        assert_eq!(PermitType::Commercial.processing_fee(), 350);
    }

    #[test]
    fn residential_and_agricultural_fees() {
        assert_eq!(PermitType::Residential.processing_fee(), 250);
        assert_eq!(PermitType::Agricultural.processing_fee(), 200);
    }

    #[test]
    fn path_segments_round_trip() {
        for permit_type in PermitType::ordered() {
            assert_eq!(
                PermitType::from_path_segment(permit_type.path_segment()),
                Some(permit_type)
            );
        }
        assert_eq!(PermitType::from_path_segment("industrial"), None);
    }

    #[test]
    fn process_steps_match_landing_page() {
        let steps = PermitCatalog::process_steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].title, "Select Permit Type");
        assert_eq!(steps[3].title, "Next Steps");
    }
}
