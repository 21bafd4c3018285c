//! Automation detail page.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use showcase_app::ports::CatalogSource;
use showcase_domain::error::ShowcaseError;
use showcase_domain::id::AutomationId;

use super::{DashboardError, render};
use crate::state::AppState;
use crate::view::{Card, benefit_tone};

/// A benefit badge on the detail page.
pub struct BenefitBadge {
    pub label: String,
    pub tone: &'static str,
}

/// Automation detail page template.
#[derive(Template)]
#[template(path = "automation_detail.html")]
pub struct AutomationDetailTemplate {
    card: Card,
    tags: Vec<String>,
    benefits: Vec<BenefitBadge>,
}

impl IntoResponse for AutomationDetailTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /automations/:id`: automation detail page.
pub async fn detail<CS>(
    State(state): State<AppState<CS>>,
    Path(id): Path<String>,
) -> Result<AutomationDetailTemplate, DashboardError>
where
    CS: CatalogSource + Send + Sync + 'static,
{
    let automation_id = AutomationId::from_str(&id).map_err(ShowcaseError::from)?;
    let item = state.gallery_service.get_automation(automation_id)?;

    let benefits = item
        .primary_benefits
        .iter()
        .filter(|benefit| !benefit.is_empty())
        .map(|benefit| BenefitBadge {
            label: benefit.clone(),
            tone: benefit_tone(benefit),
        })
        .collect();

    Ok(AutomationDetailTemplate {
        card: Card::from(&item),
        tags: item.tags.iter().filter(|tag| !tag.is_empty()).cloned().collect(),
        benefits,
    })
}
