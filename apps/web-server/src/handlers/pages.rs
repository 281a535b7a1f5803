//! Static informational pages.

use actix_web::HttpResponse;

use crate::middleware::error::AppResult;
use crate::views::{self, AboutTemplate, RulesTemplate};

/// GET /about/
pub async fn about() -> AppResult<HttpResponse> {
    views::render(AboutTemplate)
}

/// GET /rules/
pub async fn rules() -> AppResult<HttpResponse> {
    views::render(RulesTemplate)
}
