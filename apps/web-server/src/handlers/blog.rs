//! Blog pages: front page, single post, category listing.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{self, CategoryTemplate, DetailTemplate, IndexTemplate, PostCard};

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.recent_posts(Utc::now()).await?;

    views::render(IndexTemplate {
        posts: views::cards(&posts),
    })
}

/// GET /posts/{id}/
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let entry = state.blog.post_detail(id, Utc::now()).await?;

    views::render(DetailTemplate {
        post: PostCard::from(&entry),
    })
}

/// GET /category/{slug}/
pub async fn category_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let page = state.blog.category_posts(&slug, Utc::now()).await?;

    views::render(CategoryTemplate {
        title: page.category.title.clone(),
        description: page.category.description.clone(),
        posts: views::cards(&page.posts),
    })
}
