//! Page templates and the view models they render.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use askama::Template;

use blogicum_core::domain::text::{POST_TEXT_TRUNCATE_WORDS, truncate_words};
use blogicum_core::domain::{Category, PostEntry};

use crate::middleware::error::AppResult;

const DATE_FORMAT: &str = "%d %B %Y, %H:%M";

/// Render `template` into a `200 OK` HTML response.
pub fn render<T: Template>(template: T) -> AppResult<HttpResponse> {
    let body = template.render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub title: String,
    pub slug: String,
}

impl From<&Category> for CategoryLink {
    fn from(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            slug: category.slug.clone(),
        }
    }
}

/// A post as shown on listing and detail pages.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub excerpt: String,
    pub pub_date: String,
    pub author: String,
    pub location: Option<String>,
    pub category: Option<CategoryLink>,
}

impl From<&PostEntry> for PostCard {
    fn from(entry: &PostEntry) -> Self {
        Self {
            id: entry.post.id,
            title: entry.post.title.clone(),
            text: entry.post.text.clone(),
            excerpt: truncate_words(&entry.post.text, POST_TEXT_TRUNCATE_WORDS),
            pub_date: entry.post.pub_date.format(DATE_FORMAT).to_string(),
            author: entry.author.display_name(),
            location: entry.public_location().map(|l| l.name.clone()),
            category: entry.category.as_ref().map(CategoryLink::from),
        }
    }
}

pub fn cards(entries: &[PostEntry]) -> Vec<PostCard> {
    entries.iter().map(PostCard::from).collect()
}

#[derive(Template)]
#[template(path = "blog/index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "blog/detail.html")]
pub struct DetailTemplate {
    pub post: PostCard,
}

#[derive(Template)]
#[template(path = "blog/category.html")]
pub struct CategoryTemplate {
    pub title: String,
    pub description: String,
    pub posts: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "pages/rules.html")]
pub struct RulesTemplate;

#[derive(Template)]
#[template(path = "errors/error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub heading: &'static str,
}
