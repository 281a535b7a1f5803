//! HTTP handlers and route configuration.

mod blog;
mod health;
mod pages;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        // /posts/abc/ is a missing page, not a malformed request
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .route("/", web::get().to(blog::index))
    .route("/posts/{id}/", web::get().to(blog::post_detail))
    .route("/category/{slug}/", web::get().to(blog::category_posts))
    .route("/about/", web::get().to(pages::about))
    .route("/rules/", web::get().to(pages::rules))
    .route("/health", web::get().to(health::health_check));
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("no route for {}", req.path())))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::{DateTime, Duration, Utc};

    use blogicum_core::domain::{Category, Location, Post, User};
    use blogicum_core::ports::BaseRepository;
    use blogicum_infra::database::InMemoryBlogStore;

    use super::*;
    use crate::state::AppState;

    struct Seed {
        store: Arc<InMemoryBlogStore>,
        author: User,
        now: DateTime<Utc>,
    }

    impl Seed {
        async fn new() -> Self {
            let store = Arc::new(InMemoryBlogStore::new());
            let author = store
                .save(User::new("leo").with_name("Leo", "Tolstoy"))
                .await
                .unwrap();
            Self {
                store,
                author,
                now: Utc::now(),
            }
        }

        async fn category(&self, slug: &str, published: bool) -> Category {
            let mut category = Category::new(format!("Category {slug}"), "About it", slug);
            category.is_published = published;
            self.store.save(category).await.unwrap()
        }

        async fn post(&self, title: &str, minutes_ago: i64, category: Option<&Category>) -> Post {
            let mut post = Post::new(
                self.author.id,
                title,
                format!("Body of {title}"),
                self.now - Duration::minutes(minutes_ago),
            );
            post.category_id = category.map(|c| c.id);
            self.store.save(post).await.unwrap()
        }
    }

    async fn get(seed: &Seed, uri: &str) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(seed.store.clone())))
                .configure(configure_routes)
                .default_service(web::to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn positions(body: &str, titles: &[&str]) -> Vec<usize> {
        titles.iter().map(|t| body.find(t).unwrap()).collect()
    }

    #[actix_web::test]
    async fn test_index_shows_five_newest_visible_posts() {
        let seed = Seed::new().await;
        let open = seed.category("open", true).await;
        let closed = seed.category("closed", false).await;
        for n in 1..=6 {
            seed.post(&format!("entry-{n:02}"), n * 10, Some(&open)).await;
        }
        seed.post("hidden-by-category", 1, Some(&closed)).await;
        seed.post("scheduled-later", -30, None).await;
        let draft = Post::new(seed.author.id, "unpublished-draft", "text", seed.now).unpublished();
        seed.store.save(draft).await.unwrap();

        let (status, body) = get(&seed, "/").await;

        assert_eq!(status, StatusCode::OK);
        let shown = ["entry-01", "entry-02", "entry-03", "entry-04", "entry-05"];
        let found = positions(&body, &shown);
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        for absent in ["entry-06", "hidden-by-category", "scheduled-later", "unpublished-draft"] {
            assert!(!body.contains(absent), "{absent} should not be listed");
        }
    }

    #[actix_web::test]
    async fn test_index_lists_uncategorised_posts() {
        let seed = Seed::new().await;
        seed.post("no-category", 5, None).await;

        let (status, body) = get(&seed, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("no-category"));
    }

    #[actix_web::test]
    async fn test_empty_index_renders() {
        let seed = Seed::new().await;

        let (status, body) = get(&seed, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Nothing has been published yet."));
    }

    #[actix_web::test]
    async fn test_post_detail_renders_full_post() {
        let seed = Seed::new().await;
        let open = seed.category("open", true).await;
        let place = seed.store.save(Location::new("Yasnaya Polyana")).await.unwrap();
        let post = Post::new(
            seed.author.id,
            "long-read",
            "one two three four five six seven eight nine ten eleven twelve",
            seed.now,
        )
        .in_category(open.id)
        .at_location(place.id);
        let post = seed.store.save(post).await.unwrap();

        let (status, body) = get(&seed, &format!("/posts/{}/", post.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("eleven twelve"));
        assert!(body.contains("Leo Tolstoy"));
        assert!(body.contains("Yasnaya Polyana"));
        assert!(body.contains("/category/open/"));
    }

    #[actix_web::test]
    async fn test_listing_truncates_text() {
        let seed = Seed::new().await;
        let post = Post::new(
            seed.author.id,
            "long-read",
            "one two three four five six seven eight nine ten eleven twelve",
            seed.now,
        );
        seed.store.save(post).await.unwrap();

        let (_, body) = get(&seed, "/").await;

        assert!(body.contains("one two three four five six seven eight nine ten …"));
        assert!(!body.contains("eleven"));
    }

    #[actix_web::test]
    async fn test_unpublished_location_is_not_shown() {
        let seed = Seed::new().await;
        let place = seed
            .store
            .save(Location::new("Secret Base").unpublished())
            .await
            .unwrap();
        let post = Post::new(seed.author.id, "somewhere", "text", seed.now).at_location(place.id);
        let post = seed.store.save(post).await.unwrap();

        let (status, body) = get(&seed, &format!("/posts/{}/", post.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Secret Base"));
    }

    #[actix_web::test]
    async fn test_unpublished_post_is_404() {
        let seed = Seed::new().await;
        let draft = Post::new(seed.author.id, "draft", "text", seed.now).unpublished();
        let draft = seed.store.save(draft).await.unwrap();

        let (status, _) = get(&seed, &format!("/posts/{}/", draft.id)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_post_in_unpublished_category_is_404() {
        let seed = Seed::new().await;
        let closed = seed.category("closed", false).await;
        let post = seed.post("hidden", 5, Some(&closed)).await;

        let (status, body) = get(&seed, &format!("/posts/{}/", post.id)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[actix_web::test]
    async fn test_scheduled_post_is_404() {
        let seed = Seed::new().await;
        let post = seed.post("tomorrow", -24 * 60, None).await;

        let (status, _) = get(&seed, &format!("/posts/{}/", post.id)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_missing_and_malformed_post_ids_are_404() {
        let seed = Seed::new().await;

        let (missing, _) = get(&seed, "/posts/999/").await;
        let (malformed, _) = get(&seed, "/posts/abc/").await;

        assert_eq!(missing, StatusCode::NOT_FOUND);
        assert_eq!(malformed, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_category_lists_only_its_visible_posts() {
        let seed = Seed::new().await;
        let travel = seed.category("travel", true).await;
        let food = seed.category("food", true).await;
        seed.post("road-trip", 30, Some(&travel)).await;
        seed.post("sea-voyage", 10, Some(&travel)).await;
        seed.post("mountain-hike", 20, Some(&travel)).await;
        seed.post("borscht", 5, Some(&food)).await;
        seed.post("future-flight", -5, Some(&travel)).await;

        let (status, body) = get(&seed, "/category/travel/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Category travel"));
        let found = positions(&body, &["sea-voyage", "mountain-hike", "road-trip"]);
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        assert!(!body.contains("borscht"));
        assert!(!body.contains("future-flight"));
    }

    #[actix_web::test]
    async fn test_unknown_category_is_404() {
        let seed = Seed::new().await;

        let (status, _) = get(&seed, "/category/nowhere/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_unpublished_category_is_404() {
        let seed = Seed::new().await;
        let closed = seed.category("closed", false).await;
        seed.post("inside", 5, Some(&closed)).await;

        let (status, _) = get(&seed, "/category/closed/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_static_pages() {
        let seed = Seed::new().await;

        let (about, about_body) = get(&seed, "/about/").await;
        let (rules, rules_body) = get(&seed, "/rules/").await;

        assert_eq!(about, StatusCode::OK);
        assert!(about_body.contains("About the project"));
        assert_eq!(rules, StatusCode::OK);
        assert!(rules_body.contains("<h1>Rules</h1>"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_html_404() {
        let seed = Seed::new().await;

        let (status, body) = get(&seed, "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<h1>404</h1>"));
    }

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let seed = Seed::new().await;

        let (status, body) = get(&seed, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["storage"], "memory");
    }
}
