/**
 * Catalog Routes
 *
 * # Routes
 *
 * - `GET|POST /api/v1/courses`, `GET /api/v1/courses/{id}`
 * - `GET|POST /api/v1/instructors`, `PUT|DELETE /api/v1/instructors/{id}`
 * - `GET /api/v1/books`, `GET /api/v1/books/{id}`
 * - `GET|POST /api/v1/reviews`
 */

use axum::{
    routing::{get, put},
    Router,
};

use crate::backend::catalog::handlers::{
    create_course, create_instructor, create_review, delete_instructor, get_book, get_course,
    list_books, list_courses, list_instructors, list_reviews, update_instructor,
};
use crate::backend::server::state::AppState;

/// Configure catalog routes
pub fn configure_catalog_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/v1/courses", get(list_courses).post(create_course))
        .route("/api/v1/courses/{id}", get(get_course))
        .route("/api/v1/instructors", get(list_instructors).post(create_instructor))
        .route(
            "/api/v1/instructors/{id}",
            put(update_instructor).delete(delete_instructor),
        )
        .route("/api/v1/books", get(list_books))
        .route("/api/v1/books/{id}", get(get_book))
        .route("/api/v1/reviews", get(list_reviews).post(create_review))
}
