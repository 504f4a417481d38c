//! Newsletter, contact, testimonial, volunteer and comment handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{
    MSG_COMMENT_POSTED, MSG_CONTACT_SENT, MSG_SUBSCRIBED, MSG_TESTIMONIAL_ADDED,
    MSG_VOLUNTEER_ADDED,
};
use crate::domain::{
    Comment, ContactMessage, NewComment, NewContactMessage, NewSubscription, NewTestimonial,
    NewVolunteer, NewsletterSubscription, Testimonial, Volunteer,
};
use crate::errors::AppResult;
use crate::types::Created;

/// Create community routes
pub fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/newsletter", get(list_newsletter).post(subscribe_newsletter))
        .route("/contact-us", get(list_contact_messages).post(send_contact_message))
        .route("/testimonial", get(list_testimonials).post(add_testimonial))
        .route("/volunteer", get(list_volunteers).post(register_volunteer))
        .route("/comment", get(list_comments).post(post_comment))
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/api/v1/newsletter",
    tag = "Community",
    request_body = NewSubscription,
    responses(
        (status = 201, description = "Subscribed", body = MessageResponse),
        (status = 400, description = "Validation error or already subscribed", body = ErrorBody)
    )
)]
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewSubscription>,
) -> AppResult<Created> {
    state.community_service.subscribe_newsletter(draft).await?;
    Ok(Created(MSG_SUBSCRIBED))
}

#[utoipa::path(
    get,
    path = "/api/v1/newsletter",
    tag = "Community",
    responses((status = 200, description = "All subscriptions", body = [NewsletterSubscription]))
)]
pub async fn list_newsletter(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<NewsletterSubscription>>> {
    Ok(Json(state.community_service.list_newsletter().await?))
}

/// Send a contact-us message
#[utoipa::path(
    post,
    path = "/api/v1/contact-us",
    tag = "Community",
    request_body = NewContactMessage,
    responses(
        (status = 201, description = "Message stored", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn send_contact_message(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewContactMessage>,
) -> AppResult<Created> {
    state.community_service.send_contact_message(draft).await?;
    Ok(Created(MSG_CONTACT_SENT))
}

#[utoipa::path(
    get,
    path = "/api/v1/contact-us",
    tag = "Community",
    responses((status = 200, description = "All contact messages", body = [ContactMessage]))
)]
pub async fn list_contact_messages(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    Ok(Json(state.community_service.list_contact_messages().await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/testimonial",
    tag = "Community",
    request_body = NewTestimonial,
    responses(
        (status = 201, description = "Testimonial stored", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn add_testimonial(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewTestimonial>,
) -> AppResult<Created> {
    state.community_service.add_testimonial(draft).await?;
    Ok(Created(MSG_TESTIMONIAL_ADDED))
}

#[utoipa::path(
    get,
    path = "/api/v1/testimonial",
    tag = "Community",
    responses((status = 200, description = "All testimonials", body = [Testimonial]))
)]
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(state.community_service.list_testimonials().await?))
}

/// Register as a volunteer (one registration per email)
#[utoipa::path(
    post,
    path = "/api/v1/volunteer",
    tag = "Community",
    request_body = NewVolunteer,
    responses(
        (status = 201, description = "Volunteer registered", body = MessageResponse),
        (status = 400, description = "Validation error or already registered", body = ErrorBody)
    )
)]
pub async fn register_volunteer(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewVolunteer>,
) -> AppResult<Created> {
    state.community_service.register_volunteer(draft).await?;
    Ok(Created(MSG_VOLUNTEER_ADDED))
}

#[utoipa::path(
    get,
    path = "/api/v1/volunteer",
    tag = "Community",
    responses((status = 200, description = "All volunteers", body = [Volunteer]))
)]
pub async fn list_volunteers(State(state): State<AppState>) -> AppResult<Json<Vec<Volunteer>>> {
    Ok(Json(state.community_service.list_volunteers().await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/comment",
    tag = "Community",
    request_body = NewComment,
    responses(
        (status = 201, description = "Comment stored", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn post_comment(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewComment>,
) -> AppResult<Created> {
    state.community_service.post_comment(draft).await?;
    Ok(Created(MSG_COMMENT_POSTED))
}

#[utoipa::path(
    get,
    path = "/api/v1/comment",
    tag = "Community",
    responses((status = 200, description = "All comments", body = [Comment]))
)]
pub async fn list_comments(State(state): State<AppState>) -> AppResult<Json<Vec<Comment>>> {
    Ok(Json(state.community_service.list_comments().await?))
}
