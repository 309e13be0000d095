use std::convert::Infallible;

use axum::{
    Form, Json,
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};

use futures::stream::{self, StreamExt};

use crate::pages;
use crate::query_input::QueryInput;
use crate::results_view::{ResultsView, SearchOutcome, ViewState};

use super::AppState;
use super::models::{HealthResponse, SearchParams, SubmitForm};

pub async fn home_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::home_page(&state.profile))
}

/// Streams the results page: the shell with the loading indicator goes out
/// immediately, the settled results follow once the search resolves.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mut view = ResultsView::new();
    let Some(pending) = view.on_query_param(params.q.as_deref()) else {
        return Html(pages::search_page(&state.profile, &view)).into_response();
    };

    let shell = pages::search_page_open(&state.profile, &view);
    let settled = async move {
        let outcome = state.search.search(&pending.query).await.into();
        view.resolve(&pending, outcome);

        match view.state() {
            ViewState::Settled(SearchOutcome::Failed(reason)) => {
                tracing::warn!(query = pending.query.as_str(), "search failed: {reason}");
            }
            ViewState::Settled(SearchOutcome::Results(results)) => {
                tracing::info!(
                    query = pending.query.as_str(),
                    results = results.len(),
                    "search settled"
                );
            }
            _ => {}
        }

        let mut tail = pages::search_page_settled(&view);
        tail.push_str(pages::SEARCH_PAGE_CLOSE);
        Ok::<_, Infallible>(tail)
    };

    let chunks = stream::once(async move { Ok::<_, Infallible>(shell) })
        .chain(stream::once(settled));

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(chunks),
    )
        .into_response()
}

/// Search box submission. Blank input leaves the browser where it is.
pub async fn submit_handler(Form(form): Form<SubmitForm>) -> Response {
    match QueryInput::with_value(form.q).submit() {
        Some(navigation) => Redirect::to(&navigation.location()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn resume_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::resume_page(&state.profile))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
