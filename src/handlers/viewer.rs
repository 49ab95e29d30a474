use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    dataset::{categories, FilterSelection},
    extractors::IsHtmx,
    names,
    rejections::{AppError, ResultExt},
    views, AppState,
};

use crate::views::viewer as viewer_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::VIEWER_URL, get(index))
        .route(names::FILTER_URL, get(filter))
        .route(names::QUESTION_URL, get(question))
}

#[derive(Deserialize)]
struct FilterQuery {
    category: Option<String>,
    count: Option<String>,
}

impl FilterQuery {
    fn selection(self) -> FilterSelection {
        FilterSelection::new(self.category, self.count.as_deref())
    }
}

async fn index(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    // The category list is only known once a dataset has loaded; before
    // that the selector starts with the bare "All" option and the first
    // filter cycle repopulates it out-of-band.
    let labels = match state.dataset.current().await {
        Some(dataset) => categories::labels(&dataset),
        None => vec![names::ALL_LABEL.to_string()],
    };
    let selection = FilterSelection::default();
    let body = viewer_views::viewer(&labels, &selection);

    if is_htmx {
        views::titled("Questions", body)
    } else {
        views::page("Questions", body)
    }
}

/// One full filter cycle: reload the dataset, repopulate the category
/// selector, apply the selection, render the result set. A load failure is
/// a visible error fragment in the display region, not a silent stall.
async fn filter(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Markup {
    let selection = query.selection();

    let dataset = match state.dataset.reload().await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("dataset load failed: {e}");
            return viewer_views::load_error();
        }
    };

    let labels = categories::labels(&dataset);
    let selection = FilterSelection {
        category: categories::effective_selection(&labels, &selection.category).to_string(),
        sample_count: selection.sample_count,
    };
    let records = selection.apply(&dataset);

    tracing::debug!(
        category = %selection.category,
        count = %selection.sample_count,
        matched = records.len(),
        "filter cycle"
    );

    html! {
        (viewer_views::category_select(&labels, &selection.category, true))
        (viewer_views::results(&records))
    }
}

/// Permalink for a single record.
async fn question(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let dataset = match state.dataset.current().await {
        Some(dataset) => dataset,
        None => state
            .dataset
            .reload()
            .await
            .reject("could not load dataset")?,
    };

    let record = dataset.get(&id).ok_or(AppError::NotFound)?;
    let body = html! {
        div id="display" {
            div id=(names::RESULTS_ID) {
                (viewer_views::question_block(record))
            }
        }
    };

    Ok(if is_htmx {
        views::titled(&format!("Question {id}"), body)
    } else {
        views::page(&format!("Question {id}"), body)
    })
}
