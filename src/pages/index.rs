use axum::extract::State;
use maud::Markup;

use crate::AppState;
use crate::partials;

pub(crate) async fn index(State(state): State<AppState>) -> Markup {
    partials::layout::layout(&state.title, None)
}
