use crate::state;
use crate::store;

use axum::extract::State;
use axum::response::Redirect;

pub(crate) async fn toggle(State(state): State<state::AppState>) -> Redirect {
    let theme = {
        let mut theme = state.theme.lock().expect("theme lock");
        *theme = theme.toggled();
        *theme
    };
    if let Err(err) = store::save_theme(&state.store, theme) {
        eprintln!("storage warning: failed to persist theme: {err}");
    }
    Redirect::to("/")
}
