use crate::adapters::LocalTimeProvider;
use crate::ports::time::TimeProvider as _;
use crate::state;
use crate::store;
use crate::templates;
use crate::types::subscription::{Currency, Subscription, parse_date};

use axum::extract::Form;
use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use serde::Deserialize;
use uuid::Uuid;

pub(crate) async fn index(State(state): State<state::AppState>) -> templates::IndexTemplate {
    render_index(&state, templates::SubscriptionFormView::default())
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateSubscriptionForm {
    pub(crate) name: String,
    pub(crate) price: String,
    pub(crate) currency: String,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) expiration_date: String,
}

pub(crate) async fn create(
    State(state): State<state::AppState>,
    Form(form): Form<CreateSubscriptionForm>,
) -> Result<Redirect, (StatusCode, templates::IndexTemplate)> {
    let subscription = match validate(&form) {
        Ok(subscription) => subscription,
        Err(error) => {
            let form = templates::SubscriptionFormView {
                name: form.name,
                price: form.price,
                currency: form.currency,
                description: form.description,
                expiration_date: form.expiration_date,
                error,
            };
            return Err((StatusCode::BAD_REQUEST, render_index(&state, form)));
        }
    };

    let snapshot = {
        let mut subscriptions = state.subscriptions.lock().expect("subscriptions lock");
        subscriptions.insert(0, subscription);
        subscriptions.clone()
    };
    if let Err(err) = store::save_subscriptions(&state.store, &snapshot) {
        eprintln!("storage warning: failed to persist subscriptions: {err}");
    }
    Ok(Redirect::to("/"))
}

pub(crate) async fn delete(
    State(state): State<state::AppState>,
    AxumPath(id): AxumPath<String>,
) -> Redirect {
    let snapshot = {
        let mut subscriptions = state.subscriptions.lock().expect("subscriptions lock");
        let before = subscriptions.len();
        subscriptions.retain(|subscription| subscription.id != id);
        if subscriptions.len() == before {
            None
        } else {
            Some(subscriptions.clone())
        }
    };
    if let Some(snapshot) = snapshot
        && let Err(err) = store::save_subscriptions(&state.store, &snapshot)
    {
        eprintln!("storage warning: failed to persist subscriptions: {err}");
    }
    Redirect::to("/")
}

/// Boundary validation: no partial record ever enters the collection.
fn validate(form: &CreateSubscriptionForm) -> Result<Subscription, String> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Plan name is required.".to_string());
    }

    let price: f64 = form
        .price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number.".to_string())?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be a non-negative number.".to_string());
    }

    let currency = Currency::parse(form.currency.trim())
        .ok_or_else(|| "Unknown currency.".to_string())?;

    let expiration_date = parse_date(form.expiration_date.trim())
        .map_err(|_| "Expiration date must be a valid YYYY-MM-DD date.".to_string())?;

    Ok(Subscription {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        price,
        currency,
        description: form.description.trim().to_string(),
        expiration_date,
        last_notified: None,
    })
}

fn render_index(
    state: &state::AppState,
    form: templates::SubscriptionFormView,
) -> templates::IndexTemplate {
    let today = LocalTimeProvider.today();
    let cards = {
        let subscriptions = state.subscriptions.lock().expect("subscriptions lock");
        subscriptions
            .iter()
            .map(|subscription| templates::card_view(subscription, today))
            .collect()
    };
    let theme = *state.theme.lock().expect("theme lock");
    templates::IndexTemplate {
        app_name: state.config.app_name.clone(),
        theme_class: theme.as_token(),
        cards,
        form,
    }
}
