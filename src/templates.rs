use askama::Template;
use askama_web::WebTemplate;
use time::Date;

use crate::reminders;
use crate::types::subscription::Subscription;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub(crate) struct IndexTemplate {
    pub(crate) app_name: String,
    pub(crate) theme_class: &'static str,
    pub(crate) cards: Vec<SubscriptionCardView>,
    pub(crate) form: SubscriptionFormView,
}

pub(crate) struct SubscriptionCardView {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) price: String,
    pub(crate) description: String,
    pub(crate) expiration_date: String,
    pub(crate) status_label: String,
    pub(crate) status_class: &'static str,
}

#[derive(Default)]
pub(crate) struct SubscriptionFormView {
    pub(crate) name: String,
    pub(crate) price: String,
    pub(crate) currency: String,
    pub(crate) description: String,
    pub(crate) expiration_date: String,
    pub(crate) error: String,
}

pub(crate) fn card_view(subscription: &Subscription, today: Date) -> SubscriptionCardView {
    let days_left = reminders::days_until(subscription.expiration_date, today);
    let status_label = if days_left < 0 {
        "Expired".to_string()
    } else if days_left == 0 {
        "Due Today".to_string()
    } else {
        format!("{days_left} days left")
    };
    let status_class = if days_left < 0 {
        "expired"
    } else if days_left <= 2 {
        "urgent"
    } else {
        "ok"
    };

    SubscriptionCardView {
        id: subscription.id.clone(),
        name: subscription.name.clone(),
        price: format!("{}{}", subscription.currency.symbol(), subscription.price),
        description: subscription.description.clone(),
        expiration_date: subscription.expiration_date.to_string(),
        status_label,
        status_class,
    }
}
