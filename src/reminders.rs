use crate::adapters::{EmailJsSender, LocalTimeProvider};
use crate::config;
use crate::config::EmailConfig;
use crate::ports::storage::KeyValueStore;
use crate::store;
use crate::types::subscription::Subscription;

mod sweep;

pub(crate) use sweep::days_until;

#[derive(Debug, Clone)]
pub(crate) enum EmailConfigStatus {
    Missing,
    Incomplete,
    Ready(EmailConfig),
}

pub(crate) fn load_email_config(config: &config::AppConfig) -> EmailConfigStatus {
    let service_id = config.emailjs_service_id.as_ref();
    let template_id = config.emailjs_template_id.as_ref();
    let public_key = config.emailjs_public_key.as_ref();
    let has_any = service_id.is_some() || template_id.is_some() || public_key.is_some();

    match (service_id, template_id, public_key) {
        (Some(service_id), Some(template_id), Some(public_key)) => {
            EmailConfigStatus::Ready(EmailConfig {
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
            })
        }
        _ if has_any => EmailConfigStatus::Incomplete,
        _ => EmailConfigStatus::Missing,
    }
}

/// The once-per-session reminder pass. Must run after the collection has
/// finished loading from the store and before the presentation layer is
/// served. Persists the collection as a single batch iff a record changed.
pub(crate) async fn maybe_run_sweep<K: KeyValueStore>(
    config: &config::AppConfig,
    store: &K,
    subscriptions: &mut Vec<Subscription>,
) {
    let email = match load_email_config(config) {
        EmailConfigStatus::Ready(email) => email,
        EmailConfigStatus::Incomplete => {
            eprintln!("reminders disabled: incomplete EmailJS configuration");
            return;
        }
        EmailConfigStatus::Missing => {
            return;
        }
    };

    let sender = match EmailJsSender::new(email) {
        Ok(sender) => sender,
        Err(err) => {
            eprintln!("reminders disabled: failed to init email client ({err})");
            return;
        }
    };

    let notified = sweep::run_sweep(&LocalTimeProvider, &sender, subscriptions).await;
    if notified > 0
        && let Err(err) = store::save_subscriptions(store, subscriptions)
    {
        eprintln!("storage warning: failed to persist reminder state: {err}");
    }
}
