use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;
use std::pin::Pin;

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::config::EmailConfig;
use crate::ports;
use crate::types::subscription::Subscription;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimeProvider;

impl ports::time::TimeProvider for LocalTimeProvider {
    fn today(&self) -> Date {
        // Local-offset lookup can be refused on multithreaded unix targets.
        match OffsetDateTime::now_local() {
            Ok(now) => now.date(),
            Err(_) => OffsetDateTime::now_utc().date(),
        }
    }
}

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone)]
pub struct EmailJsSender {
    email: EmailConfig,
    client: reqwest::Client,
}

impl EmailJsSender {
    pub fn new(email: EmailConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { email, client })
    }
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams,
}

#[derive(Serialize)]
struct TemplateParams {
    subscription_name: String,
    price: String,
    description: String,
    expiration_date: String,
    message: String,
}

impl ports::notify::ReminderSender for EmailJsSender {
    type Error = reqwest::Error;
    type Fut<'a>
        = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send + 'a>>
    where
        Self: 'a;

    fn send<'a>(&'a self, subscription: &'a Subscription) -> Self::Fut<'a> {
        Box::pin(async move {
            let request = EmailJsRequest {
                service_id: &self.email.service_id,
                template_id: &self.email.template_id,
                user_id: &self.email.public_key,
                template_params: TemplateParams {
                    subscription_name: subscription.name.clone(),
                    price: format!(
                        "{}{}",
                        subscription.currency.symbol(),
                        subscription.price
                    ),
                    description: subscription.description.clone(),
                    expiration_date: subscription.expiration_date.to_string(),
                    message: format!(
                        "Your subscription for {} is expiring in 2 days!",
                        subscription.name
                    ),
                },
            };
            let response = self
                .client
                .post(EMAILJS_SEND_URL)
                .json(&request)
                .send()
                .await?;
            response.error_for_status()?;
            Ok(())
        })
    }
}

/// One file per key under the data directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl ports::storage::KeyValueStore for FsStore {
    fn get(&self, key: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        atomic_write(&self.key_path(key), value)
    }
}

fn atomic_write(path: &Path, contents: &str) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("missing parent directory"))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("entry");
    let pid = std::process::id();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for attempt in 0..10u32 {
        let temp_name = format!(".{}.tmp-{}-{}-{}", file_name, pid, nanos, attempt);
        let temp_path = parent.join(temp_name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
        {
            Ok(mut file) => {
                file.write_all(contents.as_bytes())?;
                file.flush()?;
                std::fs::rename(&temp_path, path)?;
                return Ok(());
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        "failed to create temp file",
    ))
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::ports::storage::KeyValueStore as _;

    fn create_temp_dir(test_name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        dir.push(format!("subtrak-{}-{}", test_name, nanos));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn fs_store__should_return_none_for_missing_key() {
        // Given
        let dir = create_temp_dir("fs-missing");
        let store = FsStore::new(dir.clone());

        // When
        let value = store.get("subscriptions.json").expect("get");

        // Then
        assert_eq!(value, None);

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn fs_store__should_round_trip_a_key() {
        // Given
        let dir = create_temp_dir("fs-round-trip");
        let store = FsStore::new(dir.clone());

        // When
        store.set("theme", "light").expect("set");
        let value = store.get("theme").expect("get");

        // Then
        assert_eq!(value.as_deref(), Some("light"));

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn fs_store__should_overwrite_whole_value() {
        // Given
        let dir = create_temp_dir("fs-overwrite");
        let store = FsStore::new(dir.clone());
        store.set("theme", "light").expect("set");

        // When
        store.set("theme", "dark").expect("set");

        // Then
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }
}
