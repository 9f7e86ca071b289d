use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar dates travel as `YYYY-MM-DD` everywhere: the store, the form
/// input, and the reminder email. No time component.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, DATE_FORMAT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    NGN,
    USD,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NGN => "₦",
            Currency::USD => "$",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::NGN => "NGN",
            Currency::USD => "USD",
        }
    }

    pub fn parse(token: &str) -> Option<Currency> {
        match token {
            "NGN" => Some(Currency::NGN),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

/// A tracked subscription. `id` is assigned once at creation and never
/// changes; `last_notified` is written only by the reminder sweep, and only
/// after a delivery actually succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    #[serde(default)]
    pub description: String,
    pub expiration_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notified: Option<Date>,
}
