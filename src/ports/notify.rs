use crate::types::subscription::Subscription;

/// The outbound reminder channel. `Ok(())` means the message was accepted
/// for delivery; anything else is a failure and the caller must not mark
/// the subscription as notified.
pub trait ReminderSender: Clone + Send + Sync + 'static {
    type Error: std::fmt::Display + Send + Sync + 'static;
    type Fut<'a>: Future<Output = Result<(), Self::Error>> + Send + 'a
    where
        Self: 'a;

    fn send<'a>(&'a self, subscription: &'a Subscription) -> Self::Fut<'a>;
}
