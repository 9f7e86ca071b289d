use crate::ports;
use crate::types::subscription::Subscription;

use time::Date;

/// A reminder goes out when exactly this many whole days remain. The
/// threshold is a single-day trigger, not a range: a window missed because
/// the app was not opened that day stays missed.
pub(crate) const REMINDER_LEAD_DAYS: i64 = 2;

/// Whole days from `today` until `expiration`. Zero when the dates are
/// equal, negative once expired.
pub(crate) fn days_until(expiration: Date, today: Date) -> i64 {
    (expiration - today).whole_days()
}

/// One end-to-end scan-and-notify pass over the collection. Qualifying
/// subscriptions are dispatched strictly in collection order, each send
/// awaited before the next; `last_notified` is written only after a send
/// succeeded, so a failed delivery is retried on the next session's sweep.
/// Returns the number of records mutated.
pub(crate) async fn run_sweep<T, S>(
    time: &T,
    sender: &S,
    subscriptions: &mut [Subscription],
) -> usize
where
    T: ports::time::TimeProvider,
    S: ports::notify::ReminderSender,
{
    let today = time.today();
    let mut notified = 0;

    for subscription in subscriptions.iter_mut() {
        if days_until(subscription.expiration_date, today) != REMINDER_LEAD_DAYS {
            continue;
        }
        if subscription.last_notified == Some(today) {
            continue;
        }

        match sender.send(subscription).await {
            Ok(()) => {
                subscription.last_notified = Some(today);
                notified += 1;
            }
            Err(err) => {
                eprintln!("reminder delivery error: {} ({})", err, subscription.name);
            }
        }
    }

    notified
}
