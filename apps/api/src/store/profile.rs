//! Shared profile state with change notification.
//!
//! The `watch` sender is the store: it owns the current value, gives readers a
//! consistent snapshot and wakes subscribers only when a write actually
//! changes something.

use tokio::sync::watch;
use tracing::{debug, info};

use crate::models::profile::{Profile, ProfileField};

pub struct ProfileStore {
    tx: watch::Sender<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Profile::default());
        Self { tx }
    }

    /// Overwrites exactly one field. Writing the value already stored is a no-op
    /// and does not notify subscribers. Empty strings are accepted.
    pub fn set_field(&self, field: ProfileField, value: String) {
        let changed = self.tx.send_if_modified(|profile| {
            let slot = profile.get_mut(field);
            if *slot == value {
                false
            } else {
                *slot = value;
                true
            }
        });
        if changed {
            debug!("Profile field '{}' updated", field.as_str());
        }
    }

    pub fn snapshot(&self) -> Profile {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every effective profile change.
    pub fn subscribe(&self) -> watch::Receiver<Profile> {
        self.tx.subscribe()
    }
}

/// Fields whose values differ between two profiles, in declaration order.
pub fn changed_fields(before: &Profile, after: &Profile) -> Vec<ProfileField> {
    ProfileField::ALL
        .into_iter()
        .filter(|&field| before.get(field) != after.get(field))
        .collect()
}

/// Logs every effective profile change. Returns once the store is dropped.
pub async fn log_changes(mut rx: watch::Receiver<Profile>) {
    let mut previous = rx.borrow_and_update().clone();
    while rx.changed().await.is_ok() {
        let current = rx.borrow_and_update().clone();
        let fields: Vec<&str> = changed_fields(&previous, &current)
            .iter()
            .map(ProfileField::as_str)
            .collect();
        info!("Profile changed: {}", fields.join(", "));
        previous = current;
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
