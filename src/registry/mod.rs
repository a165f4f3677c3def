mod seed;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::models::Activity;

/// Domain errors surfaced by registry operations.
///
/// The display strings are the exact `detail` texts the HTTP layer returns,
/// so clients (and the bundled front-end) can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The requested activity name is not in the catalogue.
    #[error("Activity not found")]
    ActivityNotFound,
    /// Signup for an email that is already a participant.
    #[error("Student is already signed up")]
    AlreadySignedUp,
    /// Unregister for an email that is not currently a participant.
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// In-memory roster of activities, keyed by activity name.
///
/// The catalogue is fixed at construction: operations mutate participant
/// lists but never add or remove activities. The handle is cheap to clone
/// and shares one mutex-guarded map, which keeps the "at most once per
/// email" invariant intact when the server handles requests concurrently.
pub struct ActivityRegistry {
    activities: Arc<Mutex<BTreeMap<String, Activity>>>,
}

impl ActivityRegistry {
    /// Build a registry from an explicit catalogue. Tests use this to get
    /// isolated instances with whatever seed they need.
    pub fn new(catalog: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: Arc::new(Mutex::new(catalog.into_iter().collect())),
        }
    }

    /// Build a registry seeded with the school's standard catalogue.
    pub fn with_default_catalog() -> Self {
        Self::new(seed::catalog())
    }

    /// Snapshot of the full catalogue, participant lists included.
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        let activities = self.activities.lock().expect("registry lock poisoned");
        activities.clone()
    }

    /// Register `email` for `activity_name`.
    ///
    /// Preconditions are checked in order before any mutation: the activity
    /// must exist, and the email must not already be a participant. No
    /// capacity check happens here; `max_participants` is display-only.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.lock().expect("registry lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        tracing::info!("Signed up {} for {}", email, activity_name);
        Ok(())
    }

    /// Remove `email` from `activity_name`'s participants.
    ///
    /// The activity must exist and the email must currently be registered;
    /// either failure leaves the registry untouched.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.lock().expect("registry lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotSignedUp)?;

        activity.participants.remove(position);
        tracing::info!("Unregistered {} from {}", email, activity_name);
        Ok(())
    }
}

impl Clone for ActivityRegistry {
    fn clone(&self) -> Self {
        Self {
            activities: self.activities.clone(),
        }
    }
}
