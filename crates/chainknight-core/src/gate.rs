//! Client-side access gate.
//!
//! The gate hides the catalog until a user enters one of two shared access
//! keys. Both keys ship in the binary and are compared as plain strings, so
//! this is a UI gate, not access control: anyone with the binary can read
//! them, and anyone with write access to the store can disable the gate.

use crate::error::{ChainError, ChainResult};
use crate::storage::{KeyValueStore, ACCESS_KEY_ENTRY, GATE_ENABLED_ENTRY};

/// Accepted access keys. Compared exactly; no trimming, no case folding.
pub const ACCESS_KEYS: [&str; 2] = ["admin@gudman123", "0xGudman123"];

/// Whether `candidate` is one of the accepted access keys
pub fn is_valid_key(candidate: &str) -> bool {
    ACCESS_KEYS.contains(&candidate)
}

/// Access state derived from the injected store.
///
/// `authenticated` is `true` when gating is disabled, or when the stored key
/// is one of [`ACCESS_KEYS`].
pub struct AccessGate<S> {
    store: S,
    stored_key: Option<String>,
    gating_enabled: bool,
    authenticated: bool,
}

impl<S: KeyValueStore> AccessGate<S> {
    /// Read the persisted key and gating flag and derive the initial state.
    pub fn load(store: S) -> ChainResult<Self> {
        let stored_key = store.get(ACCESS_KEY_ENTRY)?;
        let gating_enabled = match store.get(GATE_ENABLED_ENTRY)?.as_deref() {
            Some("false") => false,
            Some("true") | None => true,
            Some(other) => {
                tracing::warn!(value = other, "Unreadable gating flag, keeping gate enabled");
                true
            }
        };

        let mut gate = Self {
            store,
            stored_key,
            gating_enabled,
            authenticated: false,
        };
        gate.recompute();

        tracing::debug!(
            gating_enabled = gate.gating_enabled,
            authenticated = gate.authenticated,
            "Access gate loaded"
        );
        Ok(gate)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn gating_enabled(&self) -> bool {
        self.gating_enabled
    }

    /// Last key written to the store, if any
    pub fn stored_key(&self) -> Option<&str> {
        self.stored_key.as_deref()
    }

    /// Try a candidate key.
    ///
    /// On a match the key is persisted and the gate opens. Otherwise returns
    /// [`ChainError::InvalidKey`] and leaves both the store and the
    /// authentication state untouched.
    pub fn submit_key(&mut self, candidate: &str) -> ChainResult<()> {
        if !is_valid_key(candidate) {
            tracing::warn!("Rejected access key");
            return Err(ChainError::InvalidKey);
        }

        self.store.set(ACCESS_KEY_ENTRY, candidate)?;
        self.stored_key = Some(candidate.to_string());
        self.authenticated = true;
        tracing::info!("Access key accepted");
        Ok(())
    }

    /// Flip the persisted gating flag. Returns the new value.
    pub fn toggle_gating(&mut self) -> ChainResult<bool> {
        let enabled = !self.gating_enabled;
        self.set_gating(enabled)?;
        Ok(enabled)
    }

    /// Persist the gating flag.
    ///
    /// Disabling opens the gate for the session. Re-enabling recomputes from
    /// the stored key, so a previously accepted key stays accepted.
    pub fn set_gating(&mut self, enabled: bool) -> ChainResult<()> {
        self.store
            .set(GATE_ENABLED_ENTRY, if enabled { "true" } else { "false" })?;
        self.gating_enabled = enabled;
        self.recompute();
        tracing::info!(enabled, authenticated = self.authenticated, "Gating updated");
        Ok(())
    }

    /// Forget the stored key.
    pub fn sign_out(&mut self) -> ChainResult<()> {
        self.store.remove(ACCESS_KEY_ENTRY)?;
        self.stored_key = None;
        self.recompute();
        tracing::info!("Stored access key cleared");
        Ok(())
    }

    fn recompute(&mut self) {
        self.authenticated = !self.gating_enabled
            || self.stored_key.as_deref().is_some_and(is_valid_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh_gate() -> (AccessGate<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let gate = AccessGate::load(store.clone()).unwrap();
        (gate, store)
    }

    #[test]
    fn test_fresh_gate_is_closed() {
        let (gate, _) = fresh_gate();
        assert!(gate.gating_enabled());
        assert!(!gate.is_authenticated());
        assert!(gate.stored_key().is_none());
    }

    #[test]
    fn test_both_keys_accepted() {
        for key in ACCESS_KEYS {
            let (mut gate, store) = fresh_gate();
            gate.submit_key(key).unwrap();
            assert!(gate.is_authenticated());
            assert_eq!(store.get(ACCESS_KEY_ENTRY).unwrap().as_deref(), Some(key));
        }
    }

    #[test]
    fn test_wrong_key_rejected() {
        let (mut gate, store) = fresh_gate();
        let err = gate.submit_key("wrong").unwrap_err();
        assert!(matches!(err, ChainError::InvalidKey));
        assert_eq!(err.to_string(), "Invalid access key");
        assert!(!gate.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_near_miss_keys_rejected() {
        let (mut gate, _) = fresh_gate();
        for key in ["0xgudman123", " 0xGudman123", "admin@gudman123 ", ""] {
            assert!(gate.submit_key(key).is_err(), "accepted {key:?}");
        }
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_stored_key_authenticates_on_load() {
        let store = MemoryStore::new();
        store.set(ACCESS_KEY_ENTRY, "admin@gudman123").unwrap();
        let gate = AccessGate::load(store).unwrap();
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_stale_stored_key_does_not_authenticate() {
        let store = MemoryStore::new();
        store.set(ACCESS_KEY_ENTRY, "retired-key").unwrap();
        let gate = AccessGate::load(store).unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_disabling_gate_authenticates_and_persists() {
        let (mut gate, store) = fresh_gate();
        assert!(!gate.toggle_gating().unwrap());
        assert!(gate.is_authenticated());
        assert_eq!(store.get(GATE_ENABLED_ENTRY).unwrap().as_deref(), Some("false"));

        // Survives a reload
        let reloaded = AccessGate::load(store).unwrap();
        assert!(!reloaded.gating_enabled());
        assert!(reloaded.is_authenticated());
    }

    #[test]
    fn test_toggle_round_trip_with_valid_key() {
        let (mut gate, _) = fresh_gate();
        gate.submit_key("0xGudman123").unwrap();

        gate.toggle_gating().unwrap();
        assert!(gate.is_authenticated());
        gate.toggle_gating().unwrap();
        assert!(gate.gating_enabled());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_toggle_round_trip_without_key_closes_gate() {
        let (mut gate, _) = fresh_gate();
        gate.toggle_gating().unwrap();
        assert!(gate.is_authenticated());
        gate.toggle_gating().unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_sign_out_clears_key() {
        let (mut gate, store) = fresh_gate();
        gate.submit_key("admin@gudman123").unwrap();
        gate.sign_out().unwrap();
        assert!(!gate.is_authenticated());
        assert!(store.get(ACCESS_KEY_ENTRY).unwrap().is_none());
    }

    #[test]
    fn test_garbage_flag_keeps_gate_enabled() {
        let store = MemoryStore::new();
        store.set(GATE_ENABLED_ENTRY, "maybe").unwrap();
        let gate = AccessGate::load(store).unwrap();
        assert!(gate.gating_enabled());
    }
}
