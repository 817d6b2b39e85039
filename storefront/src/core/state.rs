//! Application state
//!
//! Bundles the collaborators one storefront run owns: the loaded catalog,
//! the order session and the settings store. Passed by reference to
//! whatever needs to read or mutate it; there are no ambient singletons.

use crate::catalog::Catalog;
use crate::core::Config;
use crate::notify::Notifier;
use crate::session::OrderSession;
use crate::settings::SettingsStore;
use crate::utils::AppResult;

pub struct AppState {
    pub catalog: Catalog,
    pub session: OrderSession,
    pub settings: SettingsStore,
}

impl AppState {
    /// Initialize the state for one run: load the catalog and create a
    /// fresh session reporting to the given notifier.
    pub fn initialize(config: &Config, notifier: Box<dyn Notifier>) -> AppResult<Self> {
        let catalog = Catalog::load(config)?;
        Ok(Self {
            catalog,
            session: OrderSession::with_notifier(notifier),
            settings: SettingsStore::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullNotifier;

    #[test]
    fn initialize_with_seed_catalog() {
        let state = AppState::initialize(&Config::default(), Box::new(NullNotifier)).unwrap();
        assert!(!state.catalog.is_empty());
        assert!(state.session.is_empty());
        assert_eq!(state.settings.company().name, "Nowicki Naturalnie");
    }
}
