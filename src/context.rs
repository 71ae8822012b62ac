use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;
use crate::relay::RelayClient;
use crate::server::AppState;
use crate::store::ProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub settings: Settings,
    pub store: Arc<ProfileStore>,
    pub relay: RelayClient,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        config_file: Option<PathBuf>,
        profiles_file: Option<PathBuf>,
        json: bool,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, config_file.as_deref())?;

        // Flag beats settings beats the data directory default.
        let profiles_file = profiles_file
            .or_else(|| settings.profiles_file.clone())
            .unwrap_or_else(|| paths.profiles_file());

        let store = Arc::new(ProfileStore::new(profiles_file));
        let relay = RelayClient::from_settings(&settings)?;
        let output = Output::new(json);

        Ok(Self {
            paths,
            settings,
            store,
            relay,
            output,
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(Arc::clone(&self.store), self.relay.clone())
    }
}
