use contracts::dashboard::{DashboardState, SelectionBridge, SelectionCommand};
use contracts::shared::Configuration;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::{fetch_configuration, fetch_dashboard_state};

/// Handle to the dashboard state and configuration.
///
/// Created once in `App` and passed down explicitly; the header only reads
/// from it and sends [`SelectionCommand`]s through [`DashboardContext::dispatch`].
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub state: RwSignal<DashboardState>,
    pub config: RwSignal<Configuration>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DashboardState::default()),
            config: RwSignal::new(Configuration::default()),
        }
    }

    /// Fetch `/config.json` and the dashboard data. Failures keep the
    /// defaults, which leaves both selectors hidden.
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match fetch_configuration().await {
                Ok(config) => {
                    log::debug!("configuration loaded: {:?}", config);
                    this.config.set(config);
                }
                Err(e) => log::warn!("configuration not loaded, using defaults: {}", e),
            }

            match fetch_dashboard_state().await {
                Ok(state) => {
                    log::info!(
                        "dashboard state loaded: {} dates, {} countries",
                        state.dates.len(),
                        state.country_select_entries.len()
                    );
                    this.state.set(state.normalize());
                }
                Err(e) => log::error!("dashboard state not loaded: {}", e),
            }
        });
    }

    pub fn dispatch(&self, command: SelectionCommand) {
        log::debug!("dispatch {:?}", command);
        // rejected commands must not notify subscribers
        match self
            .state
            .try_with_untracked(|state| state.validate(&command))
        {
            Some(Ok(())) => self.state.update(|state| {
                if let Err(e) = state.apply(command) {
                    log::warn!("selection rejected: {}", e);
                }
            }),
            Some(Err(e)) => log::warn!("selection rejected: {}", e),
            None => log::warn!("selection dropped: dashboard state is disposed"),
        }
    }

    /// Bridge that routes widget events into [`DashboardContext::dispatch`]
    pub fn bridge(&self) -> SelectionBridge<impl Fn(SelectionCommand) + Copy + Send + Sync + 'static> {
        let this = *self;
        SelectionBridge::new(move |command: SelectionCommand| this.dispatch(command))
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}
