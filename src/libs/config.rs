//! Configuration management for taskdeck.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the
//! platform data directory. Every module is optional; anything missing
//! falls back to its defaults, so the application runs with no setup.
//!
//! ## Modules
//!
//! - **api**: Remote collection base URL and the user id stamped on new tasks
//! - **list**: Page size, sync scope and cache slot name
//!
//! The base URL can be overridden with `TASKDECK_API_URL`, which may also
//! come from a `.env` file.
//!
//! ```rust,no_run
//! use taskdeck::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Remote: {}", config.api().base_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::cache::DEFAULT_CACHE_KEY;
use super::data_storage::DataStorage;
use super::messages::Message;
use super::pager::DEFAULT_PAGE_SIZE;
use super::state::SyncScope;
use crate::api::todos::TodosConfig;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the configured base URL.
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Key used to route the module's setup
    pub key: String,
    /// Name shown in the module picker
    pub name: String,
}

/// List presentation and synchronization settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    /// Tasks shown per page.
    pub page_size: usize,

    /// Whether delete, toggle and edit reach the full collection and cache
    /// (`collection`) or only the visible page (`page`).
    pub sync_scope: SyncScope,

    /// Name of the cache slot holding the mirrored collection.
    pub cache_key: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            page_size: DEFAULT_PAGE_SIZE,
            sync_scope: SyncScope::default(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<TodosConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListConfig>,
}

impl Config {
    /// Reads the configuration from the data directory.
    ///
    /// A missing file yields the default configuration. A file that exists
    /// but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective endpoint settings: the stored ones (or defaults) with the
    /// environment override applied.
    pub fn api(&self) -> TodosConfig {
        let mut api = self.api.clone().unwrap_or_default();
        if let Ok(base_url) = env::var(API_URL_ENV) {
            if !base_url.trim().is_empty() {
                api.base_url = base_url;
            }
        }
        api
    }

    /// Effective list settings.
    pub fn list(&self) -> ListConfig {
        self.list.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            TodosConfig::module(),
            ConfigModule {
                key: "list".to_string(),
                name: "List".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(TodosConfig::init(&config.api)?),
                "list" => {
                    let default = config.list();
                    msg_print!(Message::ConfigModuleList);

                    let page_size = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPageSize.to_string())
                        .default(default.page_size)
                        .validate_with(|size: &usize| if *size > 0 { Ok(()) } else { Err(Message::PageSizeMustBePositive.to_string()) })
                        .interact_text()?;

                    let scopes = [SyncScope::Page, SyncScope::Collection];
                    let scope_labels = [Message::SyncScopePage.to_string(), Message::SyncScopeCollection.to_string()];
                    let scope_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSyncScope.to_string())
                        .items(&scope_labels)
                        .default(scopes.iter().position(|scope| *scope == default.sync_scope).unwrap_or(0))
                        .interact()?;

                    let cache_key = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCacheKey.to_string())
                        .default(default.cache_key)
                        .interact_text()?;

                    config.list = Some(ListConfig {
                        page_size,
                        sync_scope: scopes[scope_index],
                        cache_key,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
