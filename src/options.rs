use crate::cli::Cli;
use crate::error::{PregrepError, Result};
use crate::store::OptionStore;
use serde::{Deserialize, Serialize};

/// The resolved configuration for one run. This is also the record persisted
/// per preset key; `save_key` is the one field that never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub query: String,
    pub encoding: Option<String>,
    pub target: String,
    pub ignore_linehead_to: usize,
    pub show_only_filename: bool,
    #[serde(skip)]
    pub save_key: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            encoding: None,
            target: "./*.*".to_string(),
            ignore_linehead_to: 8,
            show_only_filename: false,
            save_key: None,
        }
    }
}

impl SearchOptions {
    /// Resolves the options for a run from the CLI and the preset store.
    ///
    /// With `-S`, all fields come from the stored preset except the query,
    /// which an explicit `-q` overrides. Without `-S`, the query is
    /// required. Runs fail here, before any file access, if no usable query
    /// results.
    pub fn resolve(cli: &Cli, store: &OptionStore) -> Result<Self> {
        let mut options = match &cli.saved_key {
            Some(key) => {
                let mut preset = store.get(key)?;
                if let Some(query) = &cli.query {
                    preset.query = query.clone();
                }
                preset
            }
            None => Self {
                query: cli.query.clone().ok_or(PregrepError::MissingQuery)?,
                encoding: cli.encoding.clone(),
                target: cli.target.clone(),
                ignore_linehead_to: cli.ignore_linehead,
                show_only_filename: cli.show_only_filename,
                save_key: None,
            },
        };
        if options.query.is_empty() {
            return Err(PregrepError::MissingQuery);
        }
        options.save_key = cli.save.clone();
        Ok(options)
    }
}
