//! Loading [`ParserOptions`] from a file and the environment.

use config::{Config, Environment, File};
use log::debug;

use crate::error::OptionsError;
use crate::parser::ParserOptions;

impl ParserOptions {
    /// Load options from file and environment variables.
    ///
    /// Sources are layered with the following priority (highest to lowest):
    /// 1. Environment variables with `COOKLANG__` prefix
    /// 2. `cooklang.toml` file in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: `COOKLANG__INCLUDE_STEP_NUMBER=true`
    pub fn load() -> Result<Self, OptionsError> {
        load_options()
    }
}

/// See [`ParserOptions::load`].
pub fn load_options() -> Result<ParserOptions, OptionsError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cooklang").required(false))
        // Environment variables with COOKLANG prefix
        .add_source(
            Environment::with_prefix("COOKLANG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let options: ParserOptions = settings.try_deserialize()?;
    debug!("loaded parser options: {:?}", options);
    Ok(options)
}
