//! Layering of file, environment and flag settings

use crate::cli::GlobalArgs;
use scopedir_config::{Config, Settings};
use scopedir_errors::Error;

/// Resolve the handle configuration: defaults, then the settings file, then
/// `SCOPEDIR_*` variables, then flags.
pub fn resolve(global: &GlobalArgs) -> Result<Config, Error> {
    let mut settings = Settings::load_or_default(global.config.as_deref())?;
    settings.merge_env()?;
    apply_flags(&mut settings, global);
    Ok(settings.to_config())
}

fn apply_flags(settings: &mut Settings, global: &GlobalArgs) {
    if let Some(root) = &global.root {
        settings.tempdir.root_path = Some(root.clone());
    }
    if let Some(prefix) = &global.prefix {
        settings.tempdir.prefix.clone_from(prefix);
    }
    if let Some(cleanup) = global.cleanup {
        settings.tempdir.cleanup = cleanup;
    }
    if global.log {
        settings.tempdir.log = true;
    }
}
