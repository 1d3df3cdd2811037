use std::path::{Path, PathBuf};

use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    /// CLI flag, `LABELKIT_ROBOT` or `[output] robot`
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        // Project config lives in the nearest ancestor holding one.
        let cwd = std::env::current_dir()?;
        let project_root = find_upwards(&cwd, PROJECT_CONFIG_FILE).unwrap_or(cwd);
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let robot_mode = cli.robot || config.output.robot;

        Ok(Self {
            config,
            robot_mode,
            verbosity: cli.verbose,
        })
    }
}

/// Walk up from `start` to the first directory containing `name`.
fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(name).is_file())
        .map(Path::to_path_buf)
}
