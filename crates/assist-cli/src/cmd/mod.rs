pub mod log;
pub mod metrics;
pub mod serve;
pub mod suggest;
pub mod tickets;

use anyhow::Context;
use assist_core::config::Config;
use assist_core::log_store::LogStore;
use assist_core::ticket::TicketRegistry;
use std::path::PathBuf;

/// Resolved root plus its loaded config, shared by every subcommand.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    /// `--log-path` / `ASSIST_LOG_PATH`, wins over `log.path` in the config.
    pub log_path_override: Option<PathBuf>,
}

impl Project {
    pub fn log_path(&self) -> PathBuf {
        match &self.log_path_override {
            Some(p) => assist_core::paths::log_path(&self.root, p),
            None => self.config.log_path(&self.root),
        }
    }

    pub fn log_store(&self) -> LogStore {
        LogStore::new(self.log_path())
    }

    pub fn registry(&self) -> anyhow::Result<TicketRegistry> {
        self.config
            .registry()
            .context("failed to build ticket registry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_override_wins() {
        let project = Project {
            root: PathBuf::from("/srv/assist"),
            config: Config::default(),
            log_path_override: Some(PathBuf::from("other.json")),
        };
        assert_eq!(project.log_path(), PathBuf::from("/srv/assist/other.json"));
    }

    #[test]
    fn config_log_path_used_by_default() {
        let project = Project {
            root: PathBuf::from("/srv/assist"),
            config: Config::default(),
            log_path_override: None,
        };
        assert_eq!(
            project.log_path(),
            PathBuf::from("/srv/assist/accepted_log.json")
        );
    }
}
