// ⚙️ Configuration - command line, environment, build metadata

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::client::ClientSettings;

// ============================================================================
// BUILD METADATA
// ============================================================================

/// Version metadata, fixed at compile time.
/// Commit and build time come from `SF_BUILD_COMMIT` / `SF_BUILD_TIME` when
/// they are set in the build environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub built_at: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        BuildInfo {
            version: crate::VERSION,
            commit: match option_env!("SF_BUILD_COMMIT") {
                Some(commit) => commit,
                None => "none",
            },
            built_at: match option_env!("SF_BUILD_TIME") {
                Some(time) => time,
                None => "unknown",
            },
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version: {}\nCommit: {}\nBuilt at: {}",
            self.version, self.commit, self.built_at
        )
    }
}

// ============================================================================
// COMMAND LINE
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "sf", about = "A CLI interface to simplefin.org", subcommand_negates_reqs = true)]
pub struct Cli {
    /// Your specific SimpleFIN Access URL
    #[arg(long, env = "SF_URL", required = true)]
    pub url: Option<String>,

    /// Set the proxy URL
    #[arg(long, env = "SF_PROXY")]
    pub proxy: Option<String>,

    /// Output filename for JSON results
    #[arg(long, env = "SF_OUT")]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the version
    Version,
}

/// Everything one fetch-and-render run needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub client: ClientSettings,
    pub out: Option<PathBuf>,
}

impl Cli {
    /// Run settings for the default action (None when no URL was given)
    pub fn settings(&self) -> Option<Settings> {
        let base_url = self.url.clone()?;

        Some(Settings {
            client: ClientSettings {
                base_url,
                // An empty SF_PROXY means no proxy
                proxy: self.proxy.clone().filter(|p| !p.is_empty()),
            },
            out: self.out.clone().filter(|p| !p.as_os_str().is_empty()),
        })
    }
}
