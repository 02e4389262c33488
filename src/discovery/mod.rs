//! Locating the external helper a hook should run.
//!
//! Each strategy builds an ordered candidate list from the environment
//! snapshot and the OS family; the first candidate that exists on disk
//! wins. A helper that cannot be found is not an error: the hooks are
//! advisory and skip silently.

use std::path::PathBuf;

/// The operating system family, as far as helper discovery cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Unix,
    Windows,
}

impl OsFamily {
    /// The family this process is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }

    /// Filename suffix expected for project-local helper scripts.
    fn script_suffix(self) -> &'static str {
        match self {
            OsFamily::Unix => "",
            OsFamily::Windows => ".bat",
        }
    }
}

/// Read-once snapshot of the environment variables discovery consults.
///
/// Values set to an empty string count as unset, matching how Composer
/// itself treats them.
#[derive(Debug, Default, Clone)]
pub struct Env {
    pub composer_home: Option<String>,
    pub appdata: Option<String>,
    pub xdg_config_home: Option<String>,
    pub home: Option<String>,
}

impl Env {
    /// Snapshot the invoking process's environment.
    pub fn from_process() -> Self {
        Env {
            composer_home: non_empty_var("COMPOSER_HOME"),
            appdata: non_empty_var("APPDATA"),
            xdg_config_home: non_empty_var("XDG_CONFIG_HOME"),
            home: non_empty_var("HOME"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Where a hook's helper lives and how to probe for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperStrategy {
    /// A globally installed Composer package binary:
    /// `<composer-home>/vendor/bin/<program>`.
    ///
    /// The Composer home directory is the first *existing* directory among
    /// the OS-conventional candidates; there is no fallthrough to later
    /// candidates when the winner lacks the helper.
    ComposerBin { program: &'static str },
    /// A file relative to the project directory the agent is working in:
    /// `<cwd>/<relative>`, with `.bat` appended on Windows.
    ProjectFile { relative: &'static str },
}

impl HelperStrategy {
    /// Resolve the helper's path, or `None` when it is not installed.
    pub fn resolve(&self, cwd: &str, env: &Env, family: OsFamily) -> Option<PathBuf> {
        let helper = match self {
            HelperStrategy::ComposerBin { program } => {
                let home = composer_home(env, family)?;
                PathBuf::from(format!("{home}/vendor/bin/{program}"))
            }
            HelperStrategy::ProjectFile { relative } => {
                PathBuf::from(format!("{cwd}/{relative}{}", family.script_suffix()))
            }
        };
        helper.exists().then_some(helper)
    }
}

/// The Composer home directory: first existing directory among the
/// OS-conventional candidates.
///
/// Windows: `$COMPOSER_HOME`, then `$APPDATA/Composer`.
/// Elsewhere: `$COMPOSER_HOME`, then `$XDG_CONFIG_HOME/composer` (with
/// `$HOME/.config` standing in when `$XDG_CONFIG_HOME` is unset), then
/// `$HOME/.composer`.
fn composer_home(env: &Env, family: OsFamily) -> Option<String> {
    let candidates: Vec<Option<String>> = match family {
        OsFamily::Windows => vec![
            env.composer_home.clone(),
            env.appdata.as_ref().map(|a| format!("{a}/Composer")),
        ],
        OsFamily::Unix => {
            let xdg_config = env
                .xdg_config_home
                .clone()
                .or_else(|| env.home.as_ref().map(|h| format!("{h}/.config")));
            vec![
                env.composer_home.clone(),
                xdg_config.map(|x| format!("{x}/composer")),
                env.home.as_ref().map(|h| format!("{h}/.composer")),
            ]
        }
    };

    candidates
        .into_iter()
        .flatten()
        .find(|dir| std::path::Path::new(dir).is_dir())
}
