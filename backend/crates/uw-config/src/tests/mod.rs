
use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Every variable `Config::load` reads, cleared for the duration of a test
const CONFIG_ENV_VARS: &[&str] = &[
    "PORT",
    "DATABASE_URL",
    "JWT_SECRET",
    "UW_SERVER_HOST",
    "UW_SERVER_PORT",
    "UW_DATABASE_URL",
    "UW_DATABASE_PATH",
    "UW_AUTH_ENABLED",
    "UW_AUTH_JWT_SECRET",
    "UW_AUTH_TOKEN_TTL_SECS",
    "UW_AUTH_PASSWORD_HASH_COST",
    "UW_ANALYTICS_BASE_URL",
    "UW_ANALYTICS_TIMEOUT_SECS",
    "UW_LOG_LEVEL",
    "UW_LOG_COLORED",
    "UW_LOG_FILE",
    "UW_LOG_DIR",
];

pub(crate) const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by UW_CONFIG_DIR, with a clean environment
pub(crate) struct TestConfigDir {
    temp: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestConfigDir {
    pub(crate) fn path(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.temp.path().join("config.toml"), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestConfigDir {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = CONFIG_ENV_VARS
        .iter()
        .map(|&key| EnvGuard::remove(key))
        .collect();
    guards.push(EnvGuard::set(
        "UW_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));

    TestConfigDir {
        temp,
        _guards: guards,
    }
}

/// Config dir plus a valid signing secret, the minimum for `validate()` to pass
pub(crate) fn setup_valid_config_dir() -> (TestConfigDir, EnvGuard) {
    let dir = setup_config_dir();
    let secret = EnvGuard::set("UW_AUTH_JWT_SECRET", TEST_SECRET);
    (dir, secret)
}
