use std::path::PathBuf;

/// Subsystem configuration
///
/// # Environment variables
///
/// All settings can be overridden via environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./work_dir | Working directory (database, images, logs) |
/// | PUBLIC_BASE_URL | http://localhost:3000 | Base URL for materialized image links |
/// | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
/// | LOG_TO_FILE | false | Also write daily rolling log files |
/// | ADMIN_USER | admin | Admin panel username |
/// | ADMIN_PASS | aavo2024 | Admin panel password |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding database files, images and logs
    pub work_dir: String,
    /// Public base URL used when building image download links
    pub public_base_url: String,
    /// Default log level
    pub log_level: String,
    /// Whether to write rolling log files in addition to the console
    pub log_to_file: bool,
    /// Admin panel credentials
    pub admin: AdminCredentials,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            admin: AdminCredentials::from_env(),
        }
    }

    pub fn work_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    /// Embedded database directory: {work_dir}/data
    pub fn data_dir(&self) -> PathBuf {
        self.work_dir_path().join("data")
    }

    /// Materialized image directory: {work_dir}/images
    pub fn images_dir(&self) -> PathBuf {
        self.work_dir_path().join("images")
    }

    /// Log directory: {work_dir}/logs
    pub fn log_dir(&self) -> PathBuf {
        self.work_dir_path().join("logs")
    }
}

/// Admin panel login check.
///
/// This is the site's original behavior carried forward: a single
/// environment-provided credential pair, not an authentication system.
/// Anything needing real security belongs behind an external identity
/// provider, not here.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    password: String,
}

impl AdminCredentials {
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USER").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("ADMIN_PASS").unwrap_or_else(|_| "aavo2024".into()),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_verify_matches_exact_pair_only() {
        let creds = AdminCredentials {
            username: "admin".into(),
            password: "secret".into(),
        };
        assert!(creds.verify("admin", "secret"));
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "secret"));
    }
}
