/// Server configuration for the venue back-office edge
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/venue/edge | Working directory (uploaded maps, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | MAX_UPLOAD_BYTES | 5242880 | Background map upload size cap |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/venue HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for uploaded background maps and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Upload size cap for background map images, in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/venue/edge".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5 * 1024 * 1024),
        }
    }

    /// Directory where uploaded background maps are stored
    pub fn maps_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("maps")
    }

    /// Directory where daily log files are written
    pub fn logs_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "/var/lib/venue/edge".to_string(),
            http_port: 3000,
            environment: "development".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_derive_from_work_dir() {
        let config = Config {
            work_dir: "/data/venue".to_string(),
            ..Config::default()
        };
        assert_eq!(config.maps_dir(), std::path::Path::new("/data/venue/maps"));
        assert_eq!(config.logs_dir(), std::path::Path::new("/data/venue/logs"));
    }
}
