use std::path::PathBuf;

/// Application configuration and constants
pub struct Config {
    /// Directory holding the `<title>.txt` page files.
    pub data_dir: PathBuf,
    /// Directory holding `view.html` and `edit.html`.
    pub template_dir: PathBuf,
    pub port: u16,
    pub host: [u8; 4],
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            // Pages live directly in the working directory.
            data_dir: PathBuf::from("."),
            template_dir: PathBuf::from("templates"),
            port: 8080,
            host: [0, 0, 0, 0],
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(data_dir: PathBuf, template_dir: PathBuf, port: Option<u16>) -> Self {
        Self {
            data_dir,
            template_dir,
            port: port.unwrap_or(8080),
            host: [0, 0, 0, 0],
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from((self.host, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_8080() {
        let config = Config::new();
        assert_eq!(config.socket_addr().port(), 8080);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn custom_port_overrides_default() {
        let config = Config::with_custom(PathBuf::from("pages"), PathBuf::from("tpl"), Some(9999));
        assert_eq!(config.socket_addr().port(), 9999);
    }
}
