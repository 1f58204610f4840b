use std::env;
use std::io;
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub static_url: String,
    /// Watch the template directory and reload on change.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            static_url: "/static/".to_string(),
            debug: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(host) = lookup("MYMAP_HOST") {
            settings.host = host;
        }
        if let Some(port) = lookup("MYMAP_PORT") {
            settings.port = port.trim().parse().map_err(|_| {
                invalid_input(format!("MYMAP_PORT must be a port number, got '{}'", port))
            })?;
        }
        if let Some(dir) = lookup("TEMPLATE_DIR") {
            settings.template_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            settings.static_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("STATIC_URL") {
            settings.static_url = parse_static_url(&url).ok_or_else(|| {
                invalid_input(format!("STATIC_URL must be an absolute path like /static/, got '{}'", url))
            })?;
        }
        if let Some(debug) = lookup("DEBUG") {
            settings.debug = parse_bool(&debug)
                .ok_or_else(|| invalid_input(format!("DEBUG must be a boolean, got '{}'", debug)))?;
        }

        Ok(settings)
    }

    /// Path the static directory is mounted at, `STATIC_URL` without its
    /// trailing slash.
    pub fn static_mount(&self) -> &str {
        self.static_url.trim_end_matches('/')
    }
}

/// Accepts `/assets` or `/assets/` and always returns the slash-terminated
/// form templates prepend to asset paths.
fn parse_static_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if !trimmed.starts_with('/') || trimmed.contains("//") {
        return None;
    }
    Some(format!("{}/", trimmed))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}
