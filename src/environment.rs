use crate::consts::cli_consts::api::LOCAL_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Data server the dashboard reads from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The data server running on this machine.
    #[default]
    Local,
    /// Any other server, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the data API, without a trailing slash.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: s.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "Invalid environment {:?}: expected \"local\" or an http(s) URL",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
