use url::{Host, Url};
use crate::errors::{GitGradeError, GitGradeResult};

/// Where the client runs, resolved once at start-up from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionContext {
    origin: Option<Url>,
}

impl ExecutionContext {
    pub fn local() -> Self {
        Self { origin: None }
    }

    pub fn from_origin(origin: Option<&str>) -> GitGradeResult<Self> {
        let origin = match origin.map(str::trim).filter(|o| !o.is_empty()) {
            Some(origin) => Some(Url::parse(origin)?),
            None => None,
        };
        Ok(Self { origin })
    }

    /// No origin, or an origin on a loopback host.
    pub fn is_local(&self) -> bool {
        match self.origin.as_ref().and_then(|url| url.host()) {
            None => true,
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(ip)) => ip.is_loopback(),
            Some(Host::Ipv6(ip)) => ip.is_loopback(),
        }
    }

    /// Turns a possibly relative endpoint into an absolute URL against the origin.
    pub fn absolute(&self, endpoint: &str) -> GitGradeResult<Url> {
        match Url::parse(endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.origin {
                Some(origin) => Ok(origin.join(endpoint)?),
                None => Err(GitGradeError::config_error(
                    &format!("endpoint '{}' is relative but no origin is configured", endpoint),
                    Some("service.origin"),
                    Some("Set service.origin or give service.api_url as an absolute URL"),
                )),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Absolute form of a base URL for display, without a trailing `/`.
    /// A relative base with no origin to join against is returned as is.
    pub fn absolute_base(&self, base: &str) -> String {
        match self.absolute(base) {
            Ok(url) => url.as_str().trim_end_matches('/').to_string(),
            Err(_) => base.to_string(),
        }
    }
}
