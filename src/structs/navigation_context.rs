use url::form_urlencoded;
use crate::config::constants::{REPO_QUERY_PARAM, RESULT_PAGE_PATH};

/// The repository identifier handed to the result view, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationContext {
    repository: Option<String>,
}

impl NavigationContext {
    pub fn from_argument(argument: Option<&str>) -> Self {
        Self {
            repository: argument
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    /// Reads the `repo` query parameter of a result link such as
    /// `/result?repo=https%3A%2F%2Fgithub.com%2Facme%2Fwidget`.
    pub fn from_link(link: &str) -> Self {
        let query = link
            .split_once('?')
            .map(|(_, query)| query.split('#').next().unwrap_or_default())
            .unwrap_or_default();

        let repository = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == REPO_QUERY_PARAM)
            .map(|(_, value)| value.into_owned());

        Self::from_argument(repository.as_deref())
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    /// Result link for submitted input; empty input submits nothing.
    pub fn result_link(input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let encoded: String = form_urlencoded::byte_serialize(input.as_bytes()).collect();
        Some(format!("{}?{}={}", RESULT_PAGE_PATH, REPO_QUERY_PARAM, encoded))
    }
}
