use std::collections::BTreeMap;
use std::fmt;

use ghweek_github::Nameable;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Canonical web address of an issue or pull request.
pub struct ItemUrl(String);

impl ItemUrl {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemUrl {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Formats the Markdown link used as an item's display name.
pub fn display_name(item: &impl Nameable) -> String {
    format!("[{}]({})", item.title(), item.html_url())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Display name per discovered item url.
///
/// Events arrive newest first, so the first name recorded for a url is the
/// freshest one discovery can offer.
pub struct NameRegistry {
    names: BTreeMap<ItemUrl, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the item's name unless its url already has one.
    pub fn record_first_seen(&mut self, item: &impl Nameable) -> ItemUrl {
        let url = ItemUrl::new(item.html_url());
        if !self.names.contains_key(&url) {
            self.names.insert(url.clone(), display_name(item));
        }
        url
    }

    pub fn force_override(&mut self, url: &ItemUrl, item: &impl Nameable) {
        self.names.insert(url.clone(), display_name(item));
    }

    pub fn name(&self, url: &ItemUrl) -> Option<&str> {
        self.names.get(url).map(String::as_str)
    }

    pub fn contains(&self, url: &ItemUrl) -> bool {
        self.names.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
