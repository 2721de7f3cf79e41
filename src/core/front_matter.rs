use serde_yaml::{Mapping, Value};

pub const TITLE: &str = "title";
pub const PUBLISHED: &str = "published";
pub const TAGS: &str = "tags";
pub const DESCRIPTION: &str = "description";
pub const COVER_IMAGE: &str = "cover_image";
pub const SERIES: &str = "series";
pub const CANONICAL_URL: &str = "canonical_url";
pub const DEV_TO_ID: &str = "dev_to_id";
pub const DEV_TO_URL: &str = "dev_to_url";

/// Parsed front matter of an article, read-only.
///
/// Accessors follow loose truthiness: an empty string reads as absent, and
/// only a YAML boolean `false` marks an article as unpublished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub value: Mapping,
}

impl FrontMatter {
    pub fn new(value: Mapping) -> Self {
        Self { value }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Non-empty string value for `key`. Numbers and booleans are rendered.
    pub fn string(&self, key: &str) -> Option<String> {
        let s = match self.get(key)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    pub fn title(&self) -> Option<String> {
        self.string(TITLE)
    }

    /// `true` only for an explicit `published: false`.
    pub fn is_unpublished(&self) -> bool {
        matches!(self.get(PUBLISHED), Some(Value::Bool(false)))
    }

    /// Tags in order; anything but a sequence yields no tags.
    pub fn tags(&self) -> Vec<String> {
        match self.get(TAGS) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn description(&self) -> Option<String> {
        self.string(DESCRIPTION)
    }

    pub fn cover_image(&self) -> Option<String> {
        self.string(COVER_IMAGE)
    }

    pub fn series(&self) -> Option<String> {
        self.string(SERIES)
    }

    pub fn canonical_url(&self) -> Option<String> {
        self.string(CANONICAL_URL)
    }

    /// Remote article id, from an integer or a string of digits. Zero is unset.
    pub fn dev_to_id(&self) -> Option<u64> {
        let id = match self.get(DEV_TO_ID)? {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        (id != 0).then_some(id)
    }

    pub fn dev_to_url(&self) -> Option<String> {
        self.string(DEV_TO_URL)
    }
}
