use serde::{Deserialize, Serialize};

/// One advertised service entry. Records come straight off the wire;
/// missing fields deserialize as empty strings and unknown fields are
/// dropped. No per-record validation happens anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl ServiceRecord {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image: image.into(),
        }
    }
}

/// The full ordered collection of services for a session. Insertion order
/// is display order. Built once on a successful load and never mutated;
/// filtering derives new sequences instead of touching the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog(Vec<ServiceRecord>);

impl ServiceCatalog {
    pub fn new(records: Vec<ServiceRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One display unit built from a record: the image, the title, and the
/// accessibility facts each card carries (a focusable article with a
/// lazily loaded image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub image: String,
    pub role: &'static str,
    pub focusable: bool,
    pub lazy_image: bool,
}

impl CardView {
    pub fn from_record(record: &ServiceRecord) -> Self {
        Self {
            title: record.title.clone(),
            image: record.image.clone(),
            role: "article",
            focusable: true,
            lazy_image: true,
        }
    }
}
