//! MongoDB data models

use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use serde::{Deserialize, Serialize};

/// Description of one index to create
///
/// Deserializes from the same shape the server uses:
///
/// ```json
/// { "key": { "email": 1 }, "options": { "unique": true, "name": "email_unique" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSpec {
    /// Field ordering, e.g. `{ "email": 1, "created_at": -1 }`
    pub key: Document,

    /// Driver index options, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexOptions>,
}

impl IndexSpec {
    pub fn new(key: Document) -> Self {
        Self { key, options: None }
    }

    pub fn with_options(mut self, options: IndexOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Driver model for this specification
    pub fn to_model(&self) -> IndexModel {
        IndexModel::builder()
            .keys(self.key.clone())
            .options(self.options.clone())
            .build()
    }
}
