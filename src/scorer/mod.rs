pub mod compare;
pub mod corpus;
pub mod evaluate;
pub mod index;
pub mod pairwise;
pub mod tfidf;
pub mod token;

use serde::{Deserialize, Serialize};

/// A searchable document as the dashboard stores it.
/// Fields other than `id` may be absent in upstream payloads and
/// deserialize to empty strings; an empty field simply contributes no
/// tokens.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
}

impl Document {
    pub fn new(id: &str, title: &str, summary: &str, content: &str, category: &str) -> Self {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            content: content.to_string(),
            category: category.to_string(),
        }
    }

    /// Text the scoring pipeline sees: title, summary and content joined by
    /// single spaces, in that order. The exact-match signal runs over this
    /// string untokenized.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_joins_in_order() {
        let doc = Document::new("1", "Title", "Summary", "Content", "Cat");
        assert_eq!(doc.combined_text(), "Title Summary Content");
    }

    #[test]
    fn absent_fields_deserialize_to_empty_strings() {
        // only "id" present in the payload
        let payload = std::collections::BTreeMap::from([("id", "42")]);
        let bytes = serde_cbor::to_vec(&payload).unwrap();
        let doc: Document = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(doc.id, "42");
        assert_eq!(doc.title, "");
        assert_eq!(doc.combined_text(), "  ");
    }
}
