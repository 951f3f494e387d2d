//! Structured content descriptors interpreted by the renderer.

use serde::{Deserialize, Serialize};

/// A titled block of sections: the output of one profile command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Emoji or glyph shown before the title
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One piece of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Free-form paragraphs, one per line.
    Text { lines: Vec<String> },
    /// Labelled facts such as location or current role.
    Facts { items: Vec<Fact> },
    /// A heading followed by a row of tags.
    Tags { heading: String, tags: Vec<String> },
    /// Bordered cards (projects, certifications, schools).
    Cards { items: Vec<Card> },
    /// A plain list of links.
    Links { items: Vec<Link> },
    /// Highlighted closing remark.
    Note { text: String },
    /// A standalone image placeholder.
    Image(Image),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(default)]
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Reference to an image asset. Terminals show the alt text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

impl ContentBlock {
    /// Heading text with the icon, if any.
    pub fn heading(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}
