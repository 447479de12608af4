//! Card definitions and the image lookup used to filter them.

use std::collections::HashSet;

/// Opaque identifier handed back to the host when the final card's action
/// button is tapped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ActionId(pub String);

impl From<&str> for ActionId {
    fn from(s: &str) -> Self {
        ActionId(s.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CardDefinition {
    pub title: String,
    pub body: String,
    pub image_id: String,
    #[serde(default)]
    pub action_label: Option<String>,
    #[serde(default)]
    pub action_id: Option<ActionId>,
}

impl CardDefinition {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        image_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image_id: image_id.into(),
            action_label: None,
            action_id: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, id: impl Into<ActionId>) -> Self {
        self.action_label = Some(label.into());
        self.action_id = Some(id.into());
        self
    }

    pub fn has_action(&self) -> bool {
        self.action_label.is_some()
    }
}

/// Answers whether an image resource exists for a card.
pub trait ImageCatalog {
    fn contains(&self, image_id: &str) -> bool;
}

impl ImageCatalog for HashSet<String> {
    fn contains(&self, image_id: &str) -> bool {
        HashSet::contains(self, image_id)
    }
}

impl<F: Fn(&str) -> bool> ImageCatalog for F {
    fn contains(&self, image_id: &str) -> bool {
        self(image_id)
    }
}

/// Catalog that claims every image exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllImages;

impl ImageCatalog for AllImages {
    fn contains(&self, _image_id: &str) -> bool {
        true
    }
}

/// Drops cards whose image is missing; order is preserved.
pub fn resolve_cards(cards: Vec<CardDefinition>, images: &dyn ImageCatalog) -> Vec<CardDefinition> {
    cards
        .into_iter()
        .filter(|card| {
            let found = images.contains(&card.image_id);
            if !found {
                log::warn!(
                    "skipping onboarding card {:?}: image {:?} not found",
                    card.title,
                    card.image_id
                );
            }
            found
        })
        .collect()
}
