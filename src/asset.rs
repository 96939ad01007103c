//! Asset lookup for card faces and table art.
//!
//! Front-ends tell the view which assets they can actually show through an
//! [`AssetCatalog`]. A missing asset is never an error: every lookup falls
//! back to something drawable.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::options::TableOptions;

/// The set of asset names a front-end can display.
pub trait AssetCatalog {
    /// Whether an asset with this name exists.
    fn contains(&self, name: &str) -> bool;
}

impl<C: AssetCatalog + ?Sized> AssetCatalog for &C {
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

impl AssetCatalog for [&str] {
    fn contains(&self, name: &str) -> bool {
        self.iter().any(|asset| *asset == name)
    }
}

impl AssetCatalog for [String] {
    fn contains(&self, name: &str) -> bool {
        self.iter().any(|asset| asset == name)
    }
}

impl<T> AssetCatalog for Vec<T>
where
    [T]: AssetCatalog,
{
    fn contains(&self, name: &str) -> bool {
        AssetCatalog::contains(self.as_slice(), name)
    }
}

impl AssetCatalog for BTreeSet<String> {
    fn contains(&self, name: &str) -> bool {
        BTreeSet::contains(self, name)
    }
}

#[cfg(feature = "std")]
impl AssetCatalog for std::collections::HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        std::collections::HashSet::contains(self, name)
    }
}

/// A catalog with nothing in it, for front-ends that draw no images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoAssets;

impl AssetCatalog for NoAssets {
    fn contains(&self, _name: &str) -> bool {
        false
    }
}

/// What to draw for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAsset {
    /// The card's face image.
    Face(String),
    /// The card back image, used when the face is missing.
    Back(String),
    /// No image at all; draw a blank card with this label.
    Placeholder {
        /// Text to put on the blank card.
        label: String,
    },
}

impl CardAsset {
    /// Resolves the asset for `card`: face first, then card back, then a
    /// labelled placeholder.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, CardAsset, TableOptions};
    ///
    /// let options = TableOptions::default();
    /// let catalog = ["card14", "cardBack"];
    ///
    /// let ace = Card::new(14).unwrap();
    /// let two = Card::new(2).unwrap();
    /// assert_eq!(CardAsset::resolve(ace, &options, &catalog[..]), CardAsset::Face("card14".into()));
    /// assert_eq!(CardAsset::resolve(two, &options, &catalog[..]), CardAsset::Back("cardBack".into()));
    /// ```
    #[must_use]
    pub fn resolve<C: AssetCatalog + ?Sized>(
        card: Card,
        options: &TableOptions,
        catalog: &C,
    ) -> Self {
        let face = face_name(card, options);
        if catalog.contains(&face) {
            return Self::Face(face);
        }

        if let Some(back) = options
            .card_back
            .as_ref()
            .filter(|back| catalog.contains(back.as_str()))
        {
            return Self::Back(back.clone());
        }

        Self::Placeholder { label: face }
    }

    /// The asset name, or the placeholder label.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Face(name) | Self::Back(name) => name,
            Self::Placeholder { label } => label,
        }
    }
}

/// Face asset name for a card: the prefix followed by the rank.
#[must_use]
pub fn face_name(card: Card, options: &TableOptions) -> String {
    format!("{}{}", options.card_prefix, card.rank())
}
