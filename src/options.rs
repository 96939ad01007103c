//! Table presentation options.

use alloc::string::{String, ToString};

/// Configuration for how a table is presented.
///
/// These only affect [`TableView`](crate::TableView); the engine never reads
/// them. Use the builder pattern to customize options:
///
/// ```
/// use warrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_card_prefix("face_")
///     .with_card_back(None::<&str>)
///     .with_opponent_label("Dealer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Prefix of card face asset names; the rank is appended (`card2`..`card14`).
    pub card_prefix: String,
    /// Asset shown when a face asset is missing. `None` to go straight to the
    /// placeholder.
    pub card_back: Option<String>,
    /// Background asset name.
    pub background: String,
    /// Logo asset name.
    pub logo: String,
    /// Title shown when the logo asset is missing.
    pub title: String,
    /// Label over the player's score.
    pub player_label: String,
    /// Label over the opponent's score.
    pub opponent_label: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            card_prefix: "card".to_string(),
            card_back: Some("cardBack".to_string()),
            background: "background".to_string(),
            logo: "logo".to_string(),
            title: "WAR".to_string(),
            player_label: "Player".to_string(),
            opponent_label: "CPU".to_string(),
        }
    }
}

impl TableOptions {
    /// Sets the card face asset prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_card_prefix("face_");
    /// assert_eq!(options.card_prefix, "face_");
    /// ```
    #[must_use]
    pub fn with_card_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.card_prefix = prefix.into();
        self
    }

    /// Sets the card back asset, or disables it with `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_card_back(Some("back_red"));
    /// assert_eq!(options.card_back.as_deref(), Some("back_red"));
    ///
    /// let options = options.with_card_back(None::<&str>);
    /// assert_eq!(options.card_back, None);
    /// ```
    #[must_use]
    pub fn with_card_back<T: Into<String>>(mut self, back: Option<T>) -> Self {
        self.card_back = back.map(Into::into);
        self
    }

    /// Sets the background asset name.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Sets the logo asset name.
    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    /// Sets the fallback title.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_title("Battle");
    /// assert_eq!(options.title, "Battle");
    /// ```
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the player's score label.
    #[must_use]
    pub fn with_player_label(mut self, label: impl Into<String>) -> Self {
        self.player_label = label.into();
        self
    }

    /// Sets the opponent's score label.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_opponent_label("Dealer");
    /// assert_eq!(options.opponent_label, "Dealer");
    /// ```
    #[must_use]
    pub fn with_opponent_label(mut self, label: impl Into<String>) -> Self {
        self.opponent_label = label.into();
        self
    }
}
