//! Light/dark theme engine.
//!
//! DESIGN
//! ======
//! `ThemeEngine` owns the current preference and is the only writer of the
//! persisted value and the document marker. Every `set_preference` is a full
//! write-and-apply followed by subscriber notification, so storage, marker
//! and subscribers never disagree. Storage and document access sit behind
//! [`PreferenceStore`] and [`ThemeTarget`] so the engine runs without a
//! browser; `util::dark_mode` provides the `web_sys` implementations.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Visual theme preference. Dark is the site default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a stored value. Absent or unrecognized values map to `Dark`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Stored value and document class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Human-readable mode name shown in the theme preview.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Modo Escuro",
            Self::Light => "Modo Claro",
        }
    }

    /// Accessible label for the toggle button while this preference is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Mudar para tema claro",
            Self::Light => "Mudar para tema escuro",
        }
    }
}

/// Durable key-value slot for the preference.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Document-level marker consumed by the CSS theme variables.
pub trait ThemeTarget: Send + Sync {
    /// Add `preference`'s marker and remove the opposite one.
    fn apply(&self, preference: ThemePreference);
}

/// Handle returned by [`ThemeEngine::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(ThemePreference) + Send + Sync>;

/// Injectable theme state holder with an explicit subscribe/notify contract.
pub struct ThemeEngine {
    store: Box<dyn PreferenceStore>,
    target: Box<dyn ThemeTarget>,
    current: ThemePreference,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ThemeEngine {
    /// Create an engine holding the default preference.
    ///
    /// Nothing is read or applied until [`restore`](Self::restore), which
    /// keeps server rendering and the first hydrated frame identical.
    pub fn new(store: impl PreferenceStore + 'static, target: impl ThemeTarget + 'static) -> Self {
        Self {
            store: Box::new(store),
            target: Box::new(target),
            current: ThemePreference::default(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Persisted preference, `Dark` when nothing usable is stored.
    pub fn preference(&self) -> ThemePreference {
        ThemePreference::parse(self.store.load().as_deref())
    }

    /// Load the persisted preference and write-and-apply it.
    pub fn restore(&mut self) -> ThemePreference {
        let preference = self.preference();
        self.set_preference(preference);
        preference
    }

    /// Store `preference`, apply it to the document, then notify subscribers.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.store.save(preference.as_str());
        self.target.apply(preference);
        self.current = preference;
        for (_, subscriber) in &self.subscribers {
            subscriber(preference);
        }
    }

    /// Flip the current preference and return the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.opposite();
        self.set_preference(next);
        next
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(ThemePreference) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}
