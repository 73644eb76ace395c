/// Top-level sections of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Predict,
    Routes,
    Models,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Predict, Self::Routes, Self::Models];

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Predict => "tabs.predict",
            Self::Routes => "tabs.routes",
            Self::Models => "tabs.models",
        }
    }

    /// Element id of the tab's panel.
    #[must_use]
    pub const fn panel_id(self) -> &'static str {
        match self {
            Self::Predict => "predict",
            Self::Routes => "routes",
            Self::Models => "models",
        }
    }
}
