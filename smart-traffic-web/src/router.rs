use yew_router::prelude::*;

use crate::app::Tab;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/predict")]
    Predict,
    #[at("/routes")]
    Routes,
    #[at("/models")]
    Models,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_tab(tab: Tab) -> Self {
        match tab {
            Tab::Predict => Self::Predict,
            Tab::Routes => Self::Routes,
            Tab::Models => Self::Models,
        }
    }

    #[must_use]
    pub const fn to_tab(&self) -> Option<Tab> {
        match self {
            Self::Home | Self::Predict => Some(Tab::Predict),
            Self::Routes => Some(Tab::Routes),
            Self::Models => Some(Tab::Models),
            Self::NotFound => None,
        }
    }
}
