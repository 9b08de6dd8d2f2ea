//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::{open_backend, ContentStore};
use crate::types::artwork::Artwork;
use crate::types::category::CategoryFilter;
use crate::types::project::Project;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub settings: Signal<AppSettings>,
    pub projects: Signal<ContentStore<Project>>,
    pub artworks: Signal<ContentStore<Artwork>>,
    /// Category selected in the portfolio view, kept across tab switches
    pub filter: Signal<CategoryFilter>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let backend = open_backend(&settings.content_directory);
        let projects = ContentStore::with_seed(backend.clone(), settings.seed_defaults);
        let artworks = ContentStore::with_seed(backend, settings.seed_defaults);
        tracing::info!(
            "AppState initialized with {} projects and {} artworks",
            projects.records().len(),
            artworks.records().len()
        );

        Self {
            filter: Signal::new(settings.initial_filter()),
            settings: Signal::new(settings),
            projects: Signal::new(projects),
            artworks: Signal::new(artworks),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
