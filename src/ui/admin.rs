use crate::app::AppState;
use crate::storage::settings::save_settings;
use crate::storage::ContentStore;
use crate::types::artwork::{Artwork, ArtworkEdit};
use crate::types::category::{Category, CategoryFilter};
use crate::types::project::{Project, ProjectEdit};
use crate::types::{parse_image_lines, Record, RecordId};
use crate::ui::{TextArea, TextField};
use dioxus::prelude::*;

/// Apply one edit and persist; rejected edits leave the record as it was
fn edit_project(mut projects: Signal<ContentStore<Project>>, id: RecordId, edit: ProjectEdit) {
    if let Err(e) = projects.write().update(id, edit) {
        tracing::error!("Failed to save project: {}", e);
    }
}

fn edit_artwork(mut artworks: Signal<ContentStore<Artwork>>, id: RecordId, edit: ArtworkEdit) {
    if let Err(e) = artworks.write().update(id, edit) {
        tracing::error!("Failed to save artwork: {}", e);
    }
}

#[component]
pub fn Admin() -> Element {
    let app_state = use_context::<AppState>();
    let mut projects_signal = app_state.projects;
    let projects = app_state.projects.read().records().to_vec();
    let artworks = app_state.artworks.read().records().to_vec();

    rsx! {
        div {
            class: "admin",

            div {
                class: "toolbar",
                h2 { "Edit Your Portfolio" }
                button {
                    class: "danger",
                    onclick: move |_| {
                        if let Err(e) = projects_signal.write().reset() {
                            tracing::error!("Failed to restore default projects: {}", e);
                        }
                    },
                    "Restore Defaults"
                }
            }

            NewProjectForm {}

            div {
                class: "panel",
                h3 { "Existing Projects" }
                if projects.is_empty() {
                    p { class: "muted", "No projects yet." }
                }
                for project in projects {
                    ProjectEditor { key: "{project.id}", project: project.clone() }
                }
            }

            div {
                class: "panel",
                h3 { "Gallery Submissions" }
                if artworks.is_empty() {
                    p { class: "muted", "No submissions yet." }
                }
                for artwork in artworks {
                    SubmissionRow { key: "{artwork.id}", artwork: artwork.clone() }
                }
            }

            PreferencesCard {}
        }
    }
}

#[component]
fn CategorySelect(value: Category, onchange: EventHandler<Category>) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "Category" }
            select {
                value: value.label(),
                onchange: move |evt| {
                    if let Some(category) = Category::from_label(&evt.value()) {
                        onchange.call(category);
                    }
                },
                {Category::ALL.into_iter().map(|category| {
                    let label = category.label();
                    rsx! {
                        option {
                            key: "{label}",
                            value: label,
                            selected: category == value,
                            "{label}"
                        }
                    }
                })}
            }
        }
    }
}

#[component]
fn NewProjectForm() -> Element {
    let app_state = use_context::<AppState>();
    let mut projects = app_state.projects;
    let mut draft = use_signal(Project::draft);
    let mut images_text = use_signal(String::new);

    let current = draft();
    let client = current.client.clone().unwrap_or_default();
    let year = current.year.clone().unwrap_or_default();
    let role = current.role.clone().unwrap_or_default();
    let ratio = current.aspect_ratio.clone().unwrap_or_default();

    rsx! {
        div {
            class: "panel",
            h3 { "Add New Project" }

            TextField {
                label: "Title",
                value: current.title.clone(),
                oninput: move |value: String| draft.write().apply(ProjectEdit::Title(value)),
            }
            CategorySelect {
                value: current.category,
                onchange: move |category: Category| draft.write().apply(ProjectEdit::Category(category)),
            }
            TextArea {
                label: "Image URLs (one per line)",
                value: images_text(),
                oninput: move |value: String| images_text.set(value),
            }
            TextArea {
                label: "Description",
                value: current.description.clone(),
                oninput: move |value: String| draft.write().apply(ProjectEdit::Description(value)),
            }
            div {
                class: "row",
                TextField {
                    label: "Client",
                    value: client,
                    oninput: move |value: String| draft.write().apply(ProjectEdit::Client(value)),
                }
                TextField {
                    label: "Year",
                    value: year,
                    oninput: move |value: String| draft.write().apply(ProjectEdit::Year(value)),
                }
                TextField {
                    label: "Role",
                    value: role,
                    oninput: move |value: String| draft.write().apply(ProjectEdit::Role(value)),
                }
                TextField {
                    label: "Aspect Ratio",
                    value: ratio,
                    oninput: move |value: String| draft.write().apply(ProjectEdit::AspectRatio(value)),
                }
            }

            button {
                class: "primary",
                onclick: move |_| {
                    let mut project = draft();
                    project.apply(ProjectEdit::Images(parse_image_lines(&images_text())));

                    match projects.write().add(project) {
                        Ok(Some(_)) => {
                            draft.set(Project::draft());
                            images_text.set(String::new());
                        }
                        Ok(None) => tracing::debug!("Project form is missing required fields"),
                        Err(e) => tracing::error!("Failed to save project: {}", e),
                    }
                },
                "Add Project"
            }
        }
    }
}

/// Inline editor for one stored project; every change is saved immediately
#[component]
fn ProjectEditor(project: Project) -> Element {
    let app_state = use_context::<AppState>();
    let mut projects = app_state.projects;
    let id = project.id;
    let images = project.images.join("\n");
    let client = project.client.clone().unwrap_or_default();
    let year = project.year.clone().unwrap_or_default();
    let role = project.role.clone().unwrap_or_default();
    let ratio = project.aspect_ratio.clone().unwrap_or_default();

    rsx! {
        div {
            class: "editor",

            div {
                class: "row",
                TextField {
                    label: "Title",
                    value: project.title.clone(),
                    oninput: move |value: String| edit_project(projects, id, ProjectEdit::Title(value)),
                }
                button {
                    class: "danger",
                    onclick: move |_| {
                        if let Err(e) = projects.write().remove(id) {
                            tracing::error!("Failed to delete project: {}", e);
                        }
                    },
                    "Delete"
                }
            }
            CategorySelect {
                value: project.category,
                onchange: move |category: Category| edit_project(projects, id, ProjectEdit::Category(category)),
            }
            TextArea {
                label: "Image URLs (one per line)",
                value: images,
                oninput: move |value: String| {
                    edit_project(projects, id, ProjectEdit::Images(parse_image_lines(&value)))
                },
            }
            TextArea {
                label: "Description",
                value: project.description.clone(),
                oninput: move |value: String| edit_project(projects, id, ProjectEdit::Description(value)),
            }
            div {
                class: "row",
                TextField {
                    label: "Client",
                    value: client,
                    oninput: move |value: String| edit_project(projects, id, ProjectEdit::Client(value)),
                }
                TextField {
                    label: "Year",
                    value: year,
                    oninput: move |value: String| edit_project(projects, id, ProjectEdit::Year(value)),
                }
                TextField {
                    label: "Role",
                    value: role,
                    oninput: move |value: String| edit_project(projects, id, ProjectEdit::Role(value)),
                }
                TextField {
                    label: "Aspect Ratio",
                    value: ratio,
                    oninput: move |value: String| edit_project(projects, id, ProjectEdit::AspectRatio(value)),
                }
            }
        }
    }
}

/// Moderation row for one submitted artwork: inline edits and delete
#[component]
fn SubmissionRow(artwork: Artwork) -> Element {
    let app_state = use_context::<AppState>();
    let mut artworks = app_state.artworks;
    let id = artwork.id;
    let images = artwork.images.join("\n");
    let year = artwork.year.clone().unwrap_or_default();
    let medium = artwork.medium.clone().unwrap_or_default();
    let dimensions = artwork.dimensions.clone().unwrap_or_default();

    rsx! {
        div {
            class: "editor submission",

            div {
                class: "row",
                TextField {
                    label: "Title",
                    value: artwork.title.clone(),
                    oninput: move |value: String| edit_artwork(artworks, id, ArtworkEdit::Title(value)),
                }
                TextField {
                    label: "Artist",
                    value: artwork.artist.clone(),
                    oninput: move |value: String| edit_artwork(artworks, id, ArtworkEdit::Artist(value)),
                }
                button {
                    class: "danger",
                    onclick: move |_| {
                        if let Err(e) = artworks.write().remove(id) {
                            tracing::error!("Failed to delete artwork: {}", e);
                        }
                    },
                    "Delete"
                }
            }
            TextArea {
                label: "Image URLs (one per line)",
                value: images,
                oninput: move |value: String| {
                    edit_artwork(artworks, id, ArtworkEdit::Images(parse_image_lines(&value)))
                },
            }
            TextArea {
                label: "Description",
                value: artwork.description.clone(),
                oninput: move |value: String| edit_artwork(artworks, id, ArtworkEdit::Description(value)),
            }
            div {
                class: "row",
                TextField {
                    label: "Year",
                    value: year,
                    oninput: move |value: String| edit_artwork(artworks, id, ArtworkEdit::Year(value)),
                }
                TextField {
                    label: "Medium",
                    value: medium,
                    oninput: move |value: String| edit_artwork(artworks, id, ArtworkEdit::Medium(value)),
                }
                TextField {
                    label: "Dimensions",
                    value: dimensions,
                    oninput: move |value: String| {
                        edit_artwork(artworks, id, ArtworkEdit::Dimensions(value))
                    },
                }
            }
        }
    }
}

#[component]
fn PreferencesCard() -> Element {
    let app_state = use_context::<AppState>();
    let settings = app_state.settings.read().clone();
    let mut app_state_filter = app_state;
    let mut app_state_seed = app_state;

    rsx! {
        div {
            class: "panel",
            h3 { "Preferences" }

            label {
                class: "field",
                span { class: "field-label", "Portfolio filter on startup" }
                select {
                    value: settings.default_filter.clone(),
                    onchange: move |evt| {
                        let label = evt.value();
                        if CategoryFilter::from_label(&label).is_none() {
                            return;
                        }
                        let mut settings = app_state_filter.settings.write();
                        settings.default_filter = label;
                        if let Err(error) = save_settings(&settings) {
                            tracing::error!("Failed to save settings: {}", error);
                        }
                    },
                    {CategoryFilter::choices().map(|choice| {
                        let label = choice.label();
                        rsx! {
                            option {
                                key: "{label}",
                                value: label,
                                selected: settings.default_filter == label,
                                "{label}"
                            }
                        }
                    })}
                }
            }

            label {
                class: "field inline",
                input {
                    r#type: "checkbox",
                    checked: settings.seed_defaults,
                    onchange: move |evt| {
                        let mut settings = app_state_seed.settings.write();
                        settings.seed_defaults = evt.checked();
                        if let Err(error) = save_settings(&settings) {
                            tracing::error!("Failed to save settings: {}", error);
                        }
                    },
                }
                span { "Seed empty stores with the sample projects (applies on next start)" }
            }
        }
    }
}
