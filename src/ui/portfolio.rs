use crate::app::AppState;
use crate::types::category::CategoryFilter;
use crate::types::project::{filter_projects, Project};
use crate::types::RecordId;
use dioxus::prelude::*;

#[component]
pub fn Portfolio() -> Element {
    let app_state = use_context::<AppState>();
    let mut filter = app_state.filter;
    let mut selected = use_signal(|| None::<RecordId>);

    let current_filter = filter();
    let projects = filter_projects(app_state.projects.read().records(), current_filter);
    let selected_project =
        selected().and_then(|id| app_state.projects.read().get(id).cloned());

    rsx! {
        div {
            class: "portfolio",

            div {
                class: "pills",
                {CategoryFilter::choices().map(|choice| {
                    let label = choice.label();
                    rsx! {
                        button {
                            key: "{label}",
                            class: if choice == current_filter { "pill active" } else { "pill" },
                            onclick: move |_| {
                                filter.set(choice);
                                selected.set(None);
                            },
                            "{label}"
                        }
                    }
                })}
            }

            if let Some(project) = selected_project {
                ProjectDetails {
                    project: project.clone(),
                    onclose: move |_| selected.set(None),
                }
            }

            if projects.is_empty() {
                div {
                    class: "empty",
                    "No projects found. Add some in the Admin panel!"
                }
            } else {
                div {
                    class: "grid",
                    for project in projects {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            onselect: move |id: RecordId| selected.set(Some(id)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, onselect: EventHandler<RecordId>) -> Element {
    let id = project.id;
    let cover = project.cover().unwrap_or_default().to_string();
    let ratio = project.aspect_ratio.clone().unwrap_or_else(|| "1/1".to_string());

    rsx! {
        div {
            class: "card",
            onclick: move |_| onselect.call(id),
            div {
                class: "cover",
                style: "aspect-ratio: {ratio};",
                img { src: "{cover}", alt: "{project.title}" }
            }
            h3 { "{project.title}" }
            p { class: "muted", "{project.description}" }
        }
    }
}

#[component]
fn ProjectDetails(project: Project, onclose: EventHandler<()>) -> Element {
    let client = project.client.clone().unwrap_or_default();
    let year = project.year.clone().unwrap_or_default();
    let role = project.role.clone().unwrap_or_default();

    rsx! {
        section {
            class: "details",
            button { class: "close", onclick: move |_| onclose.call(()), "Close" }

            div {
                class: "details-images",
                for (index, url) in project.images.iter().enumerate() {
                    img { key: "{index}", src: "{url}", alt: "{project.title}" }
                }
            }

            div {
                class: "details-text",
                h2 { "{project.title}" }
                span { class: "badge", "{project.category}" }
                p { "{project.description}" }
                dl {
                    dt { "Client" }
                    dd { "{client}" }
                    dt { "Year" }
                    dd { "{year}" }
                    dt { "Role" }
                    dd { "{role}" }
                }
            }
        }
    }
}
