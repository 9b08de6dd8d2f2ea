use crate::app::AppState;
use crate::types::artwork::{Artwork, ArtworkEdit};
use crate::types::{parse_image_lines, Record, RecordId};
use crate::ui::{TextArea, TextField};
use dioxus::prelude::*;

#[component]
pub fn Gallery() -> Element {
    let app_state = use_context::<AppState>();
    let mut selected = use_signal(|| None::<RecordId>);
    let mut show_form = use_signal(|| false);

    let artworks = app_state.artworks.read().records().to_vec();
    let selected_artwork =
        selected().and_then(|id| app_state.artworks.read().get(id).cloned());

    rsx! {
        div {
            class: "gallery",

            div {
                class: "toolbar",
                h2 { "Art Gallery" }
                button {
                    class: "primary",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "Submit Artwork" }
                }
            }

            if show_form() {
                SubmitArtwork { onsubmitted: move |_| show_form.set(false) }
            }

            if let Some(artwork) = selected_artwork {
                ArtworkDetails {
                    artwork: artwork.clone(),
                    onclose: move |_| selected.set(None),
                }
            }

            if artworks.is_empty() {
                div {
                    class: "empty",
                    "No artworks yet. Be the first to submit one!"
                }
            } else {
                div {
                    class: "grid",
                    for artwork in artworks {
                        ArtworkCard {
                            key: "{artwork.id}",
                            artwork: artwork.clone(),
                            onselect: move |id: RecordId| selected.set(Some(id)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ArtworkCard(artwork: Artwork, onselect: EventHandler<RecordId>) -> Element {
    let id = artwork.id;
    let cover = artwork.images.first().cloned().unwrap_or_default();

    rsx! {
        div {
            class: "card",
            onclick: move |_| onselect.call(id),
            div {
                class: "cover",
                img { src: "{cover}", alt: "{artwork.title}" }
            }
            h3 { "{artwork.title}" }
            p { class: "accent", "{artwork.artist}" }
        }
    }
}

#[component]
fn ArtworkDetails(artwork: Artwork, onclose: EventHandler<()>) -> Element {
    let year = artwork.year.clone().unwrap_or_default();
    let medium = artwork.medium.clone().unwrap_or_default();
    let dimensions = artwork.dimensions.clone().unwrap_or_default();

    rsx! {
        section {
            class: "details",
            button { class: "close", onclick: move |_| onclose.call(()), "Close" }

            div {
                class: "details-images",
                for (index, url) in artwork.images.iter().enumerate() {
                    img { key: "{index}", src: "{url}", alt: "{artwork.title}" }
                }
            }

            div {
                class: "details-text",
                h2 { "{artwork.title}" }
                p { class: "accent", "{artwork.artist}" }
                p { "{artwork.description}" }
                dl {
                    dt { "Year" }
                    dd { "{year}" }
                    dt { "Medium" }
                    dd { "{medium}" }
                    dt { "Dimensions" }
                    dd { "{dimensions}" }
                }
            }
        }
    }
}

/// Public submission form; closes itself once the artwork is stored
#[component]
fn SubmitArtwork(onsubmitted: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();
    let mut artworks = app_state.artworks;
    let mut draft = use_signal(Artwork::draft);
    let mut image_url = use_signal(String::new);

    let current = draft();
    let year = current.year.clone().unwrap_or_default();
    let medium = current.medium.clone().unwrap_or_default();
    let dimensions = current.dimensions.clone().unwrap_or_default();

    rsx! {
        div {
            class: "panel",
            h3 { "Submit Your Artwork" }

            TextField {
                label: "Title *",
                value: current.title.clone(),
                oninput: move |value: String| draft.write().apply(ArtworkEdit::Title(value)),
            }
            TextField {
                label: "Artist Name *",
                value: current.artist.clone(),
                oninput: move |value: String| draft.write().apply(ArtworkEdit::Artist(value)),
            }
            TextField {
                label: "Image URL *",
                value: image_url(),
                oninput: move |value: String| image_url.set(value),
            }
            TextArea {
                label: "Description",
                value: current.description.clone(),
                oninput: move |value: String| draft.write().apply(ArtworkEdit::Description(value)),
            }
            div {
                class: "row",
                TextField {
                    label: "Year",
                    value: year,
                    oninput: move |value: String| draft.write().apply(ArtworkEdit::Year(value)),
                }
                TextField {
                    label: "Medium",
                    value: medium,
                    oninput: move |value: String| draft.write().apply(ArtworkEdit::Medium(value)),
                }
                TextField {
                    label: "Dimensions",
                    value: dimensions,
                    oninput: move |value: String| draft.write().apply(ArtworkEdit::Dimensions(value)),
                }
            }

            button {
                class: "primary",
                onclick: move |_| {
                    let mut artwork = draft();
                    artwork.apply(ArtworkEdit::Images(parse_image_lines(&image_url())));

                    match artworks.write().add(artwork) {
                        Ok(Some(_)) => {
                            draft.set(Artwork::draft());
                            image_url.set(String::new());
                            onsubmitted.call(());
                        }
                        Ok(None) => tracing::debug!("Artwork submission is missing required fields"),
                        Err(e) => tracing::error!("Failed to save artwork: {}", e),
                    }
                },
                "Submit Artwork"
            }
        }
    }
}
