use dioxus::prelude::*;

use crate::core::look::Look;
use crate::core::settings::{use_settings, Language};
use crate::gallery::{
    prefetch_full, BrowserPrefetcher, Carousel, GalleryNav, LazyImage, LightboxOverlay,
    LoadingStrategy, SizeVariant,
};
use crate::t;

use super::catalog::{catalog, Category, Filter, Project};

fn filter_label(language: Language, filter: Filter) -> String {
    match filter {
        Filter::All => t!(language, "portfolio-filter-all"),
        Filter::Only(Category::Web) => t!(language, "portfolio-filter-web"),
        Filter::Only(Category::Student) => t!(language, "portfolio-filter-student"),
        Filter::Only(Category::Consulting) => t!(language, "portfolio-filter-consulting"),
        Filter::Only(Category::UiUx) => t!(language, "portfolio-filter-uiux"),
    }
}

fn filter_class(active: bool, chip: &str) -> String {
    if active {
        "filter-chip filter-chip--active".to_string()
    } else {
        format!("filter-chip {chip}")
    }
}

/// `#portfolio`: filter bar, project grid, detail modal and lightbox.
#[component]
pub fn Portfolio() -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    let mut filter = use_signal(Filter::default);
    let mut nav = use_signal(GalleryNav::default);

    let active = filter();
    let projects: Vec<Project> = catalog()
        .filtered(active)
        .into_iter()
        .cloned()
        .collect();
    let open_project = nav.read().project().and_then(|id| catalog().get(id)).cloned();

    rsx! {
        section { id: "portfolio", class: "section portfolio",
            div { class: "section__intro",
                h2 { class: look.heading, {t!(language, "portfolio-title")} }
                p { class: look.body, {t!(language, "portfolio-subtitle")} }
            }

            div { class: "portfolio__filters", role: "toolbar",
                for option in Filter::ALL {
                    button {
                        key: "{option.key()}",
                        r#type: "button",
                        class: filter_class(option == active, look.chip),
                        aria_pressed: "{option == active}",
                        onclick: move |_| filter.set(option),
                        {filter_label(language, option)}
                    }
                }
            }

            div { class: "portfolio__grid",
                for (position, project) in projects.into_iter().enumerate() {
                    ProjectCard {
                        key: "{project.id}",
                        project,
                        strategy: LoadingStrategy::for_position(position),
                        onselect: move |id: u32| nav.with_mut(|n| n.open_project(id)),
                    }
                }
            }

            if let Some(project) = open_project {
                ProjectModal { project: project.clone(), nav }
                LightboxOverlay { project, nav }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, strategy: LoadingStrategy, onselect: EventHandler<u32>) -> Element {
    let settings = use_settings();
    let language = settings().language;
    let title = project.title.get(language).to_string();
    let id = project.id;
    let first = project.first_image().unwrap_or_default().to_string();

    rsx! {
        button {
            r#type: "button",
            class: "project-card",
            onmouseenter: move |_| prefetch_full(&mut BrowserPrefetcher, &first),
            onclick: move |_| onselect.call(id),
            LazyImage {
                base: project.image.clone(),
                variant: SizeVariant::Thumb,
                fallback: project.fallback_image.clone(),
                alt: title.clone(),
                strategy,
                class: "project-card__image",
            }
            div { class: "project-card__overlay",
                span { class: "project-card__label", {t!(language, "portfolio-view-project")} }
                h3 { class: "project-card__title", "{title}" }
            }
        }
    }
}

#[component]
fn ProjectModal(project: Project, mut nav: Signal<GalleryNav>) -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    let title = project.title.get(language).to_string();
    let description = project.description.get(language).to_string();

    rsx! {
        div {
            class: "modal",
            role: "dialog",
            aria_modal: "true",
            onclick: move |_| nav.with_mut(|n| n.close_project()),

            article {
                class: "modal__panel {look.surface}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                header { class: "modal__header",
                    div {
                        span { class: "modal__client", "{project.client}" }
                        h3 { class: look.heading, "{title}" }
                    }
                    button {
                        r#type: "button",
                        class: "modal__close {look.control}",
                        aria_label: t!(language, "portfolio-close"),
                        onclick: move |_| nav.with_mut(|n| n.close_project()),
                        "✕"
                    }
                }

                p { class: "modal__description {look.body}", "{description}" }

                Carousel { project: project.clone(), nav }

                if !project.tags.is_empty() {
                    ul { class: "modal__tags",
                        for tag in project.tags.iter() {
                            li { key: "{tag}", class: look.chip, "{tag}" }
                        }
                    }
                }

                if let Some(url) = project.url.clone() {
                    a {
                        class: "button button--primary modal__visit",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!(language, "portfolio-visit-site")}
                        span { class: look.chevron, "›" }
                    }
                }
            }
        }
    }
}
