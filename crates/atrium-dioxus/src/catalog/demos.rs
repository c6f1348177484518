//! The demo registry.
//!
//! Each entry binds one component (or one of the core utilities) to
//! representative sample props. Entries are plain render functions so the
//! registry can stay a const table; demos that need local state or the
//! loaded config delegate to a private component.

use crate::components::{
    AnimatedText, Announcement, Button, ButtonVariant, Chip, ChipTone, CopyField, FallbackImage,
    TabItem, Tabs,
};
use atrium_config::{Config, Tracking};
use atrium_core::geometry::{BoundingRect, StaticElement, resolve_bounding_rect};
use atrium_core::navigation::{QueryStringSource, decorate_navigation_url};
use dioxus::prelude::*;
use url::Url;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub render: fn() -> Element,
}

const DEMOS: &[DemoEntry] = &[
    DemoEntry {
        name: "Button",
        summary: "Push buttons in the three standard variants.",
        render: button_demo,
    },
    DemoEntry {
        name: "Chip",
        summary: "Labelled tokens in every tone, including dismissable ones.",
        render: chip_demo,
    },
    DemoEntry {
        name: "Copy field",
        summary: "A read-only value with a copy-to-clipboard trigger.",
        render: copy_field_demo,
    },
    DemoEntry {
        name: "Tabs",
        summary: "A tab strip that renders exactly the selected pane.",
        render: tabs_demo,
    },
    DemoEntry {
        name: "Announcement",
        summary: "A dismissable product announcement with a learn-more link.",
        render: announcement_demo,
    },
    DemoEntry {
        name: "Fallback image",
        summary: "An image that swaps to a stand-in source when loading fails.",
        render: fallback_image_demo,
    },
    DemoEntry {
        name: "Animated text",
        summary: "A word rotation driven by a timer.",
        render: animated_text_demo,
    },
    DemoEntry {
        name: "Geometry",
        summary: "Bounding boxes resolved against an owning ancestor.",
        render: geometry_demo,
    },
    DemoEntry {
        name: "Navigation",
        summary: "Outbound links decorated with the tracking source.",
        render: navigation_demo,
    },
];

/// Every demo the catalog exhibits, in sidebar order.
pub fn all() -> &'static [DemoEntry] {
    DEMOS
}

fn button_demo() -> Element {
    rsx! {
        section { class: "demo-row",
            Button {
                label: "Deploy",
                onclick: move |_| log::info!("Deploy clicked"),
            }
            Button {
                label: "Preview",
                variant: ButtonVariant::Secondary,
                onclick: move |_| log::info!("Preview clicked"),
            }
            Button {
                label: "Delete",
                variant: ButtonVariant::Danger,
                disabled: true,
                onclick: move |_| {},
            }
        }
    }
}

fn chip_demo() -> Element {
    rsx! {
        ChipDemo {}
    }
}

#[component]
fn ChipDemo() -> Element {
    let mut labels = use_signal(|| {
        vec![
            "rust".to_string(),
            "dioxus".to_string(),
            "desktop".to_string(),
        ]
    });

    let dismissable: Vec<(String, Callback<()>)> = labels
        .read()
        .iter()
        .map(|label| {
            let label = label.clone();
            let shown = label.clone();
            let on_delete = Callback::new(move |_: ()| {
                labels.write().retain(|l| l != &label);
            });
            (shown, on_delete)
        })
        .collect();

    rsx! {
        section { class: "demo-row",
            Chip { label: "NEW", tone: ChipTone::Info }
            Chip { label: "stable", tone: ChipTone::Success }
            Chip { label: "deprecated", tone: ChipTone::Warning }
            Chip { label: "removed", tone: ChipTone::Danger }
        }
        section { class: "demo-row",
            for (label, on_delete) in dismissable {
                Chip {
                    key: "{label}",
                    label: label.clone(),
                    on_delete: Some(on_delete),
                }
            }
        }
    }
}

fn copy_field_demo() -> Element {
    rsx! {
        CopyFieldDemo {}
    }
}

#[component]
fn CopyFieldDemo() -> Element {
    let mut last_copied = use_signal(|| None::<String>);

    let status = match last_copied.read().as_deref() {
        Some(value) => format!("Copied: {value}"),
        None => "Nothing copied yet".to_string(),
    };

    rsx! {
        section { class: "demo-column",
            CopyField {
                value: "cargo add atrium-dioxus",
                on_copy: Some(Callback::new(move |value: String| {
                    last_copied.set(Some(value));
                })),
            }
            p { class: "demo-note", "{status}" }
        }
    }
}

fn tabs_demo() -> Element {
    rsx! {
        Tabs {
            tabs: vec![
                TabItem::new(
                    "Overview",
                    rsx! {
                        p { "Atrium is a small set of presentational building blocks." }
                    },
                ),
                TabItem::new(
                    "Usage",
                    rsx! {
                        p {
                            "Add the crate and compose components inside "
                            code { "rsx!" }
                            " blocks."
                        }
                    },
                ),
                TabItem::new(
                    "Theming",
                    rsx! {
                        p { "Light and dark themes restyle every component through CSS variables." }
                    },
                ),
            ],
            on_change: Some(Callback::new(|index: usize| {
                log::info!("Tab selected: {index}");
            })),
        }
    }
}

fn announcement_demo() -> Element {
    rsx! {
        AnnouncementDemo {}
    }
}

#[component]
fn AnnouncementDemo() -> Element {
    let mut dismissed = use_signal(|| false);

    rsx! {
        if dismissed() {
            section { class: "demo-column",
                p { class: "demo-note", "Announcement dismissed." }
                Button {
                    label: "Show it again",
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| dismissed.set(false),
                }
            }
        } else {
            Announcement {
                title: "Multi-region deploys",
                body: "Catalog builds can now be published to every region at once.",
                link_href: Some("https://example.com/blog/multi-region".to_string()),
                link_label: Some("Read the announcement".to_string()),
                on_dismiss: Some(Callback::new(move |_: ()| dismissed.set(true))),
            }
        }
    }
}

fn fallback_image_demo() -> Element {
    rsx! {
        section { class: "demo-row",
            FallbackImage {
                src: "https://cdn.example.com/releases/banner.png",
                fallback_src: PLACEHOLDER_IMAGE.to_string(),
                alt: "Release banner",
            }
        }
    }
}

// Inline SVG stand-in so the swap is visible without network access.
const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='320' height='180'>\
<rect width='100%25' height='100%25' fill='%23cbd5e1'/>\
<text x='50%25' y='50%25' text-anchor='middle' fill='%23475569'>placeholder</text>\
</svg>";

fn animated_text_demo() -> Element {
    rsx! {
        p { class: "demo-sentence",
            "Build interfaces that feel "
            AnimatedText {
                words: vec![
                    "fast".to_string(),
                    "simple".to_string(),
                    "typed".to_string(),
                ],
                interval_ms: 1600,
            }
        }
    }
}

fn geometry_demo() -> Element {
    let rows = geometry_rows();

    rsx! {
        section { class: "demo-column",
            p { class: "demo-note",
                "Boxes are resolved against the owning ancestor, falling back to the catalog root."
            }
            table { class: "demo-table",
                thead {
                    tr {
                        th { "Scenario" }
                        th { "Resolved box" }
                    }
                }
                tbody {
                    for (name, outcome) in rows {
                        tr { key: "{name}",
                            td { "{name}" }
                            td { code { "{outcome}" } }
                        }
                    }
                }
            }
        }
    }
}

fn geometry_rows() -> Vec<(&'static str, String)> {
    let positioned =
        StaticElement::new(12.0, 24.0, 48.0, 160.0).with_parent(StaticElement::new(
            6.0, 8.0, 400.0, 640.0,
        ));
    let unparented = StaticElement::new(12.0, 24.0, 48.0, 160.0);
    let flush = StaticElement::new(0.0, 0.0, 48.0, 160.0)
        .with_parent(StaticElement::new(0.0, 0.0, 400.0, 640.0));
    let catalog_root = StaticElement::new(4.0, 4.0, 800.0, 1280.0);

    vec![
        (
            "positioned child",
            describe_rect(resolve_bounding_rect(Some(&positioned), None)),
        ),
        (
            "fallback to the catalog root",
            describe_rect(resolve_bounding_rect(Some(&unparented), Some(&catalog_root))),
        ),
        (
            "flush against the origin",
            describe_rect(resolve_bounding_rect(Some(&flush), None)),
        ),
        (
            "nothing to measure",
            describe_rect(resolve_bounding_rect(None, Some(&catalog_root))),
        ),
    ]
}

fn describe_rect(rect: Option<BoundingRect>) -> String {
    match rect {
        Some(rect) => format!(
            "top {} left {} size {}x{} (bottom {}, right {})",
            rect.top, rect.left, rect.width, rect.height, rect.bottom, rect.right
        ),
        None => "no measurable box".to_string(),
    }
}

fn navigation_demo() -> Element {
    // Same load-or-default as the binary; render functions take no props,
    // so the demo reads the config itself.
    let tracking = match Config::load() {
        Ok(Some(config)) => config.tracking,
        _ => Tracking::default(),
    };

    rsx! {
        NavigationDemo { tracking }
    }
}

#[component]
fn NavigationDemo(tracking: Tracking) -> Element {
    let note = if tracking.enabled {
        format!(
            "Outbound links carry the catalog's tracking source ({}).",
            tracking.source
        )
    } else {
        "Outbound link tracking is disabled; links pass through unchanged.".to_string()
    };
    let rows = navigation_rows(&tracking);

    rsx! {
        section { class: "demo-column",
            p { class: "demo-note", "{note}" }
            table { class: "demo-table",
                thead {
                    tr {
                        th { "Link" }
                        th { "Decorated" }
                    }
                }
                tbody {
                    for (link, outcome) in rows {
                        tr { key: "{link}",
                            td { code { "{link}" } }
                            td { code { "{outcome}" } }
                        }
                    }
                }
            }
        }
    }
}

/// Query-string source backed by the catalog's tracking settings.
struct TrackingSource {
    tracking: Tracking,
}

impl QueryStringSource for TrackingSource {
    fn query_string(&self, _url: &Url) -> String {
        format!("source={}", self.tracking.source)
    }
}

const SAMPLE_LINKS: &[&str] = &[
    "https://example.com",
    "https://example.com/docs?page=2",
    "not a url",
];

fn navigation_rows(tracking: &Tracking) -> Vec<(&'static str, String)> {
    let source = TrackingSource {
        tracking: tracking.clone(),
    };

    SAMPLE_LINKS
        .iter()
        .map(|link| {
            let outcome = if tracking.enabled {
                match decorate_navigation_url(link, &source) {
                    Ok(decorated) => decorated,
                    Err(e) => format!("rejected: {e}"),
                }
            } else {
                (*link).to_string()
            };
            (*link, outcome)
        })
        .collect()
}
