use super::demos::{self, DemoEntry};
use atrium_config::Config;
use dioxus::prelude::*;

const CATALOG_CSS: &str = include_str!("../assets/catalog.css");

/// Catalog shell: the demo list in a sidebar, the selected demo on a stage.
#[component]
pub fn App(config: Config) -> Element {
    let entries = demos::all();
    let mut selected = use_signal(|| 0usize);

    let index = (*selected.read()).min(entries.len().saturating_sub(1));
    let entry: &DemoEntry = &entries[index];
    let shell_class = format!("app-container {}", config.theme.class());

    rsx! {
        style { {CATALOG_CSS} }
        div { class: "{shell_class}",
            nav { class: "sidebar",
                h2 { class: "sidebar-title", "Components" }
                ul { class: "demo-list",
                    for (demo_index, demo) in entries.iter().enumerate() {
                        li { key: "{demo.name}",
                            button {
                                class: if demo_index == index { "demo-link active" } else { "demo-link" },
                                onclick: move |_| selected.set(demo_index),
                                "{demo.name}"
                            }
                        }
                    }
                }
            }
            main { class: "main-content",
                header { class: "demo-header",
                    h1 { class: "demo-title", "{entry.name}" }
                    p { class: "demo-summary", "{entry.summary}" }
                }
                section { class: "demo-stage", {(entry.render)()} }
            }
        }
    }
}
