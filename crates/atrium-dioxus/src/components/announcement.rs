use crate::components::chip::{Chip, ChipTone};
use dioxus::prelude::*;

/// Product announcement banner with a NEW chip, an optional learn-more link
/// and an optional dismiss affordance.
///
/// Persisting dismissals is the host's concern. The component only reports
/// the click through `on_dismiss`.
#[component]
pub fn Announcement(
    title: String,
    body: String,
    link_href: Option<String>,
    link_label: Option<String>,
    on_dismiss: Option<Callback<()>>,
) -> Element {
    rsx! {
        aside { class: "atrium-announcement",
            Chip { label: "NEW", tone: ChipTone::Info }
            div { class: "announcement-copy",
                strong { class: "announcement-title", "{title}" }
                p { class: "announcement-body", "{body}" }
                if let Some(ref href) = link_href {
                    a {
                        class: "announcement-link",
                        href: "{href}",
                        target: "_blank",
                        {link_label.clone().unwrap_or_else(|| "Learn more".to_string())}
                    }
                }
            }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    class: "announcement-dismiss",
                    aria_label: "Dismiss announcement",
                    onclick: move |_| on_dismiss.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}
