use dioxus::prelude::*;

/// Colour tone of a [`Chip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl ChipTone {
    fn class(self) -> &'static str {
        match self {
            ChipTone::Neutral => "atrium-chip neutral",
            ChipTone::Info => "atrium-chip info",
            ChipTone::Success => "atrium-chip success",
            ChipTone::Warning => "atrium-chip warning",
            ChipTone::Danger => "atrium-chip danger",
        }
    }
}

/// Small labelled token. Passing `on_delete` adds a dismiss affordance.
#[component]
pub fn Chip(
    label: String,
    #[props(default)] tone: ChipTone,
    on_delete: Option<Callback<()>>,
) -> Element {
    rsx! {
        span { class: tone.class(),
            span { class: "chip-label", "{label}" }
            if let Some(on_delete) = on_delete {
                button {
                    class: "chip-delete",
                    aria_label: "Dismiss {label}",
                    onclick: move |_| on_delete.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_chip_renders_label_with_tone_class() {
        let mut dom = VirtualDom::new_with_props(
            Chip,
            ChipProps {
                label: "NEW".to_string(),
                tone: ChipTone::Info,
                on_delete: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("NEW"));
        assert!(html.contains("atrium-chip info"));
    }

    #[test]
    fn test_plain_chip_has_no_dismiss_button() {
        let mut dom = VirtualDom::new_with_props(
            Chip,
            ChipProps {
                label: "beta".to_string(),
                tone: ChipTone::Neutral,
                on_delete: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(!html.contains("chip-delete"));
    }

    fn dismissable_fixture() -> Element {
        rsx! {
            Chip {
                label: "filter",
                tone: ChipTone::Success,
                on_delete: Some(Callback::new(|_: ()| {})),
            }
        }
    }

    #[test]
    fn test_dismissable_chip_renders_dismiss_button() {
        let mut dom = VirtualDom::new(dismissable_fixture);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("chip-delete"));
        assert!(html.contains("Dismiss filter"));
    }
}
