use crate::clipboard;
use dioxus::prelude::*;

/// Read-only value with a button that copies it to the system clipboard.
///
/// `on_copy` fires with the copied value once the clipboard accepted it.
/// When the clipboard is unavailable the failure is logged and the field
/// keeps rendering.
#[component]
pub fn CopyField(value: String, on_copy: Option<Callback<String>>) -> Element {
    let display_value = value.clone();

    rsx! {
        span { class: "atrium-copy",
            code { class: "copy-value", "{display_value}" }
            button {
                class: "copy-trigger",
                aria_label: "Copy to clipboard",
                onclick: move |_| match clipboard::copy_text(&value) {
                    Ok(()) => {
                        if let Some(on_copy) = on_copy {
                            on_copy.call(value.clone());
                        }
                    }
                    Err(e) => log::warn!("Clipboard copy failed: {e:#}"),
                },
                "Copy"
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
    fn test_copy_field_renders_value_and_trigger() {
        let mut dom = VirtualDom::new_with_props(
            CopyField,
            CopyFieldProps {
                value: "npm install @atrium/ui".to_string(),
                on_copy: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("npm install @atrium/ui"));
        assert!(html.contains("copy-trigger"));
        assert!(html.contains("Copy to clipboard"));
    }
}
