use dioxus::prelude::*;

/// One selectable pane of a [`Tabs`] strip.
#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub label: String,
    pub content: Element,
}

impl TabItem {
    pub fn new(label: impl Into<String>, content: Element) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }
}

/// Horizontal tab strip. Only the selected pane is rendered.
///
/// An out-of-range `initial` index is clamped to the last tab, and an empty
/// tab list renders an empty shell rather than panicking.
#[component]
pub fn Tabs(
    tabs: Vec<TabItem>,
    #[props(default)] initial: usize,
    on_change: Option<Callback<usize>>,
) -> Element {
    let tab_count = tabs.len();
    let mut selected = use_signal(move || initial.min(tab_count.saturating_sub(1)));

    rsx! {
        div { class: "atrium-tabs",
            div { class: "tab-strip", role: "tablist",
                for (index, tab) in tabs.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if index == *selected.read() { "tab-title active" } else { "tab-title" },
                        role: "tab",
                        onclick: move |_| {
                            selected.set(index);
                            if let Some(on_change) = on_change {
                                on_change.call(index);
                            }
                        },
                        "{tab.label}"
                    }
                }
            }
            for (index, tab) in tabs.iter().enumerate() {
                if index == *selected.read() {
                    div { key: "{index}", class: "tab-panel", role: "tabpanel", {tab.content.clone()} }
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

    fn three_tabs() -> Vec<TabItem> {
        vec![
            TabItem::new("Overview", rsx! { p { "overview pane" } }),
            TabItem::new("Usage", rsx! { p { "usage pane" } }),
            TabItem::new("Theming", rsx! { p { "theming pane" } }),
        ]
    }

    fn default_fixture() -> Element {
        rsx! {
            Tabs { tabs: three_tabs() }
        }
    }

    fn out_of_range_fixture() -> Element {
        rsx! {
            Tabs { tabs: three_tabs(), initial: 99 }
        }
    }

    fn empty_fixture() -> Element {
        rsx! {
            Tabs { tabs: Vec::new() }
        }
    }

    #[test]
    fn test_tabs_render_all_titles_but_only_the_selected_pane() {
        let mut dom = VirtualDom::new(default_fixture);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Overview"));
        assert!(html.contains("Usage"));
        assert!(html.contains("Theming"));
        assert!(html.contains("overview pane"));
        assert!(!html.contains("usage pane"));
        assert!(!html.contains("theming pane"));
    }

    #[test]
    fn test_out_of_range_initial_clamps_to_last_tab() {
        let mut dom = VirtualDom::new(out_of_range_fixture);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("theming pane"));
        assert!(!html.contains("overview pane"));
    }

    #[test]
    fn test_empty_tabs_render_an_empty_shell() {
        let mut dom = VirtualDom::new(empty_fixture);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("atrium-tabs"));
        assert!(!html.contains("tab-title"));
        assert!(!html.contains("tab-panel"));
    }
}
