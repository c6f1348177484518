use dioxus::events::MouseEvent;
use dioxus::prelude::*;

/// Visual weight of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "atrium-button primary",
            ButtonVariant::Secondary => "atrium-button secondary",
            ButtonVariant::Danger => "atrium-button danger",
        }
    }
}

/// Push button in one of the library's standard variants.
#[component]
pub fn Button(
    label: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Callback<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn primary_fixture() -> Element {
        rsx! {
            Button { label: "Deploy", onclick: move |_| {} }
        }
    }

    fn danger_disabled_fixture() -> Element {
        rsx! {
            Button {
                label: "Delete",
                variant: ButtonVariant::Danger,
                disabled: true,
                onclick: move |_| {},
            }
        }
    }

    #[test]
    fn test_button_renders_label_with_primary_variant_by_default() {
        let mut dom = VirtualDom::new(primary_fixture);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Deploy"));
        assert!(html.contains("atrium-button primary"));
    }

    #[test]
    fn test_button_renders_variant_class_and_disabled_state() {
        let mut dom = VirtualDom::new(danger_disabled_fixture);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("atrium-button danger"));
        assert!(html.contains("disabled"));
    }
}
