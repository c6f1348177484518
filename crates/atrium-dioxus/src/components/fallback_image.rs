use dioxus::prelude::*;

/// Which of a [`FallbackImage`]'s two sources is showing.
///
/// A load error moves it to the fallback, and the fallback absorbs any
/// further errors, so the swap can only ever happen once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSource {
    Primary,
    Fallback,
}

impl ImageSource {
    fn pick<'a>(self, src: &'a str, fallback_src: &'a str) -> &'a str {
        match self {
            ImageSource::Primary => src,
            ImageSource::Fallback => fallback_src,
        }
    }

    fn after_error(self) -> ImageSource {
        ImageSource::Fallback
    }
}

/// `img` that swaps to a stand-in source after a load error.
///
/// The swap happens once. A fallback that also fails to load is left alone
/// so the error handler cannot loop.
#[component]
pub fn FallbackImage(
    src: String,
    fallback_src: String,
    #[props(default)] alt: String,
) -> Element {
    let mut source = use_signal(|| ImageSource::Primary);

    let shown = source().pick(&src, &fallback_src).to_string();

    rsx! {
        img {
            class: "atrium-image",
            src: "{shown}",
            alt: "{alt}",
            onerror: move |_| {
                let current = source();
                let next = current.after_error();
                if next != current {
                    log::info!("Image source failed to load, switching to fallback");
                    source.set(next);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_fallback_image_starts_on_the_primary_source() {
        let mut dom = VirtualDom::new_with_props(
            FallbackImage,
            FallbackImageProps {
                src: "https://cdn.example.com/hero.png".to_string(),
                fallback_src: "https://cdn.example.com/placeholder.png".to_string(),
                alt: "Hero artwork".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("https://cdn.example.com/hero.png"));
        assert!(!html.contains("placeholder.png"));
        assert!(html.contains(r#"alt="Hero artwork""#));
    }

    #[test]
    fn test_error_swaps_to_the_fallback_exactly_once() {
        let mut source = ImageSource::Primary;
        assert_eq!(source.pick("hero.png", "placeholder.png"), "hero.png");

        source = source.after_error();
        assert_eq!(source.pick("hero.png", "placeholder.png"), "placeholder.png");

        source = source.after_error();
        assert_eq!(source, ImageSource::Fallback);
        assert_eq!(source.pick("hero.png", "placeholder.png"), "placeholder.png");
    }
}
