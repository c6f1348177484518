use atrium_core::text::WordRotation;
use dioxus::prelude::*;
use std::time::Duration;

/// Cycles through a list of words on a fixed interval.
///
/// The rotation itself lives in [`WordRotation`]; this component owns the
/// timer. With fewer than two words (or a zero interval) nothing is
/// scheduled and the first word, if any, stays put.
#[component]
pub fn AnimatedText(
    words: Vec<String>,
    #[props(default = 2000)] interval_ms: u64,
) -> Element {
    let mut rotation = use_signal(move || WordRotation::new(words));

    use_future(move || async move {
        if rotation.read().len() < 2 || interval_ms == 0 {
            return;
        }
        loop {
            tokio::time::sleep(Duration::from_millis(interval_ms)).await;
            rotation.write().advance();
        }
    });

    let current = rotation.read().current().map(str::to_string);

    rsx! {
        span { class: "atrium-animated-text",
            if let Some(word) = current {
                span { class: "animated-word", "{word}" }
            }
        }
    }
}
