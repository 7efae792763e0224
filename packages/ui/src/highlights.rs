use std::time::Duration;

use dioxus::prelude::*;

/// Time each phrase stays highlighted.
pub const HIGHLIGHT_INTERVAL: Duration = Duration::from_secs(2);

/// Which of `len` phrases is highlighted. Advances in order and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.len > 0 && index == self.index
    }
}

async fn tick() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(HIGHLIGHT_INTERVAL).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(HIGHLIGHT_INTERVAL).await;
}

/// A rotation that advances every [`HIGHLIGHT_INTERVAL`] while the component is mounted.
pub fn use_rotation(len: usize) -> Signal<Rotation> {
    let mut rotation = use_signal(|| Rotation::new(len));

    use_future(move || async move {
        loop {
            tick().await;
            rotation.write().advance();
        }
    });

    rotation
}

/// Stacked phrases, one highlighted at a time, next to a fixed block of details.
#[component]
pub fn RotatingHighlights(
    phrases: Vec<String>,
    #[props(default = false)] reversed: bool,
    children: Element,
) -> Element {
    let rotation = use_rotation(phrases.len());
    let current = rotation();

    let phrase_list = rsx! {
        div {
            class: "statistics__content--header",
            for (i, phrase) in phrases.iter().enumerate() {
                div {
                    key: "{i}",
                    class: if current.is_highlighted(i) {
                        "statistics__heading statistics__heading--active"
                    } else {
                        "statistics__heading"
                    },
                    "{phrase}"
                }
            }
        }
    };

    let details = rsx! {
        div {
            class: if reversed {
                "statistics__content--details statistics__content--details-second"
            } else {
                "statistics__content--details"
            },
            {children}
        }
    };

    rsx! {
        div {
            class: "statistics__wrapper",
            if reversed {
                {details}
                {phrase_list}
            } else {
                {phrase_list}
                {details}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = Rotation::new(6);
        assert!(rotation.is_highlighted(0));

        for expected in [1, 2, 3, 4, 5, 0, 1] {
            rotation.advance();
            assert_eq!(rotation.index(), expected);
        }
        assert!(rotation.is_highlighted(1));
        assert!(!rotation.is_highlighted(0));
    }

    #[test]
    fn test_single_phrase_stays_highlighted() {
        let mut rotation = Rotation::new(1);
        rotation.advance();
        assert!(rotation.is_highlighted(0));
    }

    #[test]
    fn test_empty_rotation_highlights_nothing() {
        let mut rotation = Rotation::new(0);
        rotation.advance();
        assert_eq!(rotation.index(), 0);
        assert!(!rotation.is_highlighted(0));
    }
}
