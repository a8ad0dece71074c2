use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Width where the medium layout starts, in CSS pixels.
pub const MEDIUM_MIN_WIDTH: f64 = 768.0;
/// Width where the wide layout starts, in CSS pixels.
pub const WIDE_MIN_WIDTH: f64 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportTier {
    Narrow,
    Medium,
    Wide,
}

impl ViewportTier {
    pub fn from_width(width: f64) -> Self {
        if width >= WIDE_MIN_WIDTH {
            ViewportTier::Wide
        } else if width >= MEDIUM_MIN_WIDTH {
            ViewportTier::Medium
        } else {
            ViewportTier::Narrow
        }
    }
}

/// Current inner size of the browser window.
pub fn current_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn current_tier() -> ViewportTier {
    current_size()
        .map(|(width, _)| ViewportTier::from_width(width))
        .unwrap_or(ViewportTier::Wide)
}

/// Tracks the window width tier, re-evaluated on every resize event.
#[hook]
pub fn use_viewport_tier() -> ViewportTier {
    let tier = use_state_eq(current_tier);

    {
        let tier = tier.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let mut last = *tier;
                let resize_callback = Closure::wrap(Box::new(move || {
                    let next = current_tier();
                    if next != last {
                        debug!("viewport tier changed to {:?}", next);
                        last = next;
                        tier.set(next);
                    }
                }) as Box<dyn FnMut()>);

                if let Err(err) = window.add_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                ) {
                    log::warn!("could not listen for resize: {:?}", err);
                }
                (window, resize_callback)
            });

            move || {
                if let Some((window, resize_callback)) = listener {
                    if let Err(err) = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("could not stop listening for resize: {:?}", err);
                    }
                }
            }
        }, ());
    }

    *tier
}

/// How the example cards are arranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamplesLayout {
    /// Two cards side by side with the rest centred below.
    TwoThenOne,
    /// One uniform grid, column count left to the stylesheet.
    Grid,
}

impl ExamplesLayout {
    pub fn for_tier(tier: ViewportTier) -> Self {
        match tier {
            ViewportTier::Medium => ExamplesLayout::TwoThenOne,
            ViewportTier::Narrow | ViewportTier::Wide => ExamplesLayout::Grid,
        }
    }

    /// Splits `items` into the rows this layout renders. Every item lands
    /// in exactly one row.
    pub fn rows<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        match self {
            ExamplesLayout::TwoThenOne => {
                let (top, rest) = items.split_at(items.len().min(2));
                [top, rest].into_iter().filter(|row| !row.is_empty()).collect()
            }
            ExamplesLayout::Grid => vec![items],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_at_breakpoints() {
        assert_eq!(ViewportTier::from_width(375.0), ViewportTier::Narrow);
        assert_eq!(ViewportTier::from_width(767.9), ViewportTier::Narrow);
        assert_eq!(ViewportTier::from_width(768.0), ViewportTier::Medium);
        assert_eq!(ViewportTier::from_width(1023.0), ViewportTier::Medium);
        assert_eq!(ViewportTier::from_width(1024.0), ViewportTier::Wide);
    }

    #[test]
    fn only_medium_uses_two_then_one() {
        assert_eq!(ExamplesLayout::for_tier(ViewportTier::Narrow), ExamplesLayout::Grid);
        assert_eq!(ExamplesLayout::for_tier(ViewportTier::Medium), ExamplesLayout::TwoThenOne);
        assert_eq!(ExamplesLayout::for_tier(ViewportTier::Wide), ExamplesLayout::Grid);
    }

    #[test]
    fn resize_from_1000_to_1300_switches_to_grid_and_keeps_all_cards() {
        let cards = ["homepage", "ecommerce", "ai"];

        let before = ExamplesLayout::for_tier(ViewportTier::from_width(1000.0));
        let rows = before.rows(&cards);
        assert_eq!(before, ExamplesLayout::TwoThenOne);
        assert_eq!(rows, vec![&cards[..2], &cards[2..]]);

        let after = ExamplesLayout::for_tier(ViewportTier::from_width(1300.0));
        let rows = after.rows(&cards);
        assert_eq!(after, ExamplesLayout::Grid);
        assert_eq!(rows.iter().map(|row| row.len()).sum::<usize>(), 3);
    }

    #[test]
    fn two_then_one_handles_short_lists() {
        let one = ["only"];
        assert_eq!(ExamplesLayout::TwoThenOne.rows(&one), vec![&one[..]]);
        let none: [&str; 0] = [];
        assert!(ExamplesLayout::TwoThenOne.rows(&none).is_empty());
    }
}
