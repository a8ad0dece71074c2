use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::{self, DomError};

pub const OVERLAY_ID: &str = "blur-overlay";
pub const OVERLAY_DURATION_MS: u32 = 500;

const STATE_ATTR: &str = "data-state";
const STATE_OPEN: &str = "open";
const STATE_CLOSING: &str = "closing";

/// Whether a fade-out timer may remove the overlay. A card that opened
/// again while it was fading owns the node now.
fn removal_due(state: Option<&str>) -> bool {
    state == Some(STATE_CLOSING)
}

/// Visual state of the backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLook {
    pub blur_px: f64,
    pub darkness: f64,
    pub opacity: f64,
}

impl OverlayLook {
    pub const HIDDEN: OverlayLook = OverlayLook {
        blur_px: 0.0,
        darkness: 0.0,
        opacity: 0.0,
    };

    pub const SHOWN: OverlayLook = OverlayLook {
        blur_px: 10.0,
        darkness: 0.5,
        opacity: 1.0,
    };

    pub fn declarations(&self) -> [(&'static str, String); 3] {
        [
            ("backdrop-filter", format!("blur({}px)", self.blur_px)),
            ("background", format!("rgba(0, 0, 0, {})", self.darkness)),
            ("opacity", self.opacity.to_string()),
        ]
    }

    fn apply(&self, element: &HtmlElement) -> Result<(), DomError> {
        let style = element.style();
        for (property, value) in self.declarations() {
            style.set_property(property, &value)?;
        }
        Ok(())
    }
}

const BASE_STYLE: [(&str, &str); 4] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("pointer-events", "none"),
    ("z-index", "100"),
];

fn find() -> Result<Option<HtmlElement>, DomError> {
    Ok(error::document()?
        .get_element_by_id(OVERLAY_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

fn create() -> Result<HtmlElement, DomError> {
    let document = error::document()?;
    let overlay = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js("created overlay is not an HtmlElement".to_string()))?;
    overlay.set_id(OVERLAY_ID);

    let style = overlay.style();
    for (property, value) in BASE_STYLE {
        style.set_property(property, value)?;
    }
    style.set_property(
        "transition",
        &format!(
            "backdrop-filter {ms}ms ease, background {ms}ms ease, opacity {ms}ms ease",
            ms = OVERLAY_DURATION_MS
        ),
    )?;
    OverlayLook::HIDDEN.apply(&overlay)?;

    error::body()?.append_child(&overlay)?;
    debug!("blur overlay created");
    Ok(overlay)
}

/// Fades the page-wide overlay in, creating it on first use.
pub fn show() -> Result<(), DomError> {
    let overlay = match find()? {
        Some(overlay) => overlay,
        None => create()?,
    };
    overlay.set_attribute(STATE_ATTR, STATE_OPEN)?;

    // Flush the hidden look so the change below is animated.
    let _ = overlay.offset_width();
    OverlayLook::SHOWN.apply(&overlay)
}

/// Fades the overlay out and removes it once the fade is over.
///
/// Returns `false` when there was no overlay to hide.
pub fn hide() -> Result<bool, DomError> {
    let Some(overlay) = find()? else {
        return Ok(false);
    };
    overlay.set_attribute(STATE_ATTR, STATE_CLOSING)?;
    OverlayLook::HIDDEN.apply(&overlay)?;

    Timeout::new(OVERLAY_DURATION_MS, move || {
        if removal_due(overlay.get_attribute(STATE_ATTR).as_deref()) {
            overlay.remove();
            debug!("blur overlay removed");
        }
    })
    .forget();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_look_blurs_and_darkens() {
        let [blur, background, opacity] = OverlayLook::SHOWN.declarations();
        assert_eq!(blur, ("backdrop-filter", "blur(10px)".to_string()));
        assert_eq!(background, ("background", "rgba(0, 0, 0, 0.5)".to_string()));
        assert_eq!(opacity, ("opacity", "1".to_string()));
    }

    #[test]
    fn fade_out_removes_only_a_closing_overlay() {
        assert!(removal_due(Some(STATE_CLOSING)));
        assert!(!removal_due(Some(STATE_OPEN)), "reopened while fading");
        assert!(!removal_due(None));
    }

    #[test]
    fn hidden_look_is_fully_clear() {
        let values: Vec<String> = OverlayLook::HIDDEN
            .declarations()
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        assert_eq!(values, ["blur(0px)", "rgba(0, 0, 0, 0)", "0"]);
    }
}
