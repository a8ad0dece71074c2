use std::rc::Rc;

use yew::prelude::*;

use crate::overlay::OVERLAY_DURATION_MS;

/// Length of the card zoom animation, both ways.
pub const CARD_DURATION_MS: u32 = 300;
pub const ZOOM_SCALE: f64 = 1.4;
pub const ZOOM_Z_INDEX: i32 = 1000;

/// Bounding box of a card in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for CardRect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
    pub z_index: i32,
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        z_index: 0,
    };

    /// Offset and scale that put `rect` in the middle of a
    /// `viewport_width` x `viewport_height` window.
    pub fn centering(rect: CardRect, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            dx: (viewport_width - rect.width) / 2.0 - rect.left,
            dy: (viewport_height - rect.height) / 2.0 - rect.top,
            scale: ZOOM_SCALE,
            z_index: ZOOM_Z_INDEX,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) scale({}); z-index: {};",
            self.dx, self.dy, self.scale, self.z_index
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomPhase {
    Idle,
    ZoomingIn(ZoomTransform),
    Zoomed(ZoomTransform),
    ZoomingOut,
}

pub enum ZoomAction {
    /// Card clicked, animate towards `ZoomTransform`.
    Start(ZoomTransform),
    /// Zoom-in animation finished.
    Settle,
    /// Pointer pressed somewhere, head back.
    Release,
    /// Zoom-out animation finished.
    Restore,
}

/// Zoom state of a single example card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    pub phase: ZoomPhase,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            phase: ZoomPhase::Idle,
        }
    }
}

impl ZoomState {
    /// True from the click until the card is fully back in place.
    pub fn is_modified(&self) -> bool {
        !matches!(self.phase, ZoomPhase::Idle)
    }

    /// Actions that don't fit the current phase leave the state as is.
    pub fn apply(self, action: ZoomAction) -> Self {
        let phase = match (self.phase, action) {
            (ZoomPhase::Idle, ZoomAction::Start(target)) => ZoomPhase::ZoomingIn(target),
            (ZoomPhase::ZoomingIn(target), ZoomAction::Settle) => ZoomPhase::Zoomed(target),
            (ZoomPhase::ZoomingIn(_) | ZoomPhase::Zoomed(_), ZoomAction::Release) => {
                ZoomPhase::ZoomingOut
            }
            (ZoomPhase::ZoomingOut, ZoomAction::Restore) => ZoomPhase::Idle,
            (phase, _) => phase,
        };
        Self { phase }
    }

    pub fn transform(&self) -> ZoomTransform {
        match self.phase {
            ZoomPhase::ZoomingIn(target) | ZoomPhase::Zoomed(target) => target,
            // Stays above the overlay while it is still fading out.
            ZoomPhase::ZoomingOut => ZoomTransform {
                z_index: ZOOM_Z_INDEX,
                ..ZoomTransform::IDENTITY
            },
            ZoomPhase::Idle => ZoomTransform::IDENTITY,
        }
    }

    /// Inline style for the card element.
    pub fn card_style(&self) -> String {
        let mut transition = format!("transform {}ms ease", CARD_DURATION_MS);
        if self.phase == ZoomPhase::Idle {
            // The overlay fade outlasts the card animation, drop below it
            // only once the fade is over.
            transition.push_str(&format!(
                ", z-index 0s linear {}ms",
                OVERLAY_DURATION_MS.saturating_sub(CARD_DURATION_MS)
            ));
        }
        format!("{} transition: {};", self.transform().css(), transition)
    }
}

impl Reducible for ZoomState {
    type Action = ZoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            log::debug!("card zoom {:?} -> {:?}", self.phase, next.phase);
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardRect {
        CardRect {
            left: 100.0,
            top: 600.0,
            width: 300.0,
            height: 250.0,
        }
    }

    #[test]
    fn centering_moves_card_to_viewport_middle() {
        let transform = ZoomTransform::centering(card(), 1280.0, 800.0);
        assert_eq!(transform.dx, 390.0);
        assert_eq!(transform.dy, -325.0);
        assert_eq!(transform.scale, ZOOM_SCALE);
        assert_eq!(transform.z_index, ZOOM_Z_INDEX);
    }

    #[test]
    fn round_trip_returns_to_identity() {
        let target = ZoomTransform::centering(card(), 1280.0, 800.0);
        let state = ZoomState::default();
        assert!(!state.is_modified());

        let state = state.apply(ZoomAction::Start(target));
        assert_eq!(state.phase, ZoomPhase::ZoomingIn(target));
        assert!(state.is_modified());

        let state = state.apply(ZoomAction::Settle);
        assert_eq!(state.phase, ZoomPhase::Zoomed(target));
        assert_eq!(state.transform(), target);

        let state = state.apply(ZoomAction::Release);
        assert_eq!(state.phase, ZoomPhase::ZoomingOut);
        assert_eq!(state.transform().scale, 1.0);
        assert_eq!((state.transform().dx, state.transform().dy), (0.0, 0.0));
        assert!(state.is_modified(), "stays modified until the animation ends");

        let state = state.apply(ZoomAction::Restore);
        assert_eq!(state, ZoomState::default());
    }

    #[test]
    fn clicking_a_zoomed_card_is_ignored() {
        let target = ZoomTransform::centering(card(), 1280.0, 800.0);
        let zoomed = ZoomState::default()
            .apply(ZoomAction::Start(target))
            .apply(ZoomAction::Settle);

        let other = ZoomTransform::centering(card(), 400.0, 400.0);
        assert_eq!(zoomed.apply(ZoomAction::Start(other)), zoomed);

        let leaving = zoomed.apply(ZoomAction::Release);
        assert_eq!(leaving.apply(ZoomAction::Start(other)), leaving);
    }

    #[test]
    fn release_during_zoom_in_heads_straight_back() {
        let target = ZoomTransform::centering(card(), 1280.0, 800.0);
        let state = ZoomState::default()
            .apply(ZoomAction::Start(target))
            .apply(ZoomAction::Release);
        assert_eq!(state.phase, ZoomPhase::ZoomingOut);

        // The zoom-in timer firing late must not re-zoom the card.
        assert_eq!(state.apply(ZoomAction::Settle).phase, ZoomPhase::ZoomingOut);
    }

    #[test]
    fn stray_actions_leave_idle_alone() {
        let idle = ZoomState::default();
        assert_eq!(idle.apply(ZoomAction::Settle), idle);
        assert_eq!(idle.apply(ZoomAction::Release), idle);
        assert_eq!(idle.apply(ZoomAction::Restore), idle);
    }

    #[test]
    fn card_style_carries_transform_and_transition() {
        let style = ZoomState::default().card_style();
        assert_eq!(
            style,
            "transform: translate(0.0px, 0.0px) scale(1); z-index: 0; \
             transition: transform 300ms ease, z-index 0s linear 200ms;"
        );
    }

    #[test]
    fn zooming_out_card_stays_above_overlay() {
        let target = ZoomTransform::centering(card(), 1280.0, 800.0);
        let leaving = ZoomState::default()
            .apply(ZoomAction::Start(target))
            .apply(ZoomAction::Settle)
            .apply(ZoomAction::Release);

        assert_eq!(leaving.transform().z_index, ZOOM_Z_INDEX);
        assert!(leaving.card_style().starts_with(
            "transform: translate(0.0px, 0.0px) scale(1); z-index: 1000;"
        ));
    }

    #[test]
    fn zoom_in_raises_card_without_delay() {
        let target = ZoomTransform::centering(card(), 1280.0, 800.0);
        let style = ZoomState::default().apply(ZoomAction::Start(target)).card_style();
        assert!(style.contains("z-index: 1000;"));
        assert!(!style.contains("z-index 0s"));
    }
}
