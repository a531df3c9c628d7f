//! Glossary tooltip placement and visibility.
//!
//! [`place`] decides where the tooltip bubble opens relative to its trigger
//! so it stays inside the viewport. [`TooltipState`] models the show/hide
//! debounce: leaving the trigger schedules a hide after a short grace period
//! so the pointer can travel onto the bubble, and re-entering cancels it.
//!
//! The browser script (`static/site.js`) implements the same rules, reading
//! the geometry from the `data-tooltip-*` attributes the generator writes
//! from [`TooltipConfig`].

use crate::config::TooltipConfig;
use serde::Serialize;

/// A trigger element's bounding box in viewport coordinates (CSS px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizontal {
    Center,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Placement {
    /// CSS classes applied to the bubble, e.g. `tooltip--top tooltip--center`.
    pub fn classes(self) -> String {
        let v = match self.vertical {
            Vertical::Top => "top",
            Vertical::Bottom => "bottom",
        };
        let h = match self.horizontal {
            Horizontal::Center => "center",
            Horizontal::Left => "left",
            Horizontal::Right => "right",
        };
        format!("tooltip--{v} tooltip--{h}")
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            vertical: Vertical::Top,
            horizontal: Horizontal::Center,
        }
    }
}

/// Choose where to open a tooltip for a trigger.
///
/// Opens below the trigger when there is less than `flip_threshold` px above
/// it. Horizontally the bubble is centred on the trigger unless that would
/// come within `padding` px of a viewport edge, in which case it is aligned
/// to the trigger's left or right edge instead.
pub fn place(trigger: Rect, viewport_width: f64, geometry: &TooltipConfig) -> Placement {
    let vertical = if trigger.top < geometry.flip_threshold {
        Vertical::Bottom
    } else {
        Vertical::Top
    };

    let center = trigger.left + trigger.width / 2.0;
    let half = geometry.width / 2.0;
    let horizontal = if center - half < geometry.padding {
        Horizontal::Left
    } else if center + half > viewport_width - geometry.padding {
        Horizontal::Right
    } else {
        Horizontal::Center
    };

    Placement {
        vertical,
        horizontal,
    }
}

/// Visibility of one tooltip, driven by pointer, focus and touch events.
///
/// Time is passed in explicitly as milliseconds so the state is a pure value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipState {
    visible: bool,
    hide_at: Option<u64>,
    hide_delay_ms: u64,
}

impl TooltipState {
    pub fn new(hide_delay_ms: u64) -> Self {
        Self {
            visible: false,
            hide_at: None,
            hide_delay_ms,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A hide is scheduled and has not yet been applied.
    pub fn hide_pending(&self) -> bool {
        self.hide_at.is_some()
    }

    /// Pointer entered or trigger focused. Cancels a pending hide.
    pub fn show(&mut self) {
        self.hide_at = None;
        self.visible = true;
    }

    /// Pointer left or trigger blurred. Hides after the grace period.
    pub fn request_hide(&mut self, now_ms: u64) {
        if self.visible {
            self.hide_at = Some(now_ms + self.hide_delay_ms);
        }
    }

    /// Apply a scheduled hide if it is due. Returns true when visibility changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.hide_at {
            Some(deadline) if now_ms >= deadline => {
                self.hide_at = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Click or tap on the trigger.
    pub fn toggle(&mut self) {
        self.hide_at = None;
        self.visible = !self.visible;
    }

    /// Click or tap outside the tooltip.
    pub fn dismiss(&mut self) {
        self.hide_at = None;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1024.0;

    fn rect(left: f64, top: f64) -> Rect {
        Rect {
            left,
            top,
            width: 80.0,
            height: 20.0,
        }
    }

    fn geometry() -> TooltipConfig {
        TooltipConfig::default()
    }

    #[test]
    fn opens_above_with_room() {
        let p = place(rect(400.0, 300.0), VIEWPORT, &geometry());
        assert_eq!(p.vertical, Vertical::Top);
        assert_eq!(p.horizontal, Horizontal::Center);
    }

    #[test]
    fn flips_below_near_top() {
        let p = place(rect(400.0, 40.0), VIEWPORT, &geometry());
        assert_eq!(p.vertical, Vertical::Bottom);
    }

    #[test]
    fn flip_threshold_boundary() {
        let g = geometry();
        for top in [0.0, 60.0, 119.0, 119.999] {
            assert_eq!(place(rect(400.0, top), VIEWPORT, &g).vertical, Vertical::Bottom);
        }
        for top in [120.0, 120.5, 500.0, 5000.0] {
            assert_eq!(place(rect(400.0, top), VIEWPORT, &g).vertical, Vertical::Top);
        }
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut g = geometry();
        g.flip_threshold = 200.0;
        assert_eq!(place(rect(400.0, 150.0), VIEWPORT, &g).vertical, Vertical::Bottom);
    }

    #[test]
    fn aligns_left_near_left_edge() {
        // center = 10 + 40 = 50; 50 - 128 < 16
        let p = place(rect(10.0, 300.0), VIEWPORT, &geometry());
        assert_eq!(p.horizontal, Horizontal::Left);
    }

    #[test]
    fn aligns_right_near_right_edge() {
        // center = 950 + 40 = 990; 990 + 128 > 1008
        let p = place(rect(950.0, 300.0), VIEWPORT, &geometry());
        assert_eq!(p.horizontal, Horizontal::Right);
    }

    #[test]
    fn narrow_viewport_prefers_left() {
        // Both edges overflow on a 200px viewport; left wins.
        let p = place(rect(60.0, 300.0), 200.0, &geometry());
        assert_eq!(p.horizontal, Horizontal::Left);
    }

    #[test]
    fn placement_classes() {
        let p = Placement {
            vertical: Vertical::Bottom,
            horizontal: Horizontal::Right,
        };
        assert_eq!(p.classes(), "tooltip--bottom tooltip--right");
        assert_eq!(Placement::default().classes(), "tooltip--top tooltip--center");
    }

    // =========================================================================
    // Visibility / debounce
    // =========================================================================

    #[test]
    fn hide_waits_for_delay() {
        let mut s = TooltipState::new(150);
        s.show();
        s.request_hide(1_000);
        assert!(s.is_visible());
        assert!(!s.tick(1_149));
        assert!(s.is_visible());
        assert!(s.tick(1_150));
        assert!(!s.is_visible());
    }

    #[test]
    fn reentry_cancels_pending_hide() {
        let mut s = TooltipState::new(150);
        s.show();
        s.request_hide(1_000);
        s.show();
        assert!(!s.hide_pending());
        assert!(!s.tick(5_000));
        assert!(s.is_visible());
    }

    #[test]
    fn request_hide_when_hidden_is_noop() {
        let mut s = TooltipState::new(150);
        s.request_hide(0);
        assert!(!s.hide_pending());
    }

    #[test]
    fn toggle_and_dismiss() {
        let mut s = TooltipState::new(150);
        s.toggle();
        assert!(s.is_visible());
        s.toggle();
        assert!(!s.is_visible());
        s.show();
        s.request_hide(10);
        s.dismiss();
        assert!(!s.is_visible());
        assert!(!s.hide_pending());
    }
}
