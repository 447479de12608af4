//! Scroll-offset math for a horizontal pager.
//!
//! Everything here is a pure function of the offset `x` and the page width
//! `w`; the carousel decides what to do with the answers.

use firstrun_core::Color;

/// `floor(x / w)` if it names one of `page_count` pages.
///
/// Overscroll (negative or past the last page), non-finite input and
/// `w <= 0` all yield `None`, which callers treat as "no change".
pub fn resolve_page(x: f32, page_width: f32, page_count: usize) -> Option<usize> {
    if !x.is_finite() || !page_width.is_finite() || page_width <= 0.0 {
        return None;
    }
    let page = (x / page_width).floor();
    if page < 0.0 || page >= page_count as f32 {
        return None;
    }
    Some(page as usize)
}

/// Progress through the first page transition, `clamp(x / w, 0, 1)`.
pub fn scroll_fraction(x: f32, page_width: f32) -> Option<f32> {
    if !x.is_finite() || !page_width.is_finite() || page_width <= 0.0 {
        return None;
    }
    Some((x / page_width).clamp(0.0, 1.0))
}

/// Offset that shows `page` flush with the viewport.
pub fn page_offset(page: usize, page_width: f32) -> f32 {
    page as f32 * page_width
}

/// Background cross-fade between two fixed colors over the first page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundFade {
    pub start: Color,
    pub end: Color,
}

impl BackgroundFade {
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    pub fn color_at(&self, x: f32, page_width: f32) -> Option<Color> {
        scroll_fraction(x, page_width).map(|t| self.start.lerp(self.end, t))
    }
}
