//! # Onboarding carousel
//!
//! `OnboardingCarousel` owns the cards and all reactive state of the first-run
//! screen. The host forwards pager callbacks to it:
//!
//! - `on_scroll(x)` on every offset change while dragging or decelerating.
//!   Updates the background cross-fade and the page indicator.
//! - `on_settle(x)` once scrolling stops. Fades the overlay of the settled
//!   page in and every other overlay out.
//! - `on_indicator_select(k)` when a dot is tapped. Moves to page `k` exactly
//!   as settling there would and returns the offset the pager now shows.
//! - `skip()` / `trigger_action()` end the flow by firing `Finished` once.
//!
//! The indicator follows the finger while the overlay only changes on settle,
//! so the two may disagree for the duration of a drag.

use std::cell::RefCell;
use std::rc::Rc;

use firstrun_core::*;

use crate::card::{ActionId, CardDefinition, ImageCatalog, resolve_cards};
use crate::config::CarouselConfig;
use crate::overlay::OverlayFader;
use crate::pager::{BackgroundFade, page_offset, resolve_page, scroll_fraction};
use crate::typography::Typography;
use crate::CarouselError;

/// Emitted once when the user leaves onboarding.
#[derive(Clone, Debug, PartialEq)]
pub struct Finished {
    /// True when the final card's call-to-action was tapped.
    pub request_action: bool,
    pub action: Option<ActionId>,
}

/// Result of a continuous scroll update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub background: Color,
    pub indicator_page: usize,
}

/// Snapshot of the carousel's logical state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    pub card_count: usize,
    pub active_index: usize,
    pub scroll_fraction: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    Scrolled(f32),
    Settled(f32),
    IndicatorSelected(usize),
    Skip,
    Action,
    FontScaleChanged(f32),
}

pub type FinishedCallback = Rc<dyn Fn(&Finished)>;

pub struct OnboardingCarousel {
    cards: Vec<CardDefinition>,
    config: CarouselConfig,
    fade: BackgroundFade,
    page_width: f32,
    offset: f32,
    overlays: OverlayFader,
    typography: Typography,
    clock: SharedClock,

    active_index: Signal<usize>,
    indicator_page: Signal<usize>,
    background: Signal<Color>,

    finished: bool,
    on_finished: Option<FinishedCallback>,
}

impl std::fmt::Debug for OnboardingCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingCarousel")
            .field("cards", &self.cards.len())
            .field("page_width", &self.page_width)
            .field("offset", &self.offset)
            .field("active_index", &self.active_index.get())
            .field("indicator_page", &self.indicator_page.get())
            .field("background", &self.background.get())
            .field("overlays", &self.overlays.alphas())
            .field("finished", &self.finished)
            .finish()
    }
}

impl OnboardingCarousel {
    /// Builds the carousel. Cards whose image is missing from `images` are
    /// dropped; if none remain this fails with `CarouselError::NoCards`.
    pub fn new(
        cards: Vec<CardDefinition>,
        images: &dyn ImageCatalog,
        config: CarouselConfig,
        page_width: f32,
        clock: SharedClock,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        validate_page_width(page_width)?;
        let cards = resolve_cards(cards, images);
        if cards.is_empty() {
            return Err(CarouselError::NoCards);
        }
        log::debug!("onboarding carousel with {} cards", cards.len());

        let fade = BackgroundFade::new(config.start_color, config.end_color);
        let overlays = OverlayFader::new(cards.len(), 0, config.fade_spec());
        let typography = config.typography;
        Ok(Self {
            cards,
            fade,
            page_width,
            offset: 0.0,
            overlays,
            typography,
            clock,
            active_index: signal(0),
            indicator_page: signal(0),
            background: signal(config.start_color),
            finished: false,
            on_finished: None,
            config,
        })
    }

    pub fn set_on_finished(&mut self, f: impl Fn(&Finished) + 'static) {
        self.on_finished = Some(Rc::new(f));
    }

    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn active_index(&self) -> usize {
        self.active_index.get()
    }

    pub fn indicator_page(&self) -> usize {
        self.indicator_page.get()
    }

    pub fn background(&self) -> Color {
        self.background.get()
    }

    pub fn typography(&self) -> Typography {
        self.typography
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Observable active card index.
    pub fn active_signal(&self) -> Signal<usize> {
        self.active_index.clone()
    }

    /// Observable page-indicator value.
    pub fn indicator_signal(&self) -> Signal<usize> {
        self.indicator_page.clone()
    }

    /// Observable background color.
    pub fn background_signal(&self) -> Signal<Color> {
        self.background.clone()
    }

    pub fn overlay_alpha(&self, index: usize) -> f32 {
        self.overlays.alpha(index)
    }

    pub fn overlay_alphas(&self) -> Vec<f32> {
        self.overlays.alphas()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            card_count: self.cards.len(),
            active_index: self.active_index.get(),
            scroll_fraction: scroll_fraction(self.offset, self.page_width).unwrap_or(0.0),
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.active_index.get() + 1 == self.cards.len()
    }

    /// Viewport width changed (rotation, split view). The offset is rescaled
    /// so the same page stays in view.
    pub fn set_page_width(&mut self, page_width: f32) -> Result<(), CarouselError> {
        validate_page_width(page_width)?;
        self.offset = self.offset / self.page_width * page_width;
        self.page_width = page_width;
        Ok(())
    }

    /// Continuous scroll update. Returns `None` for non-finite offsets.
    pub fn on_scroll(&mut self, x: f32) -> Option<ScrollUpdate> {
        let background = self.fade.color_at(x, self.page_width)?;
        self.offset = x;
        self.background.set_if_changed(background);
        if let Some(page) = resolve_page(x, self.page_width, self.cards.len()) {
            self.indicator_page.set_if_changed(page);
        }
        log::trace!("scroll x={x} background={background:?}");
        Some(ScrollUpdate {
            background,
            indicator_page: self.indicator_page.get(),
        })
    }

    /// Scrolling stopped at `x`. Returns the newly activated index if a
    /// cross-fade was started.
    pub fn on_settle(&mut self, x: f32) -> Option<usize> {
        self.on_scroll(x)?;
        let page = resolve_page(x, self.page_width, self.cards.len())?;
        self.activate(page)
    }

    /// Indicator dot `page` tapped. Applies the offset of `page` (background,
    /// indicator) and activates it; returns that offset, or `None` if `page`
    /// does not exist.
    pub fn on_indicator_select(&mut self, page: usize) -> Option<f32> {
        if page >= self.cards.len() {
            return None;
        }
        let target = page_offset(page, self.page_width);
        self.on_scroll(target)?;
        self.activate(page);
        Some(target)
    }

    fn activate(&mut self, page: usize) -> Option<usize> {
        if page == self.active_index.get() && self.overlays.is_shown(page) {
            return None;
        }
        log::debug!("activating card {page} of {}", self.cards.len());
        self.overlays.show(page, self.clock.now());
        self.active_index.set_if_changed(page);
        Some(page)
    }

    /// Advance overlay fades. True while any is still running.
    pub fn tick(&mut self) -> bool {
        self.overlays.update(self.clock.now())
    }

    pub fn is_animating(&self) -> bool {
        self.overlays.is_animating()
    }

    /// Content-size scale reported by the platform. Invalid scales are ignored.
    pub fn on_font_scale_changed(&mut self, scale: f32) -> bool {
        match self.config.typography.scaled(scale) {
            Some(t) => {
                log::debug!("font scale {scale} -> {t:?}");
                self.typography = t;
                true
            }
            None => {
                log::warn!("ignoring invalid font scale {scale}");
                false
            }
        }
    }

    /// Skip (or Done on the final card). Fires `Finished` without an action.
    pub fn skip(&mut self) -> bool {
        self.finish(false, None)
    }

    /// Final card's call-to-action. Ignored unless the final card is active
    /// and defines an action.
    pub fn trigger_action(&mut self) -> bool {
        if !self.is_last_page() {
            return false;
        }
        let Some(card) = self.cards.last() else {
            return false;
        };
        if !card.has_action() {
            return false;
        }
        let action = card.action_id.clone();
        self.finish(true, action)
    }

    fn finish(&mut self, request_action: bool, action: Option<ActionId>) -> bool {
        if self.finished {
            return false;
        }
        self.finished = true;
        let event = Finished {
            request_action,
            action,
        };
        log::info!("onboarding finished: {event:?}");
        if let Some(cb) = &self.on_finished {
            cb(&event);
        }
        true
    }

    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Scrolled(x) => {
                self.on_scroll(x);
            }
            CarouselEvent::Settled(x) => {
                self.on_settle(x);
            }
            CarouselEvent::IndicatorSelected(k) => {
                self.on_indicator_select(k);
            }
            CarouselEvent::Skip => {
                self.skip();
            }
            CarouselEvent::Action => {
                self.trigger_action();
            }
            CarouselEvent::FontScaleChanged(s) => {
                self.on_font_scale_changed(s);
            }
        }
    }
}

fn validate_page_width(w: f32) -> Result<(), CarouselError> {
    if w.is_finite() && w > 0.0 {
        Ok(())
    } else {
        Err(CarouselError::InvalidPageWidth(w))
    }
}

/// Carousel shared with view callbacks.
pub type SharedCarousel = Rc<RefCell<OnboardingCarousel>>;

pub fn shared(carousel: OnboardingCarousel) -> SharedCarousel {
    Rc::new(RefCell::new(carousel))
}
