//! First-run onboarding carousel.
//!
//! ```rust
//! use std::rc::Rc;
//! use firstrun_core::SystemClock;
//! use firstrun_ui::*;
//!
//! let cards = vec![
//!     CardDefinition::new("Welcome", "Fast, private browsing.", "welcome"),
//!     CardDefinition::new("Sync", "Your tabs, everywhere.", "sync")
//!         .with_action("Sign in", "sync.signin"),
//! ];
//! let carousel = OnboardingCarousel::new(
//!     cards,
//!     &AllImages,
//!     CarouselConfig::default(),
//!     390.0,
//!     Rc::new(SystemClock),
//! )
//! .unwrap();
//! let carousel = shared(carousel);
//! let view = OnboardingView(&carousel);
//! assert!(view.find(view::ids::PAGER).is_some());
//! ```

pub mod card;
pub mod carousel;
pub mod config;
pub mod error;
pub mod overlay;
pub mod pager;
pub mod typography;
pub mod view;
pub mod widgets;

pub use card::{ActionId, AllImages, CardDefinition, ImageCatalog, resolve_cards};
pub use carousel::{
    CarouselEvent, CarouselState, Finished, FinishedCallback, OnboardingCarousel, ScrollUpdate,
    SharedCarousel, shared,
};
pub use config::CarouselConfig;
pub use error::CarouselError;
pub use overlay::OverlayFader;
pub use pager::{BackgroundFade, page_offset, resolve_page, scroll_fraction};
pub use typography::Typography;
pub use view::OnboardingView;
