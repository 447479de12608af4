//! # firstrun core
//!
//! Small building blocks shared by the onboarding UI:
//!
//! - `Color` with per-channel linear interpolation.
//! - `Signal<T>`: observable value a renderer can subscribe to.
//! - `AnimatedValue<T>`: a tween driven by an injectable `Clock`.
//! - `View` / `Modifier`: a declarative, renderer-agnostic view tree.
//!
//! ## Signals
//!
//! ```rust
//! use firstrun_core::*;
//!
//! let page = signal(0usize);
//! page.subscribe(|p| assert!(*p <= 2));
//! page.set(2);
//! assert_eq!(page.get(), 2);
//! ```
//!
//! ## Deterministic animation
//!
//! Animations never read a global clock. Callers pass `now` in, which lets
//! tests drive fades with a `TestClock`:
//!
//! ```rust
//! use firstrun_core::*;
//! use std::time::Duration;
//!
//! let clock = TestClock::new();
//! let mut alpha = AnimatedValue::new(0.0f32, AnimationSpec::fade());
//! alpha.set_target(1.0, clock.now());
//! clock.advance(Duration::from_millis(250));
//! assert!(!alpha.update(clock.now()));
//! assert_eq!(*alpha.get(), 1.0);
//! ```

pub mod animation;
pub mod color;
pub mod modifier;
pub mod prelude;
pub mod signal;
pub mod view;

pub use animation::*;
pub use color::*;
pub use modifier::*;
pub use signal::*;
pub use view::*;
