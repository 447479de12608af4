pub use crate::animation::{
    AnimatedValue, AnimationSpec, Clock, Easing, Instant, Interpolate, SharedClock, SystemClock,
    TestClock,
};
pub use crate::color::{Color, ParseColorError};
pub use crate::modifier::{Alignment, Modifier};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Callback, CallbackF32, CallbackIndex, View, ViewId, ViewKind};
