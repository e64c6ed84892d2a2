//! Platform-free core of the Otro Angulo landing hero.
//!
//! Nothing here touches the DOM; the web front-end feeds events in and reads
//! a [`FrameOutput`] back once per animation frame.

pub mod catalog;
pub mod constants;
pub mod content;
pub mod error;
pub mod input;
pub mod layout;
pub mod model;
pub mod phase;
pub mod session;
pub mod spring;

pub use catalog::*;
pub use content::*;
pub use error::HeroError;
pub use input::*;
pub use layout::*;
pub use model::*;
pub use phase::*;
pub use session::*;
pub use spring::*;
