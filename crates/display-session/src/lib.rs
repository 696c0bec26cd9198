//! Display state of the viewer and the controller that drives it.
//!
//! [`DisplaySession`] owns the loaded image and the rendering options and
//! produces a [`renderer::DisplayBuffer`] on demand. [`ViewerController`]
//! turns user actions into session calls, fetches images through the
//! file-open and survey-search collaborators, and reports every failure as a
//! [`Notification`].

pub mod controller;
pub mod session;

pub use controller::{Notification, NotificationLevel, UiEvent, ViewerController};
pub use session::DisplaySession;
