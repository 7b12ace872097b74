// SPDX-License-Identifier: MPL-2.0
//! Toast notifications grouped into six screen zones.
//!
//! A [`Manager`] owns the records of every zone and drives their lifecycle:
//! callers create toasts with [`Manager::notify`], close them explicitly or
//! let their countdown expire, and render them with [`Manager::view`].
//!
//! # Components
//!
//! - [`placement`] - The six zones and their string names
//! - [`notification`] - Toast records, ids, content and call options
//! - [`zone_store`] - Ordered per-zone records with change revisions
//! - [`timer`] - Pausable auto-dismiss countdown
//! - [`clock`] - Time source, real or manually advanced
//! - [`bridge`] - Rendered toasts reconciled from store snapshots
//! - [`manager`] - Public API and message handling
//! - [`toast`] - iced overlay rendering
//!
//! # Usage
//!
//! ```
//! use iced_toast::ui::notifications::{Manager, Placement, ToastOptions};
//! use std::time::Duration;
//!
//! let mut manager: Manager = Manager::new();
//! let id = manager
//!     .notify("Saved", ToastOptions::new().placement("top-left"))
//!     .expect("valid placement");
//! assert_eq!(manager.zone(Placement::TopLeft).len(), 1);
//!
//! manager.close(&id, None);
//! assert!(manager.zone(Placement::TopLeft).is_empty());
//!
//! let timed = manager.notify("Uploading", ToastOptions::new().duration(Duration::from_secs(3)));
//! assert!(timed.is_ok());
//! ```
//!
//! In an iced application, route [`Message`] through
//! [`Manager::handle_message`], add [`Manager::subscription`] to the
//! application's subscriptions and stack [`Manager::view`] over the content.

pub mod bridge;
pub mod clock;
pub mod manager;
pub mod notification;
pub mod placement;
pub mod timer;
pub mod toast;
pub mod zone_store;

pub use bridge::{BridgeEvent, Phase, RenderBridge, Rendered, Resolved, Transition};
pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Manager, Message};
pub use notification::{
    Content, ContentFactory, Toast, ToastContext, ToastId, ToastOptions, ToastUpdate,
};
pub use placement::{Placement, UnknownPlacement};
pub use timer::TimerController;
pub use toast::view_overlay;
pub use zone_store::{ZoneSnapshot, ZoneStore};
