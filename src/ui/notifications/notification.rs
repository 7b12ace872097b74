// SPDX-License-Identifier: MPL-2.0
//! Toast records and the option types used to create and update them.
//!
//! A [`Toast`] is immutable once admitted; [`Manager::update`] replaces it
//! with a merged copy under the same id.
//!
//! [`Manager::update`]: super::Manager::update

use super::manager::Message;
use super::placement::Placement;
use iced::Element;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Identifier of a toast, unique across all zones while the toast is live.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a content factory receives when its toast is rendered.
pub struct ToastContext<'a, D> {
    pub id: &'a ToastId,
    pub data: Option<&'a D>,
    pub placement: Placement,
    /// Message that closes this toast when published.
    pub on_close: Message,
}

/// Builds a toast's element from its [`ToastContext`].
pub type ContentFactory<D> = Rc<dyn Fn(&ToastContext<'_, D>) -> Element<'static, Message>>;

/// What a toast displays: a plain message or a factory invoked at render time.
pub enum Content<D> {
    /// Message rendered inside the default toast card.
    Value(String),
    /// Caller-built element.
    Factory(ContentFactory<D>),
}

impl<D> Content<D> {
    /// Wraps a closure as factory content.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&ToastContext<'_, D>) -> Element<'static, Message> + 'static,
    {
        Content::Factory(Rc::new(f))
    }

    /// Returns the message of value content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Value(text) => Some(text),
            Content::Factory(_) => None,
        }
    }
}

impl<D> Clone for Content<D> {
    fn clone(&self) -> Self {
        match self {
            Content::Value(text) => Content::Value(text.clone()),
            Content::Factory(factory) => Content::Factory(Rc::clone(factory)),
        }
    }
}

impl<D> fmt::Debug for Content<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Value(text) => f.debug_tuple("Value").field(text).finish(),
            Content::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl<D> From<&str> for Content<D> {
    fn from(value: &str) -> Self {
        Content::Value(value.to_string())
    }
}

impl<D> From<String> for Content<D> {
    fn from(value: String) -> Self {
        Content::Value(value)
    }
}

/// A toast admitted into a zone.
pub struct Toast<D> {
    id: ToastId,
    content: Content<D>,
    data: Option<Rc<D>>,
    duration: Option<Duration>,
    placement: Placement,
}

impl<D> Toast<D> {
    pub(crate) fn new(
        id: ToastId,
        content: Content<D>,
        data: Option<D>,
        duration: Option<Duration>,
        placement: Placement,
    ) -> Self {
        Self {
            id,
            content,
            data: data.map(Rc::new),
            duration,
            placement,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> &Content<D> {
        &self.content
    }

    #[must_use]
    pub fn data(&self) -> Option<&D> {
        self.data.as_deref()
    }

    /// Time before auto-dismiss. `None` means the toast stays until closed.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns a copy with every field set in `update` replaced.
    pub(crate) fn merged(&self, update: ToastUpdate<D>) -> Self {
        Self {
            id: update.id.unwrap_or_else(|| self.id.clone()),
            content: update.content.unwrap_or_else(|| self.content.clone()),
            data: match update.data {
                Some(data) => data.map(Rc::new),
                None => self.data.clone(),
            },
            duration: update.duration.unwrap_or(self.duration),
            placement: update.placement.unwrap_or(self.placement),
        }
    }
}

impl<D> Clone for Toast<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            data: self.data.clone(),
            duration: self.duration,
            placement: self.placement,
        }
    }
}

impl<D: fmt::Debug> fmt::Debug for Toast<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("data", &self.data)
            .field("duration", &self.duration)
            .field("placement", &self.placement)
            .finish()
    }
}

/// Options accepted by [`Manager::notify`](super::Manager::notify).
#[derive(Debug)]
pub struct ToastOptions<D = ()> {
    pub(crate) id: Option<ToastId>,
    pub(crate) placement: Option<String>,
    pub(crate) duration: Option<Duration>,
    pub(crate) data: Option<D>,
}

impl<D> Default for ToastOptions<D> {
    fn default() -> Self {
        Self {
            id: None,
            placement: None,
            duration: None,
            data: None,
        }
    }
}

impl<D> ToastOptions<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-chosen id instead of a generated one.
    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the zone, either a [`Placement`] or its name.
    ///
    /// Names are validated by `notify`; an unknown name is rejected there.
    #[must_use]
    pub fn placement(mut self, placement: impl ToString) -> Self {
        self.placement = Some(placement.to_string());
        self
    }

    /// Auto-dismisses the toast after `duration`. Without it the toast stays
    /// until closed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Attaches caller data handed back to content factories.
    #[must_use]
    pub fn data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }
}

/// Field overrides accepted by [`Manager::update`](super::Manager::update).
///
/// Unset fields keep their current value.
#[derive(Debug)]
pub struct ToastUpdate<D = ()> {
    pub(crate) id: Option<ToastId>,
    pub(crate) content: Option<Content<D>>,
    pub(crate) data: Option<Option<D>>,
    pub(crate) duration: Option<Option<Duration>>,
    pub(crate) placement: Option<Placement>,
}

impl<D> Default for ToastUpdate<D> {
    fn default() -> Self {
        Self {
            id: None,
            content: None,
            data: None,
            duration: None,
            placement: None,
        }
    }
}

impl<D> ToastUpdate<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the toast. Rejected if another live toast holds `id`.
    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Content<D>>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn data(mut self, data: D) -> Self {
        self.data = Some(Some(data));
        self
    }

    #[must_use]
    pub fn clear_data(mut self) -> Self {
        self.data = Some(None);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(Some(duration));
        self
    }

    /// Removes the auto-dismiss duration.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(None);
        self
    }

    /// Moves the toast to another zone.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Toast<u32> {
        Toast::new(
            ToastId::from("7"),
            Content::from("saved"),
            Some(1),
            Some(Duration::from_secs(3)),
            Placement::Top,
        )
    }

    #[test]
    fn empty_update_changes_nothing() {
        let merged = record().merged(ToastUpdate::new());
        assert_eq!(merged.id().as_str(), "7");
        assert_eq!(merged.content().as_text(), Some("saved"));
        assert_eq!(merged.data(), Some(&1));
        assert_eq!(merged.duration(), Some(Duration::from_secs(3)));
        assert_eq!(merged.placement(), Placement::Top);
    }

    #[test]
    fn update_replaces_only_given_fields() {
        let merged = record().merged(ToastUpdate::new().content("updated").persistent());
        assert_eq!(merged.content().as_text(), Some("updated"));
        assert_eq!(merged.duration(), None);
        assert_eq!(merged.id().as_str(), "7");
        assert_eq!(merged.data(), Some(&1));
    }

    #[test]
    fn clear_data_drops_payload() {
        let merged = record().merged(ToastUpdate::new().clear_data());
        assert_eq!(merged.data(), None);
    }

    #[test]
    fn factory_content_is_not_text() {
        let content: Content<()> = Content::factory(|ctx| iced::widget::text(ctx.id.to_string()).into());
        assert!(content.as_text().is_none());
        assert_eq!(format!("{content:?}"), "Factory(..)");
    }

    #[test]
    fn options_accept_placement_or_name() {
        let typed: ToastOptions = ToastOptions::new().placement(Placement::TopLeft);
        let named: ToastOptions = ToastOptions::new().placement("top-left");
        assert_eq!(typed.placement, named.placement);
    }
}
