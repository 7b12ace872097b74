// SPDX-License-Identifier: MPL-2.0
//! iced rendering of the toast zones.
//!
//! Each zone is an anchored column stacked over the others. Every toast is
//! wrapped in a `mouse_area` that reports hover to the manager, which pauses
//! and resumes its countdown.

use super::bridge::{Rendered, RenderBridge, Resolved};
use super::manager::{Manager, Message};
use super::placement::Placement;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

impl<D> Manager<D> {
    /// Renders every zone as one overlay layer.
    pub fn view(&self) -> Element<'_, Message> {
        view_overlay(self.bridge(), self.now())
    }
}

/// Renders the overlay for all zones of `bridge` as seen at `now`.
pub fn view_overlay<D>(bridge: &RenderBridge<D>, now: Instant) -> Element<'_, Message> {
    let layers: Vec<Element<'_, Message>> = bridge
        .zones()
        .filter(|(_, rendered)| !rendered.is_empty())
        .map(|(placement, rendered)| view_zone(bridge, placement, rendered, now))
        .collect();

    if layers.is_empty() {
        // Empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn view_zone<'a, D>(
    bridge: &'a RenderBridge<D>,
    placement: Placement,
    rendered: &'a [Rendered<D>],
    now: Instant,
) -> Element<'a, Message> {
    let (horizontal, vertical) = anchor(placement);

    let toasts = rendered.iter().map(|toast| -> Element<'a, Message> {
        let visibility = toast.visibility(bridge.transition(), now);
        let content: Element<'a, Message> = match toast.resolve() {
            Resolved::Text(message) => card(message, toast.context().on_close, visibility),
            Resolved::Element(element) => element,
        };
        mouse_area(content)
            .on_enter(Message::PointerEntered(toast.id().clone()))
            .on_exit(Message::PointerLeft(toast.id().clone()))
            .into()
    });

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

/// Screen anchor of a zone.
fn anchor(placement: Placement) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match placement {
        Placement::Top | Placement::Bottom => alignment::Horizontal::Center,
        Placement::TopLeft | Placement::BottomLeft => alignment::Horizontal::Left,
        Placement::TopRight | Placement::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if placement.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Default card for value content: `[message] [×]`.
fn card(message: &str, on_close: Message, visibility: f32) -> Element<'_, Message> {
    let message_widget = Text::new(message)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.palette().text, visibility)),
        });

    let dismiss_button = button(Text::new("×").size(typography::BODY))
        .on_press(on_close)
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, visibility))
        .into()
}

fn fade(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

/// Style function for the toast card, faded by `visibility`.
fn toast_container_style(theme: &Theme, visibility: f32) -> iced::widget::container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let accent = theme.palette().primary;

    iced::widget::container::Style {
        background: Some(iced::Background::Color(fade(bg_color, visibility))),
        border: iced::Border {
            color: fade(accent, visibility),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(
                Color {
                    a: opacity::SHADOW,
                    ..shadow::MD.color
                },
                visibility,
            ),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, visibility)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, border, text_color) = match status {
        button::Status::Active => (None, iced::Border::default(), base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), rounded, base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), rounded, base.text),
        button::Status::Disabled => (
            None,
            iced::Border::default(),
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}
