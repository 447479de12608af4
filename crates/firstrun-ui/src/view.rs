#![allow(non_snake_case)]
//! View tree for the carousel.
//!
//! `OnboardingView` reads the carousel and wires every callback back into it.
//! Rebuild the view after events or while `tick()` reports a running fade.

use firstrun_core::*;

use crate::carousel::SharedCarousel;
use crate::widgets::{
    Button, Column, Image, PageIndicator, Pager, Stack, Surface, Text, TextStyle, ViewExt,
};

/// Stable view ids so renderers and tests can find nodes.
pub mod ids {
    use firstrun_core::ViewId;

    pub const ROOT: ViewId = 1;
    pub const PAGER: ViewId = 2;
    pub const INDICATOR: ViewId = 3;
    pub const SKIP: ViewId = 4;
    pub const ACTION: ViewId = 5;

    pub fn card(index: usize) -> ViewId {
        1_000 + index as ViewId
    }
    pub fn overlay(index: usize) -> ViewId {
        2_000 + index as ViewId
    }
}

pub fn OnboardingView(carousel: &SharedCarousel) -> View {
    let c = carousel.borrow();
    let cfg = c.config();
    let type_sizes = c.typography();
    let last = c.cards().len() - 1;

    let pages: Vec<View> = c
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let mut overlay = vec![
                Text(card.title.clone())
                    .color(cfg.text_color)
                    .size(type_sizes.title),
                Text(card.body.clone())
                    .color(cfg.text_color)
                    .size(type_sizes.body),
            ];
            if i == last
                && let Some(label) = &card.action_label
            {
                overlay.push(
                    Button(label.clone(), {
                        let carousel = carousel.clone();
                        move || {
                            carousel.borrow_mut().trigger_action();
                        }
                    })
                    .size(type_sizes.button)
                    .id(ids::ACTION),
                );
            }
            Stack(Modifier::new().fill_max_size())
                .id(ids::card(i))
                .child([
                    Image(Modifier::new().fill_max_size(), card.image_id.clone()),
                    Column(
                        Modifier::new()
                            .padding(24.0)
                            .align(Alignment::End)
                            .alpha(c.overlay_alpha(i)),
                    )
                    .id(ids::overlay(i))
                    .child(overlay),
                ])
        })
        .collect();

    let pager = Pager(
        Modifier::new().fill_max_size(),
        c.page_width(),
        c.offset(),
        {
            let carousel = carousel.clone();
            move |x| {
                carousel.borrow_mut().on_scroll(x);
            }
        },
        {
            let carousel = carousel.clone();
            move |x| {
                carousel.borrow_mut().on_settle(x);
            }
        },
    )
    .id(ids::PAGER)
    .child(pages);

    let indicator = PageIndicator(c.cards().len(), c.indicator_page(), {
        let carousel = carousel.clone();
        move |k| {
            carousel.borrow_mut().on_indicator_select(k);
        }
    })
    .id(ids::INDICATOR);

    let skip_label = if c.is_last_page() {
        &cfg.done_label
    } else {
        &cfg.skip_label
    };
    let skip = Button(skip_label.clone(), {
        let carousel = carousel.clone();
        move || {
            carousel.borrow_mut().skip();
        }
    })
    .size(type_sizes.button)
    .id(ids::SKIP);

    Surface(
        Modifier::new().fill_max_size().background(c.background()),
        Stack(Modifier::new().fill_max_size()).child([pager, indicator, skip]),
    )
    .id(ids::ROOT)
}
