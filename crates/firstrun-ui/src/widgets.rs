#![allow(non_snake_case)]
//! View builders used by the carousel.

use std::rc::Rc;

use firstrun_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    View::new(0, ViewKind::Surface)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(0, ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: Color::WHITE,
            font_size: 17.0,
        },
    )
}

pub fn Image(modifier: Modifier, id: impl Into<String>) -> View {
    View::new(0, ViewKind::Image { id: id.into() }).modifier(modifier)
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            font_size: 17.0,
            on_click: Some(Rc::new(on_click)),
        },
    )
}

pub fn Pager(
    modifier: Modifier,
    page_width: f32,
    offset: f32,
    on_scroll: impl Fn(f32) + 'static,
    on_settle: impl Fn(f32) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::Pager {
            page_width,
            offset,
            on_scroll: Some(Rc::new(on_scroll)),
            on_settle: Some(Rc::new(on_settle)),
        },
    )
    .modifier(modifier)
}

pub fn PageIndicator(count: usize, current: usize, on_select: impl Fn(usize) + 'static) -> View {
    View::new(
        0,
        ViewKind::PageIndicator {
            count,
            current,
            on_select: Some(Rc::new(on_select)),
        },
    )
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, pt: f32) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, pt: f32) -> View {
        match &mut self.kind {
            ViewKind::Text { font_size, .. } | ViewKind::Button { font_size, .. } => {
                *font_size = pt;
            }
            _ => {}
        }
        self
    }
}
