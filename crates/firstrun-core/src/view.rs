use crate::{Color, Modifier};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type CallbackF32 = Rc<dyn Fn(f32)>;
pub type CallbackIndex = Rc<dyn Fn(usize)>;

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Column,
    Stack,
    /// Horizontally paged container; every child is one page of `page_width`.
    Pager {
        page_width: f32,
        offset: f32,
        on_scroll: Option<CallbackF32>,
        on_settle: Option<CallbackF32>,
    },
    Image {
        id: String,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    Button {
        text: String,
        font_size: f32,
        on_click: Option<Callback>,
    },
    PageIndicator {
        count: usize,
        current: usize,
        on_select: Option<CallbackIndex>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::Pager {
                page_width, offset, ..
            } => f
                .debug_struct("Pager")
                .field("page_width", page_width)
                .field("offset", offset)
                .finish(),
            ViewKind::Image { id } => f.debug_struct("Image").field("id", id).finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Button {
                text, font_size, ..
            } => f
                .debug_struct("Button")
                .field("text", text)
                .field("font_size", font_size)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::PageIndicator { count, current, .. } => f
                .debug_struct("PageIndicator")
                .field("count", count)
                .field("current", current)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn id(mut self, id: ViewId) -> Self {
        self.id = id;
        self
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first search by id.
    pub fn find(&self, id: ViewId) -> Option<&View> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Depth-first walk, parents before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }
}
