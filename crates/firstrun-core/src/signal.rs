use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Option<Subscriber<T>>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("subs", &inner.subs.iter().flatten().count())
            .finish()
    }
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }
    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }
    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v.clone();
        self.notify(&v);
    }
    /// Like `set`, but subscribers only hear about actual changes.
    pub fn set_if_changed(&self, v: T) -> bool
    where
        T: PartialEq,
    {
        if self.0.borrow().value == v {
            return false;
        }
        self.set(v);
        true
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Some(Rc::new(f)));
        inner.subs.len() - 1
    }
    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.0.borrow_mut().subs.get_mut(id) {
            *slot = None;
        }
    }

    // No borrow is held while subscribers run; they may read or set the signal.
    fn notify(&self, value: &T) {
        let subs: Vec<Subscriber<T>> = self.0.borrow().subs.iter().flatten().cloned().collect();
        for s in &subs {
            s(value);
        }
    }
}

pub fn signal<T: Clone>(t: T) -> Signal<T> {
    Signal::new(t)
}
