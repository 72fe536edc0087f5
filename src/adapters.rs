//! Adapter containers: a LIFO [`Stack`] and a FIFO [`Queue`].
//!
//! Both deliberately keep iteration out of their public contract; the only
//! way to observe their contents wholesale is the diagnostic-only
//! [`DebugView`] capability, which the renderer uses for failure messages.

use std::collections::VecDeque;

use crate::render::{render_adapter, DebugView, Render};

/// Last-in, first-out container over a hidden backing sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> DebugView for Stack<T> {
    type Item = T;

    // Bottom-to-top storage order.
    fn debug_view(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Render> Render for Stack<T> {
    fn render(&self) -> String {
        render_adapter(self)
    }
}

/// First-in, first-out container over a hidden backing sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> DebugView for Queue<T> {
    type Item = T;

    // Front-to-back storage order.
    fn debug_view(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Render> Render for Queue<T> {
    fn render(&self) -> String {
        render_adapter(self)
    }
}
