//! 事件槽（EventSlot）
//!
//! 作为字段直接存放在拥有事件的实例上，保存该实例在某个事件上的处理器列表。
//! 列表在首次访问时才创建，随实例一同销毁，因此无需按实例标识维护额外缓存。
//!
use crate::handler::Handler;
use std::cell::{OnceCell, RefCell};
use std::fmt;

/// 单个实例、单个事件的处理器存储
pub struct EventSlot<S: ?Sized, A> {
    handlers: OnceCell<RefCell<Vec<Handler<S, A>>>>,
}

impl<S: ?Sized, A> EventSlot<S, A> {
    pub const fn new() -> Self {
        Self {
            handlers: OnceCell::new(),
        }
    }

    /// 处理器列表是否已创建（即事件是否被访问过）
    pub fn is_bound(&self) -> bool {
        self.handlers.get().is_some()
    }

    /// 获取（必要时创建）处理器列表
    pub(crate) fn handlers(&self) -> &RefCell<Vec<Handler<S, A>>> {
        self.handlers.get_or_init(|| RefCell::new(Vec::new()))
    }

    /// 当前处理器的快照，派发期间对列表的修改不会影响快照
    pub(crate) fn snapshot(&self) -> Vec<Handler<S, A>> {
        match self.handlers.get() {
            Some(list) => list.borrow().clone(),
            None => Vec::new(),
        }
    }

    pub(crate) fn push(&self, handler: Handler<S, A>) {
        self.handlers().borrow_mut().push(handler);
    }

    /// 移除第一个相等的处理器，返回是否找到
    pub(crate) fn remove_first(&self, handler: &Handler<S, A>) -> bool {
        let mut list = self.handlers().borrow_mut();
        match list.iter().position(|h| h == handler) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, handler: &Handler<S, A>) -> bool {
        self.handlers
            .get()
            .map(|list| list.borrow().iter().any(|h| h == handler))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.handlers.get().map(|list| list.borrow().len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ?Sized, A> Default for EventSlot<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, A> fmt::Debug for EventSlot<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSlot")
            .field("bound", &self.is_bound())
            .field("handlers", &self.len())
            .finish()
    }
}
