//! 绑定事件（BoundEvent）
//!
//! 某个实例上某个事件的视图：持有实例的回引用与该实例的处理器列表。
//! 对同一实例的多次访问得到的视图共享同一列表，注册结果彼此可见。
//!
//! 触发顺序：先执行原方法体，再按注册顺序调用处理器快照中的每个处理器。
//! 任一环节失败立即返回错误，其后的处理器不再执行。
//!
use crate::descriptor::EventDescriptor;
use crate::error::{EventError, EventResult};
use crate::handler::Handler;
use crate::slot::EventSlot;
use std::fmt;
use tracing::{debug, trace};

pub struct BoundEvent<'a, S, A> {
    instance: &'a S,
    descriptor: EventDescriptor<S, A>,
    slot: &'a EventSlot<S, A>,
}

impl<'a, S, A> BoundEvent<'a, S, A> {
    pub(crate) fn new(
        instance: &'a S,
        descriptor: EventDescriptor<S, A>,
        slot: &'a EventSlot<S, A>,
    ) -> Self {
        Self {
            instance,
            descriptor,
            slot,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// 触发事件的实例
    pub fn instance(&self) -> &'a S {
        self.instance
    }

    pub fn descriptor(&self) -> &EventDescriptor<S, A> {
        &self.descriptor
    }

    /// 注册处理器（允许重复注册，重复项每次触发各执行一次）
    pub fn add_handler(&self, handler: impl Into<Handler<S, A>>) -> &Self {
        self.slot.push(handler.into());
        debug!(
            event = self.name(),
            handlers = self.slot.len(),
            "handler added"
        );
        self
    }

    /// 注销处理器：移除第一个相等的项，不存在时返回 `HandlerNotFound`
    pub fn remove_handler(&self, handler: &Handler<S, A>) -> EventResult<&Self> {
        if !self.slot.remove_first(handler) {
            return Err(EventError::HandlerNotFound { event: self.name() });
        }
        debug!(
            event = self.name(),
            handlers = self.slot.len(),
            "handler removed"
        );
        Ok(self)
    }

    pub fn contains(&self, handler: &Handler<S, A>) -> bool {
        self.slot.contains(handler)
    }

    pub fn handler_count(&self) -> usize {
        self.slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    /// 当前已注册的处理器（按注册顺序）
    pub fn handlers(&self) -> Vec<Handler<S, A>> {
        self.slot.snapshot()
    }

    /// 是否与另一个视图指向同一实例上的同一事件
    pub fn same_event(&self, other: &Self) -> bool {
        std::ptr::eq(self.instance, other.instance) && std::ptr::eq(self.slot, other.slot)
    }

    /// 触发事件：先执行原方法体，再依次调用处理器
    pub fn emit(&self, args: A) -> EventResult<()> {
        let event = self.name();

        if let Err(source) = self.descriptor.run_body(self.instance, &args) {
            debug!(event, error = %source, "event body failed, dispatch aborted");
            return Err(EventError::Body { event, source });
        }

        // 派发期间处理器可能修改列表，只对快照迭代
        let handlers = self.slot.snapshot();
        trace!(event, handlers = handlers.len(), "dispatching");

        for (index, handler) in handlers.iter().enumerate() {
            trace!(event, index, "calling handler");
            if let Err(source) = handler.call(self.instance, &args) {
                debug!(event, index, error = %source, "handler failed, dispatch aborted");
                return Err(EventError::Handler {
                    event,
                    index,
                    source,
                });
            }
        }

        Ok(())
    }
}

impl<S, A> Clone for BoundEvent<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for BoundEvent<'_, S, A> {}

impl<S, A> PartialEq for BoundEvent<'_, S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_event(other)
    }
}

impl<S, A> fmt::Debug for BoundEvent<'_, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundEvent")
            .field("name", &self.name())
            .field("instance", &(self.instance as *const S))
            .field("handlers", &self.slot.len())
            .finish()
    }
}
