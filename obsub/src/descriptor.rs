//! 事件描述符（EventDescriptor）
//!
//! 每个被 `#[event]` 标注的方法对应一个描述符，以关联常量的形式挂在类型上，
//! 被该类型的所有实例共享。描述符本身不保存任何实例状态：
//! - 通过类型访问（`Type::ON_STUFF`）得到描述符，可用于内省名称与文档；
//! - 通过实例访问（`bind`）得到该实例的 `BoundEvent`，处理器列表按需创建。
//!
use crate::bound::BoundEvent;
use crate::error::EventResult;
use crate::slot::EventSlot;
use std::fmt;

/// 原方法体：以实例与参数调用
pub type EventBody<S, A> = fn(&S, &A) -> anyhow::Result<()>;

/// 定位实例上的事件槽
pub type SlotAccessor<S, A> = fn(&S) -> &EventSlot<S, A>;

pub struct EventDescriptor<S, A> {
    name: &'static str,
    doc: Option<&'static str>,
    body: EventBody<S, A>,
    slot: SlotAccessor<S, A>,
}

impl<S, A> EventDescriptor<S, A> {
    pub const fn new(
        name: &'static str,
        doc: Option<&'static str>,
        body: EventBody<S, A>,
        slot: SlotAccessor<S, A>,
    ) -> Self {
        Self {
            name,
            doc,
            body,
            slot,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// 原方法上的文档注释
    pub const fn doc(&self) -> Option<&'static str> {
        self.doc
    }

    /// 绑定到实例：返回该实例的 `BoundEvent`，首次访问时创建处理器列表
    pub fn bind<'a>(&self, instance: &'a S) -> BoundEvent<'a, S, A> {
        let slot = (self.slot)(instance);
        slot.handlers();
        BoundEvent::new(instance, *self, slot)
    }

    /// 以显式实例触发事件，等价于 `self.bind(instance).emit(args)`
    pub fn emit(&self, instance: &S, args: A) -> EventResult<()> {
        self.bind(instance).emit(args)
    }

    pub(crate) fn run_body(&self, instance: &S, args: &A) -> anyhow::Result<()> {
        (self.body)(instance, args)
    }
}

impl<S, A> Clone for EventDescriptor<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for EventDescriptor<S, A> {}

impl<S, A> fmt::Debug for EventDescriptor<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDescriptor")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}
