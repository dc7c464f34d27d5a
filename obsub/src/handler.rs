//! 事件处理器（Handler）
//!
//! 处理器是共享的可调用对象，接收触发事件的实例与事件参数。
//! 闭包本身不可比较，因此以共享指针的同一性作为相等性：同一个 `Handler`
//! 的克隆彼此相等，分别构造的两个 `Handler` 即使包装同一函数也不相等。
//!
use std::fmt;
use std::rc::Rc;

/// 事件处理器：`(instance, &args)` 形式的回调
pub struct Handler<S: ?Sized, A> {
    f: Rc<dyn Fn(&S, &A) -> anyhow::Result<()>>,
}

impl<S: ?Sized, A> Handler<S, A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&S, &A) -> anyhow::Result<()> + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// 调用处理器
    pub fn call(&self, instance: &S, args: &A) -> anyhow::Result<()> {
        (self.f)(instance, args)
    }

    /// 两个句柄是否指向同一个处理器
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<S: ?Sized, A> Clone for Handler<S, A> {
    fn clone(&self) -> Self {
        Self { f: Rc::clone(&self.f) }
    }
}

impl<S: ?Sized, A> PartialEq for Handler<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<S: ?Sized, A> Eq for Handler<S, A> {}

impl<S: ?Sized, A> fmt::Debug for Handler<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Rc::as_ptr(&self.f).cast::<()>())
            .finish()
    }
}

impl<S: ?Sized, A, F> From<F> for Handler<S, A>
where
    F: Fn(&S, &A) -> anyhow::Result<()> + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
