//! 观察者模式的方法级事件（obsub）
//!
//! 通过 `#[event]` 把普通的 `&self` 方法变成可被外部监听的事件：
//! 调用该方法时先执行原方法体，再按注册顺序调用所有处理器，处理器收到相同的参数
//! （实例作为第一个参数）。
//!
//! 构件：
//! - `EventDescriptor`：每个事件一个，以关联常量挂在类型上，被所有实例共享；
//! - `EventSlot`：存放在实例字段中的处理器列表，首次访问时创建；
//! - `BoundEvent`：实例上的事件视图，负责注册、注销与派发；
//! - `Handler`：以共享指针同一性比较的处理器；
//! - `EventError`：注销失败与派发失败。
//!
//! 典型用法：
//!
//! ```
//! use obsub::{EventSlot, Handler, event};
//!
//! #[derive(Default)]
//! struct Worker {
//!     progress: EventSlot<Worker, (u32,)>,
//! }
//!
//! impl Worker {
//!     #[event]
//!     pub fn progress(&self, percent: u32) {
//!         let _ = percent;
//!     }
//! }
//!
//! let worker = Worker::default();
//! let handler = Handler::new(|_: &Worker, (percent,): &(u32,)| {
//!     println!("{percent}% done");
//!     Ok(())
//! });
//! worker.progress_event().add_handler(handler.clone());
//! worker.progress(50).unwrap();
//! worker.progress_event().remove_handler(&handler).unwrap();
//! ```
//!
//! 该实现面向单线程同步场景，事件类型不实现 `Send`/`Sync`。
//!
pub mod bound;
pub mod descriptor;
pub mod error;
pub mod handler;
pub mod slot;

pub use bound::BoundEvent;
pub use descriptor::EventDescriptor;
pub use error::{EventError, EventResult};
pub use handler::Handler;
pub use obsub_macros::event;
pub use slot::EventSlot;

// 供过程宏生成的代码使用，不属于公开 API
#[doc(hidden)]
pub mod __private {
    pub use anyhow;

    /// 把原方法返回的 `Result<T, E>` 统一为 `anyhow::Result<()>`，成功值丢弃
    ///
    /// 调用处带有原方法返回类型的位置信息，`E` 无法转换为 `anyhow::Error` 时
    /// 编译错误指向该返回类型。
    pub fn fallible<T, E>(result: Result<T, E>) -> anyhow::Result<()>
    where
        E: Into<anyhow::Error>,
    {
        result.map(|_| ()).map_err(Into::into)
    }
}

// 允许在本 crate 内部通过 ::obsub 进行自引用，
// 以便过程宏在本 crate 的测试中也能解析到 ::obsub 路径。
extern crate self as obsub;

#[cfg(test)]
mod tests {
    use super::__private::fallible;
    use std::io;

    // 测试返回值统一：成功值丢弃，错误原样保留
    #[test]
    fn test_fallible_keeps_error() {
        assert!(fallible::<u32, io::Error>(Ok(7)).is_ok());

        let err = fallible::<(), _>(Err(io::Error::other("disk full")))
            .unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert!(err.downcast_ref::<io::Error>().is_some());

        let err = fallible::<(), anyhow::Error>(Err(anyhow::anyhow!("boom"))).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
