//! 事件系统统一错误定义
//!
//! 仅覆盖两类失败：注销不存在的处理器，以及派发过程中原方法体或处理器返回的错误。
//! 派发错误不做吞没与重试，原始错误通过 `source()` 原样暴露给调用方。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EventError {
    // --- 注册/注销 ---
    #[error("handler not found: event={event}")]
    HandlerNotFound { event: &'static str },

    // --- 派发 ---
    #[error("event body failed: event={event}, reason={source}")]
    Body {
        event: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("event handler failed: event={event}, index={index}, reason={source}")]
    Handler {
        event: &'static str,
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}

impl EventError {
    /// 出错事件的名称
    pub fn event(&self) -> &'static str {
        match self {
            Self::HandlerNotFound { event }
            | Self::Body { event, .. }
            | Self::Handler { event, .. } => event,
        }
    }

    pub fn is_handler_not_found(&self) -> bool {
        matches!(self, Self::HandlerNotFound { .. })
    }
}

/// 统一 Result 类型别名
pub type EventResult<T> = Result<T, EventError>;
