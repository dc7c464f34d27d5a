use proc_macro::TokenStream;

mod attr_utils;
mod event;
mod signature;

/// 事件宏
/// 标注在固有 `impl` 块中的 `&self` 方法上，使其成为可被监听的事件：
/// - 原方法体保留为隐藏方法，调用事件时最先执行
/// - 生成关联常量 `NAME: ::obsub::EventDescriptor<Self, (Args,)>`（方法名大写）
/// - 生成同名方法 `name(&self, args..) -> ::obsub::EventResult<()>` 用于触发事件
/// - 生成访问器 `name_event(&self) -> ::obsub::BoundEvent<'_, Self, (Args,)>` 用于注册/注销处理器
///
/// 支持参数：`#[event(slot = field, name = "label")]`
/// - `slot` 存放处理器列表的 `EventSlot` 字段，默认与方法同名
/// - `name` 事件名称（用于内省与错误信息），默认方法名
#[proc_macro_attribute]
pub fn event(attr: TokenStream, item: TokenStream) -> TokenStream {
    event::expand(attr, item)
}
