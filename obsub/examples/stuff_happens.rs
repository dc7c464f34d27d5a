//! 方法事件使用示例
//!
//! 展示如何用 `#[event]` 把方法变成事件，并注册、注销处理器。
//!
//! 运行示例：
//! ```bash
//! cargo run -p obsub --example stuff_happens
//! ```

use obsub::{EventSlot, Handler, event};

#[derive(Default)]
struct Thing {
    name: String,
    on_stuff: EventSlot<Thing, (String,)>,
}

impl Thing {
    /// 有事情发生
    #[event]
    fn on_stuff(&self, arg: String) {
        println!("Stuff {arg} happens");
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== 方法事件使用示例 ===\n");

    let thing = Thing {
        name: "thing".to_string(),
        ..Default::default()
    };

    // 1. 注册处理器，先执行原方法体，再执行处理器
    println!("1. 注册处理器");
    let handler = Handler::new(|subject: &Thing, (arg,): &(String,)| {
        println!("Stuff {arg} is handled by {}", subject.name);
        Ok(())
    });
    thing.on_stuff_event().add_handler(handler.clone());
    thing.on_stuff("foo".to_string())?;

    // 2. 重复注册的处理器每次触发各执行一次
    println!("\n2. 重复注册");
    thing.on_stuff_event().add_handler(handler.clone());
    thing.on_stuff("bar".to_string())?;

    // 3. 注销只移除第一个匹配项
    println!("\n3. 注销处理器");
    thing.on_stuff_event().remove_handler(&handler)?;
    thing.on_stuff_event().remove_handler(&handler)?;
    thing.on_stuff("baz".to_string())?;

    // 4. 注销不存在的处理器会返回错误
    println!("\n4. 注销不存在的处理器");
    if let Err(err) = thing.on_stuff_event().remove_handler(&handler) {
        println!("   {err}");
    }

    // 5. 通过类型访问描述符
    println!("\n5. 描述符");
    println!("   name = {}", Thing::ON_STUFF.name());
    println!("   doc  = {:?}", Thing::ON_STUFF.doc());

    Ok(())
}
