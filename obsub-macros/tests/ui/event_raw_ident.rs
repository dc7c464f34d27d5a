use obsub::{EventSlot, event};

#[derive(Default)]
struct Token {
    r#type: EventSlot<Token, (String,)>,
    r#match: EventSlot<Token, ()>,
}

impl Token {
    // 关键字方法名：常量与访问器使用去掉 r# 的名称
    #[event]
    pub fn r#type(&self, kind: String) {
        let _ = kind;
    }

    #[event(name = "matched")]
    pub fn r#match(&self) {}
}

fn main() {
    let t = Token::default();
    t.type_event()
        .add_handler(|_: &Token, (kind,): &(String,)| -> anyhow::Result<()> {
            assert_eq!(kind, "ident");
            Ok(())
        });
    t.r#type("ident".to_string()).unwrap();
    t.r#match().unwrap();

    assert_eq!(Token::TYPE.name(), "type");
    assert_eq!(Token::MATCH.name(), "matched");
    assert_eq!(t.type_event().handler_count(), 1);
    assert!(t.match_event().is_empty());
}
