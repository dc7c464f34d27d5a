use obsub::{EventSlot, Handler, event};

#[derive(Default)]
struct Button {
    clicked: EventSlot<Button, (i32, i32)>,
}

impl Button {
    /// 按钮被点击
    #[event]
    pub fn clicked(&self, x: i32, y: i32) {
        let _ = (x, y);
    }
}

fn main() {
    let button = Button::default();
    let handler = Handler::new(|_: &Button, (x, y): &(i32, i32)| {
        assert_eq!((*x, *y), (3, 4));
        Ok(())
    });

    button.clicked_event().add_handler(handler.clone());
    button.clicked(3, 4).unwrap();
    button.clicked_event().remove_handler(&handler).unwrap();

    assert_eq!(Button::CLICKED.name(), "clicked");
    assert_eq!(Button::CLICKED.doc(), Some("按钮被点击"));
}
