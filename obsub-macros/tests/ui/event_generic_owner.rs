use obsub::{EventSlot, event};

struct Cell<T: Clone + 'static> {
    value: std::cell::RefCell<T>,
    changed: EventSlot<Cell<T>, (T,)>,
}

impl<T: Clone + 'static> Cell<T> {
    fn new(value: T) -> Self {
        Self {
            value: std::cell::RefCell::new(value),
            changed: EventSlot::new(),
        }
    }

    // 泛型类型上的事件
    #[event]
    fn changed(&self, value: T) {
        *self.value.borrow_mut() = value;
    }
}

fn main() {
    let cell = Cell::new(1u8);
    cell.changed_event()
        .add_handler(|c: &Cell<u8>, (v,): &(u8,)| -> anyhow::Result<()> {
            assert_eq!(*c.value.borrow(), *v);
            Ok(())
        });
    cell.changed(7).unwrap();
}
