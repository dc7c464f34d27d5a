use obsub::{EventSlot, event};

#[derive(Default)]
struct Sensor {
    reading: EventSlot<Sensor, (f64,)>,
}

impl Sensor {
    #[event]
    pub fn reading(&self, value: f64) {
        let _ = value;
    }

    // 条件编译关闭时整组生成条目一同移除，不存在的槽字段不会被引用
    #[event]
    #[cfg(any())]
    pub fn calibrated(&self, offset: f64) {
        let _ = offset;
    }

    // 弃用标记落在对外的触发方法与访问器上
    #[event(slot = reading, name = "legacy_reading")]
    #[deprecated(note = "use `reading`")]
    pub fn legacy(&self, value: f64) {
        let _ = value;
    }
}

#[allow(deprecated)]
fn legacy_count(s: &Sensor) -> usize {
    s.legacy(1.0).unwrap();
    s.legacy_event().handler_count()
}

fn main() {
    let s = Sensor::default();
    s.reading(0.5).unwrap();
    assert_eq!(legacy_count(&s), 0);
    assert_eq!(Sensor::LEGACY.name(), "legacy_reading");
}
