use obsub::{EventSlot, event};

#[derive(Default)]
struct Download {
    listeners: EventSlot<Download, (u64,)>,
    finished: EventSlot<Download, ()>,
}

impl Download {
    // 自定义槽字段与事件名称
    #[event(slot = listeners, name = "download.progress")]
    fn progress(&self, mut bytes: u64) -> u64 {
        bytes += 1;
        bytes
    }

    // 返回 Result 时错误向调用方传播
    #[event(slot = finished)]
    fn finish(&self) -> std::io::Result<()> {
        Ok(())
    }
}

fn main() {
    let d = Download::default();
    d.progress_event()
        .add_handler(|_: &Download, (bytes,): &(u64,)| -> anyhow::Result<()> {
            assert_eq!(*bytes, 10);
            Ok(())
        });

    d.progress(10).unwrap();
    d.finish().unwrap();

    assert_eq!(Download::PROGRESS.name(), "download.progress");
    assert_eq!(d.progress_event().handler_count(), 1);
    assert!(d.finish_event().is_empty());
}
