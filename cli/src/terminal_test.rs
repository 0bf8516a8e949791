use std::sync::{Arc, Mutex};

use leads::NoticeOptions;

use super::*;

#[derive(Clone, Default)]
struct SharedNotifier {
    seen: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier for SharedNotifier {
    fn notify(&self, notice: Notice) {
        self.seen.lock().unwrap().push(notice);
    }
}

#[test]
fn render_tags_level_and_indents_description() {
    let notice = Notice::new(NoticeLevel::Success, "Заявка принята", NoticeOptions::described("Номер заявки: A1"));
    assert_eq!(render(&notice), "[ok] Заявка принята\n       Номер заявки: A1");
}

#[test]
fn render_without_description_is_one_line() {
    let notice = Notice::new(NoticeLevel::Error, "Не удалось отправить заявку", NoticeOptions::default());
    assert_eq!(render(&notice), "[error] Не удалось отправить заявку");
}

#[tokio::test(start_paused = true)]
async fn drain_waits_for_delayed_notice() {
    let notifier = SharedNotifier::default();
    let scheduler = TokioScheduler::new(notifier.clone());

    scheduler.schedule(Duration::from_secs(1), Notice::new(NoticeLevel::Info, "later", NoticeOptions::default()));
    assert_eq!(scheduler.pending(), 1);
    assert!(notifier.seen.lock().unwrap().is_empty());

    scheduler.drain().await;

    assert_eq!(scheduler.pending(), 0);
    let seen = notifier.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, "later");
}
