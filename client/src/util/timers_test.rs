use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Stand-in for a timer handle that counts its cancellations.
struct Handle(Rc<Cell<u32>>);

impl Drop for Handle {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn handles(count: usize, cancelled: &Rc<Cell<u32>>) -> Vec<Handle> {
    (0..count).map(|_| Handle(Rc::clone(cancelled))).collect()
}

#[test]
fn replacing_cancels_previous_generation() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut timers = PendingTimers::default();

    timers.replace(handles(3, &first));
    assert_eq!(timers.len(), 3);
    assert_eq!(first.get(), 0);

    timers.replace(handles(2, &second));
    assert_eq!(first.get(), 3);
    assert_eq!(second.get(), 0);
    assert_eq!(timers.len(), 2);
}

#[test]
fn teardown_cancels_everything_pending() {
    let cancelled = Rc::new(Cell::new(0));
    let mut timers = PendingTimers::default();
    timers.replace(handles(4, &cancelled));

    timers.cancel_all();
    assert_eq!(cancelled.get(), 4);
    assert!(timers.is_empty());
}
