use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// Time-driven pose updater advanced once per frame by the scheduler.
///
/// `Send` because bindings are usually built on a loader thread.
pub trait AnimationBinding: Send {
    fn advance(&mut self, delta_secs: f64);
}

pub type BoxedBinding = Box<dyn AnimationBinding>;

/// Creates a one-shot handoff for an animation binding.
///
/// The binder is the single producer and is consumed by `bind`; the slot is
/// the single consumer and is polled by the scheduler every frame.
pub fn animation_handoff() -> (AnimationBinder, AnimationSlot) {
    let (tx, rx) = crossbeam_channel::bounded(1);
    (AnimationBinder { tx }, AnimationSlot::from_receiver(rx))
}

/// Producer side of the handoff.
pub struct AnimationBinder {
    tx: Sender<BoxedBinding>,
}

impl AnimationBinder {
    /// Hands a fully constructed binding to the scheduler.
    ///
    /// Returns `false` if the slot has already been dropped.
    pub fn bind<B>(self, binding: B) -> bool
    where
        B: AnimationBinding + 'static,
    {
        self.tx.send(Box::new(binding)).is_ok()
    }
}

enum SlotState {
    Waiting(Receiver<BoxedBinding>),
    Bound(BoxedBinding),
    Abandoned,
}

/// Consumer side of the handoff.
///
/// Starts unbound. Once a binding is observed it is kept for the rest of the
/// session; there is no transition back.
pub struct AnimationSlot {
    state: SlotState,
}

impl AnimationSlot {
    fn from_receiver(rx: Receiver<BoxedBinding>) -> Self {
        Self {
            state: SlotState::Waiting(rx),
        }
    }

    /// A slot that never becomes bound.
    pub fn detached() -> Self {
        Self {
            state: SlotState::Abandoned,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, SlotState::Bound(_))
    }

    /// Returns the binding if it is available, picking it up from the producer
    /// on the first frame it arrives.
    pub fn poll(&mut self) -> Option<&mut dyn AnimationBinding> {
        if let SlotState::Waiting(rx) = &self.state {
            match rx.try_recv() {
                Ok(binding) => {
                    log::info!("animation binding attached");
                    self.state = SlotState::Bound(binding);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    log::warn!("animation loader finished without a binding; animation stays disabled");
                    self.state = SlotState::Abandoned;
                }
            }
        }

        match &mut self.state {
            SlotState::Bound(binding) => Some(binding.as_mut()),
            _ => None,
        }
    }
}

impl Default for AnimationSlot {
    fn default() -> Self {
        Self::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct Counting(Arc<AtomicU32>);

    impl AnimationBinding for Counting {
        fn advance(&mut self, _delta_secs: f64) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn slot_is_unbound_until_bind() {
        let (binder, mut slot) = animation_handoff();
        assert!(slot.poll().is_none());
        assert!(!slot.is_bound());

        let calls = Arc::new(AtomicU32::new(0));
        assert!(binder.bind(Counting(calls.clone())));

        slot.poll().expect("bound").advance(0.1);
        assert!(slot.is_bound());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn binding_survives_producer_drop() {
        let (binder, mut slot) = animation_handoff();
        let calls = Arc::new(AtomicU32::new(0));
        binder.bind(Counting(calls.clone()));

        for _ in 0..3 {
            slot.poll().expect("bound").advance(0.016);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn dropped_binder_leaves_slot_unbound() {
        let (binder, mut slot) = animation_handoff();
        drop(binder);
        for _ in 0..10 {
            assert!(slot.poll().is_none());
        }
        assert!(!slot.is_bound());
    }

    #[test]
    fn bind_from_another_thread() {
        let (binder, mut slot) = animation_handoff();
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();
        std::thread::spawn(move || binder.bind(Counting(c)))
            .join()
            .unwrap();
        assert!(slot.poll().is_some());
    }

    #[test]
    fn bind_after_slot_dropped_reports_failure() {
        let (binder, slot) = animation_handoff();
        drop(slot);
        assert!(!binder.bind(Counting(Arc::new(AtomicU32::new(0)))));
    }
}
