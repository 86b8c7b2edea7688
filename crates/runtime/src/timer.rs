use foundation::handles::Handle;
use foundation::math::precision::stable_total_cmp_f64;
use foundation::time::Time;

/// Identifies one scheduled timer. Stale ids (fired or cancelled) are inert.
pub type TimerId = Handle;

#[derive(Debug)]
struct Pending<T> {
    deadline: Time,
    order: u64,
    payload: T,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    pending: Option<Pending<T>>,
}

/// Single-shot timers driven by engine time.
///
/// Timers never fire on their own: the owner calls [`TimerQueue::poll_expired`]
/// from its tick. Slots are recycled with a bumped generation, so a cancelled
/// id can never cancel or observe a newer timer that reuses its slot.
///
/// Ordering contract: expired timers are returned by `(deadline, schedule order)`.
#[derive(Debug)]
pub struct TimerQueue<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    next_order: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            next_order: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Time, payload: T) -> TimerId {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        let pending = Some(Pending {
            deadline,
            order,
            payload,
        });

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.pending = pending;
            return Handle::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            pending,
        });
        Handle::new(index, 0)
    }

    /// Cancel a pending timer, returning its payload. Stale ids return `None`.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let slot = self.live_slot_mut(id)?;
        let pending = slot.pending.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        Some(pending.payload)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadline(id).is_some()
    }

    pub fn deadline(&self, id: TimerId) -> Option<Time> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.pending.as_ref().map(|p| p.deadline)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.pending.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return every timer whose deadline is at or before `now`.
    pub fn poll_expired(&mut self, now: Time) -> Vec<(TimerId, Time, T)> {
        let mut due: Vec<(u64, TimerId)> = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(p) = &slot.pending {
                if p.deadline <= now {
                    due.push((p.order, Handle::new(index as u32, slot.generation)));
                }
            }
        }

        let mut fired: Vec<(u64, TimerId, Time, T)> = Vec::with_capacity(due.len());
        for (order, id) in due {
            if let Some(slot) = self.live_slot_mut(id) {
                if let Some(p) = slot.pending.take() {
                    slot.generation = slot.generation.wrapping_add(1);
                    self.free.push(id.index());
                    fired.push((order, id, p.deadline, p.payload));
                }
            }
        }

        fired.sort_by(|a, b| stable_total_cmp_f64(a.2.seconds(), b.2.seconds()).then_with(|| a.0.cmp(&b.0)));
        fired
            .into_iter()
            .map(|(_, id, deadline, payload)| (id, deadline, payload))
            .collect()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.pending.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
    }

    fn live_slot_mut(&mut self, id: TimerId) -> Option<&mut Slot<T>> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        (slot.generation == id.generation()).then_some(slot)
    }
}
