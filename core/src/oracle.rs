use crate::common::constants::End;
use crate::slot::AtomicSlot;

/// Turn a possibly stale `hint` into a candidate frontier index for `end`.
///
/// For the left end the frontier is the index `k` where slot `k` is
/// `LeftEmpty` and slot `k + 1` is not; the right end mirrors it with
/// `RightEmpty` and slot `k - 1`. The answer is only a candidate: slots are
/// read one at a time while other threads keep committing, so callers must
/// re-validate both slots before acting on it.
///
/// The hint is first clamped into the searchable range. When it is exact it
/// is returned as is. When it undershoots (both slots are this end's
/// sentinel) the array is scanned toward the interior, and when it overshoots
/// (the slot is not this end's sentinel) it is scanned toward the outer edge.
/// If no scan finds a frontier the clamped hint is returned.
///
/// Never blocks, never allocates.
#[must_use]
pub fn locate(slots: &[AtomicSlot], hint: usize, end: End) -> usize {
    if slots.len() < 2 {
        return hint;
    }
    match end {
        End::Left => locate_left(slots, hint),
        End::Right => locate_right(slots, hint),
    }
}

fn is_left_frontier(slots: &[AtomicSlot], index: usize) -> bool {
    slots[index].load().is_left_empty() && !slots[index + 1].load().is_left_empty()
}

fn is_right_frontier(slots: &[AtomicSlot], index: usize) -> bool {
    slots[index].load().is_right_empty() && !slots[index - 1].load().is_right_empty()
}

fn locate_left(slots: &[AtomicSlot], hint: usize) -> usize {
    let last = slots.len() - 2;
    let k = hint.min(last);
    let current = slots[k].load();
    let previous = slots[k + 1].load();
    if current.is_left_empty() {
        if !previous.is_left_empty() {
            return k;
        }
        return (k + 1..=last)
            .find(|&i| is_left_frontier(slots, i))
            .unwrap_or(k);
    }
    (0..k)
        .rev()
        .find(|&i| is_left_frontier(slots, i))
        .unwrap_or(k)
}

fn locate_right(slots: &[AtomicSlot], hint: usize) -> usize {
    let last = slots.len() - 1;
    let k = hint.clamp(1, last);
    let current = slots[k].load();
    let previous = slots[k - 1].load();
    if current.is_right_empty() {
        if !previous.is_right_empty() {
            return k;
        }
        return (1..k)
            .rev()
            .find(|&i| is_right_frontier(slots, i))
            .unwrap_or(k);
    }
    (k + 1..=last)
        .find(|&i| is_right_frontier(slots, i))
        .unwrap_or(k)
}
