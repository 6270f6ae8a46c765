use super::*;

fn layout<T>(deque: &OracleDeque<'_, T>) -> String {
    deque
        .snapshot()
        .iter()
        .map(|state| match state {
            SlotState::LeftEmpty => 'L',
            SlotState::RightEmpty => 'R',
            SlotState::Occupied(_) => 'x',
        })
        .collect()
}

#[test]
fn construct() -> Result<(), DequeError> {
    let deque = OracleDeque::<u8>::new(3)?;
    assert_eq!(3, deque.capacity());
    assert_eq!(0, deque.len());
    assert!(deque.is_empty());
    assert_eq!("LLLLRRRR", layout(&deque));
    assert_eq!(3, deque.left_hint.load(Ordering::Relaxed));
    assert_eq!(4, deque.right_hint.load(Ordering::Relaxed));
    Ok(())
}

#[test]
fn invalid_capacity() {
    assert_eq!(
        Some(DequeError::InvalidCapacity),
        OracleDeque::<u8>::new(0).err()
    );
    assert_eq!(
        Some(DequeError::InvalidCapacity),
        OracleDeque::<u8>::new(usize::MAX).err()
    );
}

#[test]
fn hints_follow_frontiers() -> Result<(), DequeError> {
    let (a, b) = ('a', 'b');
    let deque = OracleDeque::new(2)?;
    deque.left_push(&a)?;
    assert_eq!(1, deque.left_hint.load(Ordering::Relaxed));
    deque.right_push(&b)?;
    assert_eq!(4, deque.right_hint.load(Ordering::Relaxed));
    assert_eq!("LLxxRR", layout(&deque));
    assert_eq!(Ok(&a), deque.left_pop());
    assert_eq!(2, deque.left_hint.load(Ordering::Relaxed));
    assert_eq!(Ok(&b), deque.right_pop());
    assert_eq!(3, deque.right_hint.load(Ordering::Relaxed));
    assert_eq!("LLLRRR", layout(&deque));
    Ok(())
}

#[test]
fn push_restamps_neighbour() -> Result<(), DequeError> {
    let a = 1u64;
    let deque = OracleDeque::new(1)?;
    deque.left_push(&a)?;
    // left push at 1 sealed slot 2 and wrote slot 1
    assert_eq!(1, deque.slots[1].load().version());
    assert_eq!(1, deque.slots[2].load().version());
    assert!(deque.slots[2].load().is_right_empty());
    Ok(())
}

#[test]
fn stale_hints_recover() -> Result<(), DequeError> {
    let values = [10, 20, 30];
    let deque = OracleDeque::new(4)?;
    for v in &values {
        deque.right_push(v)?;
    }
    deque.left_hint.store(usize::MAX, Ordering::Relaxed);
    deque.right_hint.store(0, Ordering::Relaxed);
    assert_eq!(Ok(&10), deque.left_pop());
    deque.left_hint.store(0, Ordering::Relaxed);
    deque.right_hint.store(usize::MAX, Ordering::Relaxed);
    assert_eq!(Ok(&30), deque.right_pop());
    deque.left_hint.store(7, Ordering::Relaxed);
    assert_eq!(Ok(&20), deque.left_pop());
    assert_eq!(Err(DequeError::Empty), deque.right_pop());
    Ok(())
}

#[test]
fn edge_reports_full() -> Result<(), DequeError> {
    let values = [1, 2, 3];
    let deque = OracleDeque::new(2)?;
    deque.left_push(&values[0])?;
    deque.left_push(&values[1])?;
    // popping both from the right leaves the left frontier on its edge
    assert_eq!(Ok(&values[0]), deque.right_pop());
    assert_eq!(Ok(&values[1]), deque.right_pop());
    assert_eq!("LRRRRR", layout(&deque));
    assert_eq!(Err(DequeError::Full), deque.left_push(&values[2]));
    assert_eq!(0, deque.len());
    deque.right_push(&values[2])?;
    assert_eq!(Ok(&values[2]), deque.left_pop());
    Ok(())
}

#[test]
fn retry_budget() -> Result<(), DequeError> {
    let a = 0u32;
    let mut config = Config::new(1);
    _ = config.set_max_retries(Some(3)).set_backoff(true);
    let mut deque = OracleDeque::with_config(&config)?;
    // no left frontier exists, every attempt fails validation
    for slot in deque.slots.iter_mut() {
        slot.reset(Slot::right_empty(0));
    }
    assert_eq!(Err(DequeError::Contended), deque.left_push(&a));
    assert_eq!(0, deque.len());
    assert_eq!(Err(DequeError::Contended), deque.left_pop());
    deque.clear();
    deque.left_push(&a)?;
    assert_eq!(Ok(&a), deque.left_pop());
    Ok(())
}

#[test]
fn clear_resets_and_bumps_versions() -> Result<(), DequeError> {
    let values = [1, 2, 3, 4];
    let mut deque = OracleDeque::new(4)?;
    deque.left_push(&values[0])?;
    deque.right_push(&values[1])?;
    deque.right_push(&values[2])?;
    assert_eq!(Ok(&values[0]), deque.left_pop());
    let before: Vec<u64> = deque.slots.iter().map(|s| s.load().version()).collect();
    deque.clear();
    assert_eq!("LLLLLRRRRR", layout(&deque));
    assert_eq!(0, deque.len());
    assert_eq!(4, deque.left_hint.load(Ordering::Relaxed));
    assert_eq!(5, deque.right_hint.load(Ordering::Relaxed));
    for (slot, version) in deque.slots.iter().zip(before) {
        assert_eq!(version + 1, slot.load().version());
    }
    Ok(())
}

#[test]
fn drain_left_to_right() -> Result<(), DequeError> {
    let values = ["a", "b", "c", "d"];
    let mut deque = OracleDeque::new(4)?;
    deque.left_push(&values[1])?;
    deque.left_push(&values[0])?;
    deque.right_push(&values[2])?;
    deque.right_push(&values[3])?;
    let drained: Vec<&str> = deque.drain().into_iter().copied().collect();
    assert_eq!(values.to_vec(), drained);
    assert!(deque.is_empty());
    assert_eq!(Err(DequeError::Empty), deque.left_pop());
    Ok(())
}

#[test]
fn send_and_sync() -> Result<(), DequeError> {
    fn assert_send_sync<S: Send + Sync>(_: &S) {}
    let value = 5u64;
    let deque = OracleDeque::new(1)?;
    deque.left_push(&value)?;
    assert_send_sync(&deque);
    assert_eq!(Ok(&value), deque.right_pop());
    Ok(())
}
