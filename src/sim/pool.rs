//! Fixed-capacity slot pools
//!
//! Slots are never removed, only flagged inactive and reused. Allocation is a
//! linear scan for the first free slot, so pool order is stable and
//! deterministic (collision resolution relies on it).

/// Something that can live in a pool slot
pub trait Slot {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

/// A fixed number of reusable slots
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot> Pool<T> {
    /// Create a pool of `capacity` inactive slots built by `make`
    pub fn new(capacity: usize, mut make: impl FnMut() -> T) -> Self {
        let slots = (0..capacity).map(|_| make()).collect();
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First free slot in pool order, if any
    pub fn first_free(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| !s.is_active())
    }

    /// Index of the first free slot, if any
    pub fn first_free_index(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_active())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// All slots, active or not
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Dummy {
        active: bool,
        tag: u32,
    }

    impl Slot for Dummy {
        fn is_active(&self) -> bool {
            self.active
        }
        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    #[test]
    fn test_first_free_scans_in_order() {
        let mut pool = Pool::new(3, Dummy::default);
        pool.first_free().unwrap().active = true;
        pool.first_free().unwrap().active = true;
        assert_eq!(pool.first_free_index(), Some(2));

        // Freeing an earlier slot makes it the next one handed out
        pool.get_mut(0).unwrap().deactivate();
        let slot = pool.first_free().unwrap();
        slot.active = true;
        slot.tag = 7;
        assert_eq!(pool.get(0).unwrap().tag, 7);
    }

    #[test]
    fn test_exhausted_pool() {
        let mut pool = Pool::new(2, Dummy::default);
        for _ in 0..2 {
            pool.first_free().unwrap().active = true;
        }
        assert!(pool.first_free().is_none());
        assert_eq!(pool.active_count(), 2);

        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.capacity(), 2);
    }
}
