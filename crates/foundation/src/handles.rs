/// Generational handle: a slot index plus the generation the slot had when
/// the handle was issued. A handle whose generation no longer matches its
/// slot is stale and must be treated as absent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn same_slot_different_generation_is_distinct() {
        let a = Handle::new(0, 1);
        let b = Handle::new(0, 2);
        assert_ne!(a, b);
        assert_eq!(a.index(), b.index());
        assert!(a < b);
    }
}
