/// Keeps at most one popover of a group open.
///
/// Sibling widgets (city dropdown, date pickers, guest stepper) each hold a
/// key; the parent owns one group and routes every open/close through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverGroup<K> {
    open: Option<K>,
}

impl<K> Default for PopoverGroup<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: Copy + Eq> PopoverGroup<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<K> {
        self.open
    }

    pub fn is_open(&self, key: K) -> bool {
        self.open == Some(key)
    }

    /// Opens `key`, implicitly closing whichever member was open.
    pub fn open(&mut self, key: K) {
        self.open = Some(key);
    }

    /// Closes `key` if it is the open member; otherwise nothing changes.
    pub fn close(&mut self, key: K) {
        if self.open == Some(key) {
            self.open = None;
        }
    }

    pub fn toggle(&mut self, key: K) {
        if self.is_open(key) {
            self.close(key);
        } else {
            self.open(key);
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Slot {
        City,
        CheckIn,
        CheckOut,
    }

    #[test]
    fn test_opening_one_closes_the_others() {
        let mut group = PopoverGroup::new();
        group.open(Slot::City);
        group.open(Slot::CheckIn);
        assert!(group.is_open(Slot::CheckIn));
        assert!(!group.is_open(Slot::City));
        assert!(!group.is_open(Slot::CheckOut));
    }

    #[test]
    fn test_close_of_other_member_is_ignored() {
        let mut group = PopoverGroup::new();
        group.open(Slot::CheckOut);
        group.close(Slot::City);
        assert_eq!(group.current(), Some(Slot::CheckOut));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut group = PopoverGroup::<Slot>::new();
        group.close(Slot::City);
        group.close_all();
        assert_eq!(group.current(), None);
    }

    #[test]
    fn test_toggle() {
        let mut group = PopoverGroup::new();
        group.toggle(Slot::City);
        assert!(group.is_open(Slot::City));
        group.toggle(Slot::CheckIn);
        assert!(group.is_open(Slot::CheckIn));
        group.toggle(Slot::CheckIn);
        assert_eq!(group.current(), None);
    }
}
