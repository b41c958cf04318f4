/// Two-state toggle parameterized by its initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flag(bool);

impl Flag {
    pub const fn new(initial: bool) -> Self {
        Self(initial)
    }

    pub const fn get(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn set(&mut self, value: bool) {
        self.0 = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        for initial in [false, true] {
            let mut flag = Flag::new(initial);
            flag.toggle();
            assert_eq!(flag.get(), !initial);
            flag.toggle();
            assert_eq!(flag.get(), initial);
        }
    }

    #[test]
    fn set_is_idempotent() {
        let mut flag = Flag::default();
        flag.set(true);
        flag.set(true);
        assert!(flag.get());
        flag.set(false);
        assert!(!flag.get());
    }
}
