/// Issues monotonically increasing request numbers.
///
/// Only the most recently issued number is current; results tagged with an
/// older number must be dropped on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.last
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequence::new();
        assert!(!seq.is_current(0));
        let a = seq.issue();
        assert!(seq.is_current(a));
        let b = seq.issue();
        assert!(b > a);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }
}
