use super::village::Village;
use std::collections::VecDeque;

/// The villages still waiting to be rescued, in route order
///
/// Strictly first-in-first-out and only ever shrinks: villages leave from
/// the front and nothing is put back.
#[derive(Debug, Clone, Default)]
pub struct VillageQueue {
    villages: VecDeque<Village>,
}

impl VillageQueue {
    pub fn from_villages(villages: impl IntoIterator<Item = Village>) -> Self {
        VillageQueue {
            villages: villages.into_iter().collect(),
        }
    }

    /// The active village, or None once every village is rescued
    pub fn peek_front(&self) -> Option<&Village> {
        self.villages.front()
    }

    pub fn pop_front(&mut self) -> Option<Village> {
        self.villages.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.villages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.villages.len()
    }

    /// Names of the remaining villages, front first
    pub fn names(&self) -> Vec<&str> {
        self.villages.iter().map(Village::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(names: &[&str]) -> VillageQueue {
        VillageQueue::from_villages(names.iter().map(|name| Village::new(*name)))
    }

    #[test]
    fn test_peek_does_not_remove() {
        let queue = queue_of(&["Aralık", "Ocak"]);
        assert_eq!(queue.peek_front().map(Village::name), Some("Aralık"));
        assert_eq!(queue.peek_front().map(Village::name), Some("Aralık"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_pops_leave_remaining_suffix() {
        let names = ["Aralık", "Ocak", "Şubat", "Mart", "Nisan"];

        for pops in 0..=names.len() {
            let mut queue = queue_of(&names);
            for expected in &names[..pops] {
                assert_eq!(queue.pop_front().map(|v| v.name().to_string()), Some(expected.to_string()));
            }

            assert_eq!(queue.len(), names.len() - pops);
            assert_eq!(queue.names(), names[pops..].to_vec());
        }
    }

    #[test]
    fn test_empty_queue_is_terminal() {
        let mut queue = queue_of(&["Haziran"]);
        assert!(queue.pop_front().is_some());

        assert!(queue.is_empty());
        assert!(queue.peek_front().is_none());
        assert!(queue.pop_front().is_none());
        assert!(queue.names().is_empty());
    }
}
