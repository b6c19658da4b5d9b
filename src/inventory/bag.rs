use super::error::InventoryError;
use crate::item::Item;

type Link = Option<Box<Node>>;

/// One link in the bag's chain. Each node owns the next one.
#[derive(Debug)]
struct Node {
    item: Item,
    next: Link,
}

/// The player's inventory
///
/// A capacity-bounded stack backed by a singly-linked list. `head` is the
/// most recently pushed item; items can also be pulled out from anywhere
/// in the chain by name (see [`Bag::use_item`]).
///
/// `size` always equals the number of nodes reachable from `head`.
#[derive(Debug)]
pub struct Bag {
    head: Link,
    capacity: usize,
    size: usize,
}

impl Bag {
    /// Creates an empty bag that can hold up to `capacity` items
    pub fn new(capacity: usize) -> Result<Self, InventoryError> {
        if capacity == 0 {
            return Err(InventoryError::ZeroCapacity);
        }

        Ok(Bag {
            head: None,
            capacity,
            size: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.capacity - self.size
    }

    /// Pushes an item on top of the bag
    ///
    /// A full bag never evicts anything. The item is handed back inside
    /// the error so the caller decides what happens to it.
    pub fn try_push(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::BagFull {
                item,
                capacity: self.capacity,
            });
        }

        let node = Box::new(Node {
            item,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Pushes an item on top of the bag
    ///
    /// Returns false (and discards the item) if the bag is full.
    pub fn push(&mut self, item: Item) -> bool {
        self.try_push(item).is_ok()
    }

    /// Removes and returns the most recently pushed item
    ///
    /// Returns None if the bag is empty.
    pub fn pop(&mut self) -> Option<Item> {
        self.head.take().map(|node| {
            let Node { item, next } = *node;
            self.head = next;
            self.size -= 1;
            item
        })
    }

    /// Removes the first item (from the top down) with exactly this name
    ///
    /// Returns true if an item was found and removed.
    pub fn use_item(&mut self, name: &str) -> bool {
        let removed = unlink_first(&mut self.head, name);
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Returns true if any item in the bag has exactly this name
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|item| item.name() == name)
    }

    /// Item names from top to bottom
    pub fn view(&self) -> Vec<String> {
        self.iter().map(|item| item.name().to_string()).collect()
    }

    /// Snapshot of every item from top to bottom
    pub fn all_items(&self) -> Vec<Item> {
        self.iter().cloned().collect()
    }

    /// Iterates over the items from top to bottom without removing them
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// Cuts the first node named `name` out of the chain starting at `link`
fn unlink_first(link: &mut Link, name: &str) -> bool {
    match link {
        None => false,
        Some(node) if node.item.name() == name => {
            *link = node.next.take();
            true
        }
        Some(node) => unlink_first(&mut node.next, name),
    }
}

impl Drop for Bag {
    fn drop(&mut self) {
        // Unlink one node at a time so a long chain isn't dropped recursively
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

/// Borrowing iterator over a bag, top of the stack first
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

impl<'a> IntoIterator for &'a Bag {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
