// GameWorld struct and quest orchestration
//
// This module contains the GameWorld struct which owns all quest state:
// the rescue route, the player's bag, the saved-village list and the full
// village roster. Every player action goes through a GameWorld method.

use crate::inventory::Bag;
use crate::item::Item;
use crate::journal::{Journal, JournalKind};
use crate::search::BinarySearchTree;
use crate::seed::{SeedData, SeedError};
use crate::village::{Village, VillageQueue};

use super::rules::RescueRules;
use super::types::{AdvanceOutcome, RescueError, RescueReport};

/// GameWorld encapsulates a single play session
///
/// It is built once from seed data and owned by whoever drives the game.
/// All results are returned to the caller; nothing here is fatal.
#[derive(Debug)]
pub struct GameWorld {
    queue: VillageQueue,
    bag: Bag,
    saved_villages: Vec<String>,
    roster: Vec<Village>,
    rules: RescueRules,
    journal: Journal,
}

impl GameWorld {
    /// Builds the roster, route, rules and an empty bag from seed data
    ///
    /// # Returns
    /// Err if the seed breaks one of its invariants (see [`SeedData::validate`])
    pub fn initialize(seed: SeedData) -> Result<Self, SeedError> {
        seed.validate()?;

        let roster = seed.build_villages();
        let bag = Bag::new(seed.bag_capacity).map_err(|_| SeedError::ZeroCapacity)?;

        tracing::debug!(
            "Initialized world: {} villages, bag capacity {}",
            roster.len(),
            seed.bag_capacity
        );

        Ok(GameWorld {
            queue: VillageQueue::from_villages(roster.iter().cloned()),
            bag,
            saved_villages: Vec::new(),
            rules: RescueRules::from_seed(&seed.requirements),
            roster,
            journal: Journal::new(),
        })
    }

    // ======================================================================
    // Queries
    // ======================================================================

    /// The village the player is currently at, None once the quest is done
    pub fn active_village(&self) -> Option<&Village> {
        self.queue.peek_front()
    }

    pub fn remaining_village_names(&self) -> Vec<&str> {
        self.queue.names()
    }

    pub fn saved_village_names(&self) -> &[String] {
        &self.saved_villages
    }

    /// Every village in route order, rescued or not
    pub fn all_villages(&self) -> &[Village] {
        &self.roster
    }

    pub fn is_quest_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// Items the active village asks for before it can be rescued
    pub fn active_requirements(&self) -> &[String] {
        self.active_village()
            .map(|village| self.rules.requirements_for(village.name()))
            .unwrap_or(&[])
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn bag_view(&self) -> Vec<String> {
        self.bag.view()
    }

    pub fn bag_size(&self) -> usize {
        self.bag.len()
    }

    pub fn bag_capacity(&self) -> usize {
        self.bag.capacity()
    }

    pub fn rules(&self) -> &RescueRules {
        &self.rules
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    // ======================================================================
    // Actions
    // ======================================================================

    /// Tries to rescue the active village and move on to the next one
    ///
    /// On success the village's required items are spent from the bag,
    /// the village is marked saved, and then each of its items is pushed
    /// into the bag in order. Items that don't fit are listed in
    /// [`RescueReport::rejected`].
    ///
    /// # Returns
    /// - `Ok(AdvanceOutcome::QuestComplete)` if there is nothing left to rescue
    /// - `Err(RescueError::PreconditionUnmet)` if required items are missing;
    ///   nothing is changed in that case
    pub fn advance(&mut self) -> Result<AdvanceOutcome, RescueError> {
        let Some(active) = self.queue.peek_front() else {
            tracing::debug!("Advance requested but every village is already saved");
            return Ok(AdvanceOutcome::QuestComplete);
        };
        let village_name = active.name().to_string();

        let missing = self.rules.missing_for(&village_name, &self.bag);
        if !missing.is_empty() {
            let error = RescueError::PreconditionUnmet {
                village: village_name,
                missing,
            };
            tracing::warn!("Rescue blocked: {}", error);
            self.journal.record(JournalKind::Blocked, error.to_string());
            return Err(error);
        }

        // Spend required items before the village's own items arrive
        let consumed = self.rules.requirements_for(&village_name).to_vec();
        for name in &consumed {
            self.bag.use_item(name);
        }

        let Some(village) = self.queue.pop_front() else {
            return Ok(AdvanceOutcome::QuestComplete);
        };
        self.saved_villages.push(village_name.clone());

        let mut collected = Vec::new();
        let mut rejected = Vec::new();
        for item in village.items() {
            match self.bag.try_push(item.clone()) {
                Ok(()) => collected.push(item.name().to_string()),
                Err(error) => {
                    if let Some(refused) = error.into_rejected_item() {
                        rejected.push(refused.name().to_string());
                    }
                }
            }
        }

        tracing::info!(
            "Rescued {}: collected {}, rejected {}",
            village_name,
            collected.len(),
            rejected.len()
        );
        self.record_rescue(&village_name, &consumed, &rejected);

        Ok(AdvanceOutcome::Rescued(RescueReport {
            village: village_name,
            consumed,
            collected,
            rejected,
        }))
    }

    fn record_rescue(&mut self, village: &str, consumed: &[String], rejected: &[String]) {
        if !consumed.is_empty() {
            self.journal.record(
                JournalKind::Inventory,
                format!("Required items {} were used to save {}.", quoted(consumed), village),
            );
        }
        self.journal
            .record(JournalKind::Rescue, format!("You have saved {}!", village));

        if !rejected.is_empty() {
            tracing::warn!("Bag full, left behind: {}", rejected.join(", "));
            self.journal.record(
                JournalKind::Rejected,
                format!("Your bag was full! Could not collect: {}", rejected.join(", ")),
            );
        }

        if self.queue.is_empty() {
            self.journal.record(
                JournalKind::Complete,
                "Congratulations! You have saved all the villages!",
            );
        }
    }

    /// Puts an item on top of the bag
    ///
    /// Returns false if the bag is full; the item is discarded.
    pub fn bag_push(&mut self, item: Item) -> bool {
        let name = item.name().to_string();
        let pushed = self.bag.push(item);

        if pushed {
            tracing::debug!("Pushed {} ({}/{})", name, self.bag.len(), self.bag.capacity());
            self.journal
                .record(JournalKind::Inventory, format!("Added item: {}", name));
        } else {
            tracing::warn!("Bag full, discarded {}", name);
            self.journal.record(
                JournalKind::Rejected,
                format!("Your bag is full! Could not add: {}", name),
            );
        }
        pushed
    }

    /// Removes the most recently added item from the bag
    pub fn bag_pop(&mut self) -> Option<Item> {
        let popped = self.bag.pop();

        match &popped {
            Some(item) => self
                .journal
                .record(JournalKind::Inventory, format!("Removed item: {}", item.name())),
            None => self
                .journal
                .record(JournalKind::Inventory, "Your bag is already empty."),
        }
        popped
    }

    /// Uses up the first item in the bag with this exact name
    pub fn bag_use_item(&mut self, name: &str) -> bool {
        let used = self.bag.use_item(name);

        if used {
            self.journal
                .record(JournalKind::Inventory, format!("You used the item: {}", name));
        } else {
            self.journal
                .record(JournalKind::Inventory, format!("There is no {} in your bag.", name));
        }
        used
    }

    /// Looks for an item in the bag, ignoring case
    ///
    /// A search tree is built from the bag's current contents for this one
    /// query and dropped afterwards.
    pub fn search_bag(&mut self, query: &str) -> bool {
        let Some(needle) = normalize_query(query) else {
            self.journal
                .record(JournalKind::Search, "Please enter an item name to search.");
            return false;
        };

        let found = folded_tree(self.bag.iter()).search(&needle);
        let message = if found {
            format!("Found '{}' in your bag!", needle)
        } else {
            format!("Could not find '{}' in your bag.", needle)
        };
        self.journal.record(JournalKind::Search, message);
        found
    }

    /// Names of every village (in route order) holding an item called
    /// `query`, ignoring case. Rescued villages are included.
    pub fn search_all_villages(&mut self, query: &str) -> Vec<String> {
        let Some(needle) = normalize_query(query) else {
            self.journal
                .record(JournalKind::Search, "Please enter an item name to search.");
            return Vec::new();
        };

        let found: Vec<String> = self
            .roster
            .iter()
            .filter(|village| folded_tree(village.items()).search(&needle))
            .map(|village| village.name().to_string())
            .collect();

        let message = if found.is_empty() {
            format!("Could not find '{}' in any village.", needle)
        } else {
            format!("Found '{}' in the following village(s): {}", needle, found.join(", "))
        };
        self.journal.record(JournalKind::Search, message);
        found
    }
}

/// Lower-cases a search query; None if it is blank
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Builds a throwaway search tree keyed by lower-cased item names
fn folded_tree<'a>(items: impl IntoIterator<Item = &'a Item>) -> BinarySearchTree {
    items.into_iter().map(Item::with_folded_name).collect()
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{RequirementSeed, VillageSeed};

    fn two_village_world(capacity: usize) -> GameWorld {
        GameWorld::initialize(SeedData {
            bag_capacity: capacity,
            villages: vec![
                VillageSeed::new("V1", &[("a", 1), ("b", 2), ("c", 3)]),
                VillageSeed::new("V2", &[("d", 4), ("e", 5), ("f", 6)]),
            ],
            requirements: Vec::new(),
        })
        .unwrap()
    }

    fn gated_world() -> GameWorld {
        GameWorld::initialize(SeedData {
            bag_capacity: 10,
            villages: vec![
                VillageSeed::new("Mart", &[("gürz", 8), ("miğfer", 6), ("altın", 3)]),
                VillageSeed::new("Nisan", &[("balta", 8), ("harita", 4), ("halat", 2)]),
                VillageSeed::new("Mayıs", &[("arbalet", 9), ("bıçak", 5), ("kibrit", 1)]),
            ],
            requirements: vec![RequirementSeed::new("Nisan", &["balta", "iksir"])],
        })
        .unwrap()
    }

    fn rescued(outcome: Result<AdvanceOutcome, RescueError>) -> RescueReport {
        match outcome {
            Ok(AdvanceOutcome::Rescued(report)) => report,
            other => panic!("expected a rescue, got {:?}", other),
        }
    }

    #[test]
    fn test_initialize_rejects_invalid_seed() {
        let mut seed = SeedData::default_quest();
        seed.bag_capacity = 0;
        assert!(matches!(GameWorld::initialize(seed), Err(SeedError::ZeroCapacity)));
    }

    #[test]
    fn test_initial_state() {
        let world = GameWorld::initialize(SeedData::default_quest()).unwrap();

        assert_eq!(world.active_village().map(Village::name), Some("Aralık"));
        assert_eq!(world.remaining_village_names().len(), 7);
        assert!(world.saved_village_names().is_empty());
        assert_eq!(world.all_villages().len(), 7);
        assert_eq!(world.bag_size(), 0);
        assert_eq!(world.bag_capacity(), 10);
        assert!(!world.is_quest_complete());
        assert!(world.journal().is_empty());
    }

    #[test]
    fn test_two_villages_overflow_bag() {
        let mut world = two_village_world(4);

        let first = rescued(world.advance());
        assert_eq!(first.village, "V1");
        assert_eq!(first.collected, vec!["a", "b", "c"]);
        assert!(first.rejected.is_empty());
        assert_eq!(world.saved_village_names(), ["V1"]);
        assert_eq!(world.bag_size(), 3);

        let second = rescued(world.advance());
        assert_eq!(second.collected, vec!["d"]);
        assert_eq!(second.rejected, vec!["e", "f"]);
        assert_eq!(world.bag_view(), vec!["d", "c", "b", "a"]);
        assert_eq!(world.bag_size(), 4);
        assert_eq!(world.saved_village_names(), ["V1", "V2"]);
        assert!(world.is_quest_complete());
        assert!(world.active_village().is_none());
        assert!(world.remaining_village_names().is_empty());
    }

    #[test]
    fn test_advance_after_completion_is_noop() {
        let mut world = two_village_world(10);
        rescued(world.advance());
        rescued(world.advance());

        let journal_len = world.journal().len();
        assert_eq!(world.advance(), Ok(AdvanceOutcome::QuestComplete));
        assert_eq!(world.saved_village_names().len(), 2);
        assert_eq!(world.bag_size(), 6);
        assert_eq!(world.journal().len(), journal_len);
    }

    #[test]
    fn test_eleventh_push_fails() {
        let mut world = two_village_world(10);
        for i in 0..10 {
            assert!(world.bag_push(Item::new(format!("item_{}", i), i)));
        }

        assert!(!world.bag_push(Item::named("item_10")));
        assert_eq!(world.bag_size(), 10);
        assert_eq!(
            world.journal().last().map(|e| e.kind),
            Some(JournalKind::Rejected)
        );
    }

    #[test]
    fn test_precondition_blocks_without_items() {
        let mut world = gated_world();
        rescued(world.advance());
        world.bag_push(Item::new("iksir", 5));

        let before_bag = world.bag_view();
        let result = world.advance();

        assert_eq!(
            result,
            Err(RescueError::PreconditionUnmet {
                village: "Nisan".to_string(),
                missing: vec!["balta".to_string()],
            })
        );
        assert_eq!(world.bag_view(), before_bag);
        assert_eq!(world.saved_village_names(), ["Mart"]);
        assert_eq!(world.active_village().map(Village::name), Some("Nisan"));
        assert_eq!(world.remaining_village_names(), vec!["Nisan", "Mayıs"]);
        assert_eq!(world.journal().last().map(|e| e.kind), Some(JournalKind::Blocked));
    }

    #[test]
    fn test_precondition_met_consumes_required_items() {
        let mut world = gated_world();
        rescued(world.advance());
        world.bag_push(Item::new("balta", 1));
        world.bag_push(Item::new("iksir", 5));
        assert_eq!(world.active_requirements(), ["balta", "iksir"]);

        let report = rescued(world.advance());

        assert_eq!(report.village, "Nisan");
        assert_eq!(report.consumed, vec!["balta", "iksir"]);
        assert_eq!(report.collected, vec!["balta", "harita", "halat"]);
        assert!(!world.bag().contains("iksir"));
        // The only balta left is the one Nisan handed over
        assert_eq!(
            world.bag().iter().filter(|i| i.name() == "balta").map(Item::power_score).collect::<Vec<_>>(),
            vec![8]
        );
        assert_eq!(world.bag_size(), 6);
        assert_eq!(world.saved_village_names(), ["Mart", "Nisan"]);
        assert!(world.active_requirements().is_empty());
    }

    #[test]
    fn test_consumed_slots_are_reused_by_village_items() {
        let mut world = GameWorld::initialize(SeedData {
            bag_capacity: 3,
            villages: vec![VillageSeed::new("Nisan", &[("balta", 8), ("harita", 4), ("halat", 2)])],
            requirements: vec![RequirementSeed::new("Nisan", &["kılıç", "iksir"])],
        })
        .unwrap();
        world.bag_push(Item::named("kılıç"));
        world.bag_push(Item::named("ok"));
        world.bag_push(Item::named("iksir"));

        let report = rescued(world.advance());
        assert_eq!(report.collected, vec!["balta", "harita"]);
        assert_eq!(report.rejected, vec!["halat"]);
        assert_eq!(world.bag_view(), vec!["harita", "balta", "ok"]);
    }

    #[test]
    fn test_default_quest_stalls_at_nisan() {
        let mut world = GameWorld::initialize(SeedData::default_quest()).unwrap();

        for _ in 0..3 {
            rescued(world.advance());
        }
        assert_eq!(world.bag_size(), 9);

        let mart = rescued(world.advance());
        assert_eq!(mart.collected, vec!["gürz"]);
        assert_eq!(mart.rejected, vec!["miğfer", "altın"]);

        let err = world.advance().unwrap_err();
        assert_eq!(
            err,
            RescueError::PreconditionUnmet {
                village: "Nisan".to_string(),
                missing: vec!["balta".to_string()],
            }
        );
        assert_eq!(err.to_string(), "Nisan needs balta in your bag");
    }

    #[test]
    fn test_bag_pop_and_use_item() {
        let mut world = two_village_world(5);
        rescued(world.advance());

        assert_eq!(world.bag_pop(), Some(Item::new("c", 3)));
        assert!(world.bag_use_item("a"));
        assert!(!world.bag_use_item("a"));
        assert_eq!(world.bag_view(), vec!["b"]);

        assert!(world.bag_pop().is_some());
        assert_eq!(world.bag_pop(), None);
        assert_eq!(world.bag_size(), 0);
    }

    #[test]
    fn test_search_bag_ignores_case() {
        let mut world = GameWorld::initialize(SeedData::default_quest()).unwrap();
        rescued(world.advance());

        assert!(world.search_bag("Kalkan"));
        assert!(world.search_bag("  Kılıç "));
        assert!(!world.search_bag("yay"));
        assert!(!world.search_bag("   "));
        assert_eq!(
            world.journal().last().map(|e| e.message.as_str()),
            Some("Please enter an item name to search.")
        );
    }

    #[test]
    fn test_search_all_villages() {
        let mut world = GameWorld::initialize(SeedData {
            bag_capacity: 10,
            villages: vec![
                VillageSeed::new("Aralık", &[("kılıç", 10), ("İksir", 8), ("yiyecek", 2)]),
                VillageSeed::new("Ocak", &[("yay", 7), ("ok", 1), ("su", 1)]),
                VillageSeed::new("Şubat", &[("mızrak", 9), ("zırh", 9), ("iksir", 5)]),
            ],
            requirements: Vec::new(),
        })
        .unwrap();

        assert_eq!(world.search_all_villages("IKSIR"), vec!["Şubat"]);
        assert_eq!(world.search_all_villages("Zırh"), vec!["Şubat"]);
        assert_eq!(world.search_all_villages("su"), vec!["Ocak"]);
        assert!(world.search_all_villages("kalkan").is_empty());
        assert!(world.search_all_villages("").is_empty());

        // Rescued villages stay searchable
        rescued(world.advance());
        assert_eq!(world.search_all_villages("kılıç"), vec!["Aralık"]);
    }

    #[test]
    fn test_journal_tracks_rescue_messages() {
        let mut world = two_village_world(4);
        rescued(world.advance());
        rescued(world.advance());

        let kinds: Vec<_> = world.journal().entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                JournalKind::Rescue,
                JournalKind::Rescue,
                JournalKind::Rejected,
                JournalKind::Complete,
            ]
        );
        assert_eq!(
            world.journal().entries()[2].message,
            "Your bag was full! Could not collect: e, f"
        );
    }
}
