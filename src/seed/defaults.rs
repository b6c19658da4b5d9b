use super::types::{RequirementSeed, SeedData, VillageSeed};

/// Default bag capacity for the built-in quest
pub const DEFAULT_BAG_CAPACITY: usize = 10;

impl SeedData {
    /// The built-in quest: seven villages, a bag of ten
    ///
    /// Nisan can only be rescued while the bag holds both a balta and an
    /// iksir; both are spent on the rescue.
    pub fn default_quest() -> Self {
        let villages = vec![
            VillageSeed::new("Aralık", &[("kılıç", 10), ("kalkan", 8), ("yiyecek", 2)]),
            VillageSeed::new("Ocak", &[("yay", 7), ("ok", 1), ("su", 1)]),
            VillageSeed::new("Şubat", &[("mızrak", 9), ("zırh", 9), ("iksir", 5)]),
            VillageSeed::new("Mart", &[("gürz", 8), ("miğfer", 6), ("altın", 3)]),
            VillageSeed::new("Nisan", &[("balta", 8), ("harita", 4), ("halat", 2)]),
            VillageSeed::new("Mayıs", &[("arbalet", 9), ("bıçak", 5), ("kibrit", 1)]),
            VillageSeed::new("Haziran", &[("büyülü asa", 10), ("tılsım", 7), ("pelerin", 5)]),
        ];

        SeedData {
            bag_capacity: DEFAULT_BAG_CAPACITY,
            villages,
            requirements: vec![RequirementSeed::new("Nisan", &["balta", "iksir"])],
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::default_quest()
    }
}
