//! Upgrade offers and run-progression milestones.
//!
//! Offers hold a set of exactly three distinct modifiers drawn without
//! replacement from the fixed pool. Boss kills and companion discovery
//! always open an offer; milestone offers are throttled by distance.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use homebound_core::components::{CompanionStats, Player, RunStats};
use homebound_core::constants::*;
use homebound_core::enums::{OfferReason, UpgradeId};
use homebound_core::state::{OfferView, UpgradeView};

/// One entry of the fixed upgrade pool.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub title: &'static str,
    pub description: &'static str,
}

pub const UPGRADE_POOL: &[UpgradeDef] = &[
    UpgradeDef {
        id: UpgradeId::BiteDamage,
        title: "Dog Bite +2",
        description: "Dog does more bite damage.",
    },
    UpgradeDef {
        id: UpgradeId::BiteRate,
        title: "Dog Bites Faster",
        description: "Dog bites more often.",
    },
    UpgradeDef {
        id: UpgradeId::CollectRadius,
        title: "Bigger Item Radius",
        description: "Dog collects pickups from further away.",
    },
    UpgradeDef {
        id: UpgradeId::PackHeal,
        title: "Dog Healing",
        description: "+2 HP per second over time.",
    },
    UpgradeDef {
        id: UpgradeId::MaxHealth,
        title: "+25 Max HP",
        description: "Increase your max health.",
    },
    UpgradeDef {
        id: UpgradeId::AmmoBonus,
        title: "More Ammo Found",
        description: "+10 ammo per ammo pickup.",
    },
];

/// An open offer. Discarded once a choice is made or the state leaves
/// UpgradeSelect.
#[derive(Debug, Clone)]
pub struct UpgradeOffer {
    pub reason: OfferReason,
    pub choices: Vec<&'static UpgradeDef>,
}

impl UpgradeOffer {
    pub fn view(&self) -> OfferView {
        OfferView {
            reason: self.reason,
            reason_label: self.reason.label().to_string(),
            choices: self
                .choices
                .iter()
                .map(|def| UpgradeView {
                    id: def.id,
                    title: def.title.to_string(),
                    description: def.description.to_string(),
                })
                .collect(),
        }
    }
}

/// Try to open an offer. Milestone offers within the throttle distance of
/// the previous offer are rejected; BossDown and CompanionFound always
/// pass. Opening records the offer distance.
pub fn try_open(
    stats: &mut RunStats,
    reason: OfferReason,
    rng: &mut ChaCha8Rng,
) -> Option<UpgradeOffer> {
    let throttled = stats.distance - stats.last_upgrade_at < OFFER_THROTTLE_DISTANCE;
    if throttled && reason == OfferReason::Milestone {
        return None;
    }
    stats.last_upgrade_at = stats.distance;
    Some(UpgradeOffer {
        reason,
        choices: draw_three(rng),
    })
}

/// Draw three distinct modifiers without replacement.
fn draw_three(rng: &mut ChaCha8Rng) -> Vec<&'static UpgradeDef> {
    let mut pool: Vec<&'static UpgradeDef> = UPGRADE_POOL.iter().collect();
    let mut picks = Vec::with_capacity(3);
    while picks.len() < 3 && !pool.is_empty() {
        let i = rng.gen_range(0..pool.len());
        picks.push(pool.swap_remove(i));
    }
    picks
}

/// Apply the chosen modifier. Called exactly once per selection.
pub fn apply(id: UpgradeId, player: &mut Player, companion: &mut CompanionStats) {
    match id {
        UpgradeId::BiteDamage => companion.bite_damage += 2.0,
        UpgradeId::BiteRate => {
            companion.bite_cooldown =
                (companion.bite_cooldown - 0.35).max(COMPANION_MIN_BITE_COOLDOWN);
        }
        UpgradeId::CollectRadius => companion.collect_radius += 25.0,
        UpgradeId::PackHeal => companion.heal_per_sec += 2.0,
        UpgradeId::MaxHealth => {
            player.health_max += 25.0;
            player.health = (player.health + 25.0).min(player.health_max);
        }
        UpgradeId::AmmoBonus => companion.ammo_bonus += 10,
    }
}

/// Periodic milestone check: far enough in, long enough since the last
/// offer, companion already found, and no boss fight in progress.
pub fn milestone_due(stats: &RunStats, companion_found: bool) -> bool {
    companion_found
        && stats.distance > MILESTONE_MIN_DISTANCE
        && stats.distance - stats.last_upgrade_at > MILESTONE_OFFER_GAP
        && !stats.boss_alive
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn draws_are_pairwise_distinct() {
        let mut rng = rng();
        for _ in 0..50 {
            let picks = draw_three(&mut rng);
            assert_eq!(picks.len(), 3);
            assert_ne!(picks[0].id, picks[1].id);
            assert_ne!(picks[0].id, picks[2].id);
            assert_ne!(picks[1].id, picks[2].id);
        }
    }

    #[test]
    fn milestone_throttled_close_to_last_offer() {
        let mut rng = rng();
        let mut stats = RunStats {
            distance: 300.0,
            last_upgrade_at: 250.0,
            ..Default::default()
        };
        assert!(try_open(&mut stats, OfferReason::Milestone, &mut rng).is_none());
        // Throttle does not apply to guaranteed reasons.
        assert!(try_open(&mut stats, OfferReason::BossDown, &mut rng).is_some());
        assert_eq!(stats.last_upgrade_at, 300.0);
    }

    #[test]
    fn milestone_allowed_past_throttle() {
        let mut rng = rng();
        let mut stats = RunStats {
            distance: 500.0,
            last_upgrade_at: 250.0,
            ..Default::default()
        };
        let offer = try_open(&mut stats, OfferReason::Milestone, &mut rng);
        assert!(offer.is_some());
        assert_eq!(stats.last_upgrade_at, 500.0);
    }

    #[test]
    fn apply_max_health_heals_too() {
        let mut player = Player::default();
        let mut companion = CompanionStats::default();
        player.health = 40.0;
        apply(UpgradeId::MaxHealth, &mut player, &mut companion);
        assert_eq!(player.health_max, 125.0);
        assert_eq!(player.health, 65.0);
    }

    #[test]
    fn bite_cooldown_floors() {
        let mut player = Player::default();
        let mut companion = CompanionStats::default();
        for _ in 0..10 {
            apply(UpgradeId::BiteRate, &mut player, &mut companion);
        }
        assert_eq!(companion.bite_cooldown, COMPANION_MIN_BITE_COOLDOWN);
    }

    #[test]
    fn milestone_due_requires_all_conditions() {
        let stats = RunStats {
            distance: 700.0,
            last_upgrade_at: 100.0,
            ..Default::default()
        };
        assert!(milestone_due(&stats, true));
        assert!(!milestone_due(&stats, false));

        let boss = RunStats {
            boss_alive: true,
            ..stats.clone()
        };
        assert!(!milestone_due(&boss, true));

        let recent = RunStats {
            last_upgrade_at: 600.0,
            ..stats
        };
        assert!(!milestone_due(&recent, true));
    }
}
