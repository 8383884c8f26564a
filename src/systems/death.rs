//! Death resolution.
//!
//! Every unit whose health is at or below zero and whose death has not
//! been processed gets flagged, then its ability (if any) is bound through
//! the registry and run. The pass repeats until no unflagged dead unit is
//! left, so a unit killed by another unit's ability still fires its own
//! ability once before it is pruned. A unit is never flagged twice, so no
//! ability fires twice.

use crate::abilities::{AbilityContext, AbilityRegistry};
use crate::core::{GameRng, UnitId, World};

/// Counts from one death pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeathReport {
    /// Units flagged this pass.
    pub deaths: usize,
    /// Abilities that ran.
    pub abilities_fired: usize,
    /// Abilities that could not be bound and were skipped.
    pub abilities_failed: usize,
    /// Units removed from the world.
    pub pruned: usize,
}

/// Flag dead units, fire their abilities, then prune.
pub fn resolve_deaths(world: &mut World, registry: &AbilityRegistry, rng: &mut GameRng) -> DeathReport {
    let mut report = DeathReport::default();

    loop {
        let pending: Vec<UnitId> = world
            .units()
            .iter()
            .filter(|u| u.is_dead() && !u.death_processed)
            .map(|u| u.id)
            .collect();
        if pending.is_empty() {
            break;
        }

        for id in pending {
            let Some(unit) = world.unit_mut(id) else {
                continue;
            };
            if unit.death_processed {
                continue;
            }
            unit.death_processed = true;
            report.deaths += 1;

            let dying = unit.clone();
            let Some(ability_id) = dying.ability.as_ref() else {
                continue;
            };

            match registry.resolve(ability_id, &dying.params) {
                Ok(Some(ability)) => {
                    log::debug!("{} ({}) died: {}", dying.id, dying.card, ability.label());
                    ability.apply(&dying, &mut AbilityContext::new(world, rng));
                    report.abilities_fired += 1;
                }
                Ok(None) => {
                    log::debug!("{} ({}) died: no handler for {}", dying.id, dying.card, ability_id);
                }
                Err(err) => {
                    log::warn!("{} ({}) died: ability skipped: {}", dying.id, dying.card, err);
                    report.abilities_failed += 1;
                }
            }
        }
    }

    report.pruned = world.prune_dead();
    if report.deaths > 0 {
        log::trace!(
            "deaths: {} flagged, {} fired, {} failed, {} pruned",
            report.deaths,
            report.abilities_fired,
            report.abilities_failed,
            report.pruned
        );
    }
    report
}
