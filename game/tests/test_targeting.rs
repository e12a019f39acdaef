use game::farming::{TilePhase, TilePrompt};
use game::targeting::{Interactor, Prompt, Warning, DEFAULT_INTERACT_DISTANCE, WARNING_DURATION};

use crate::testing::{at, FarmScenario};

mod testing;

#[test]
fn test_aiming_picks_nearest_tile_in_range() {
    let scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("near", at(0, 0))
        .given_tile("far", at(1, 0));
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    let target = interactor.aim(&scenario.game, [0.4, 0.5]);
    assert_eq!(target, Some(scenario.tile("near")));
    let target = interactor.aim(&scenario.game, [1.6, 0.5]);
    assert_eq!(target, Some(scenario.tile("far")));
}

#[test]
fn test_aiming_out_of_range_clears_target() {
    let scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0));
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    assert!(interactor.aim(&scenario.game, [0.5, 0.5]).is_some());
    assert!(interactor.aim(&scenario.game, [9.0, 9.0]).is_none());
    assert_eq!(interactor.prompt(&scenario.game), None);
}

#[test]
fn test_interacting_without_target_is_noop() {
    let mut scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0));
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    let events = interactor.interact(&mut scenario.game, None);
    assert!(events.is_empty());
    let field = scenario.tile("field");
    assert_eq!(
        scenario.game.farming.get_tile(field).unwrap().phase(),
        TilePhase::Bare
    );
}

#[test]
fn test_interacting_forwards_to_targeted_tile() {
    let mut scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0));
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    interactor.aim(&scenario.game, [0.5, 0.5]);
    let events = interactor.interact(&mut scenario.game, None);
    assert!(!events.is_empty());
    let field = scenario.tile("field");
    assert_eq!(
        scenario.game.farming.get_tile(field).unwrap().phase(),
        TilePhase::Plowed
    );
}

#[test]
fn test_denied_planting_raises_timed_warning() {
    let mut scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0));
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    interactor.aim(&scenario.game, [0.5, 0.5]);
    interactor.interact(&mut scenario.game, None);
    let events = interactor.interact(&mut scenario.game, None);
    assert!(events.is_empty());
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Warning(Warning::NoSeedSelected))
    );
    interactor.update(WARNING_DURATION / 2.0);
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Warning(Warning::NoSeedSelected))
    );
    interactor.update(WARNING_DURATION);
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Action(TilePrompt::Plant))
    );
}

#[test]
fn test_out_of_seeds_warning() {
    let mut scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0));
    let wheat = scenario.seed("wheat");
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    interactor.aim(&scenario.game, [0.5, 0.5]);
    interactor.interact(&mut scenario.game, Some(wheat));
    interactor.interact(&mut scenario.game, Some(wheat));
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Warning(Warning::OutOfSeeds))
    );
}

#[test]
fn test_unripe_harvest_warning() {
    let mut scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0))
        .given_seeds("wheat", 1);
    let wheat = scenario.seed("wheat");
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    interactor.aim(&scenario.game, [0.5, 0.5]);
    interactor.interact(&mut scenario.game, Some(wheat));
    interactor.interact(&mut scenario.game, Some(wheat));
    interactor.interact(&mut scenario.game, None);
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Warning(Warning::StillGrowing))
    );
    let field = scenario.tile("field");
    assert_eq!(
        scenario.game.farming.get_tile(field).unwrap().phase(),
        TilePhase::Planted
    );
}

#[test]
fn test_prompt_follows_targeted_tile_state() {
    let mut scenario = FarmScenario::new()
        .given_seed_kind("wheat", 40.0, 4)
        .given_tile("field", at(0, 0))
        .given_seeds("wheat", 1);
    let wheat = scenario.seed("wheat");
    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    interactor.aim(&scenario.game, [0.5, 0.5]);
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Action(TilePrompt::Plow))
    );
    interactor.interact(&mut scenario.game, Some(wheat));
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Action(TilePrompt::Plant))
    );
    interactor.interact(&mut scenario.game, Some(wheat));
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Action(TilePrompt::Growing))
    );
    scenario = scenario.when_update(30.0);
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Action(TilePrompt::Harvest))
    );
    interactor.interact(&mut scenario.game, None);
    assert_eq!(
        interactor.prompt(&scenario.game),
        Some(Prompt::Action(TilePrompt::Plow))
    );
}
