use crate::game::level::Level;
use crate::game::playback::{Advance, Phase, Playback};
use crate::game::progress::Progress;
use crate::game::state::WorldState;
use crate::game::systems::outcome::{self, Outcome};
use crate::game::systems::simulator::{
    self, MSG_BUMPED_WALL, MSG_NOTHING_TO_COLLECT, MSG_REFUELED,
};
use crate::game::types::{Command, CommandKind, Direction, Position};

fn open_level(grid_size: usize) -> Level {
    Level {
        id: 1,
        title: "test".to_string(),
        description: String::new(),
        hint: String::new(),
        grid_size,
        obstacles: vec![],
        start_pos: Position { x: 0, y: 0 },
        start_dir: Direction::East,
        goal_pos: Position { x: grid_size - 1, y: 0 },
        fuel_pos: None,
        ideal_block_count: 1,
    }
}

fn cmd(kind: CommandKind) -> Command {
    Command::new(kind)
}

#[test]
fn test_turns_are_inverse() {
    for dir in [Direction::North, Direction::East, Direction::South, Direction::West] {
        assert_eq!(dir.turn_left().turn_right(), dir);
        assert_eq!(dir.turn_right().turn_left(), dir);
    }
}

#[test]
fn test_four_right_turns_close_the_cycle() {
    for dir in [Direction::North, Direction::East, Direction::South, Direction::West] {
        assert_eq!(dir.turn_right().turn_right().turn_right().turn_right(), dir);
    }
}

#[test]
fn test_direction_vectors() {
    assert_eq!(Direction::North.vector(), (0, -1));
    assert_eq!(Direction::East.vector(), (1, 0));
    assert_eq!(Direction::South.vector(), (0, 1));
    assert_eq!(Direction::West.vector(), (-1, 0));
}

#[test]
fn test_move_advances_one_cell() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::Move), &level);

    assert_eq!(world.character_pos, Position { x: 1, y: 0 });
    assert_eq!(world.message, None);
}

#[test]
fn test_move_into_grid_edge_bumps() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);
    world.character_dir = Direction::North; // edge is directly above (0,0)

    simulator::apply(&mut world, &cmd(CommandKind::Move), &level);

    assert_eq!(world.character_pos, Position { x: 0, y: 0 });
    assert_eq!(world.message.as_deref(), Some(MSG_BUMPED_WALL));
}

#[test]
fn test_move_into_obstacle_bumps() {
    let mut level = open_level(3);
    level.obstacles.push(Position { x: 1, y: 0 });
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::Move), &level);

    assert_eq!(world.character_pos, Position { x: 0, y: 0 });
    assert_eq!(world.message.as_deref(), Some(MSG_BUMPED_WALL));
}

#[test]
fn test_turns_leave_position_unchanged() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::TurnRight), &level);
    assert_eq!(world.character_dir, Direction::South);
    assert_eq!(world.character_pos, level.start_pos);
    assert_eq!(world.message, None);

    simulator::apply(&mut world, &cmd(CommandKind::TurnLeft), &level);
    assert_eq!(world.character_dir, Direction::East);
}

#[test]
fn test_message_is_replaced_each_step() {
    let mut level = open_level(3);
    level.obstacles.push(Position { x: 1, y: 0 });
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::Move), &level);
    assert_eq!(world.message.as_deref(), Some(MSG_BUMPED_WALL));

    // A quiet step clears the previous message.
    simulator::apply(&mut world, &cmd(CommandKind::TurnLeft), &level);
    assert_eq!(world.message, None);
}

#[test]
fn test_collect_on_fuel_cell() {
    let mut level = open_level(3);
    level.fuel_pos = Some(Position { x: 0, y: 0 });
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::Collect), &level);

    assert!(world.fuel_collected);
    assert_eq!(world.message.as_deref(), Some(MSG_REFUELED));
}

#[test]
fn test_collect_elsewhere_keeps_fuel_flag() {
    let mut level = open_level(3);
    level.fuel_pos = Some(Position { x: 0, y: 0 });
    let mut world = WorldState::for_level(&level);

    // Collect, move off the fuel cell, collect again.
    simulator::apply(&mut world, &cmd(CommandKind::Collect), &level);
    simulator::apply(&mut world, &cmd(CommandKind::Move), &level);
    simulator::apply(&mut world, &cmd(CommandKind::Collect), &level);

    assert!(world.fuel_collected);
    assert_eq!(world.message.as_deref(), Some(MSG_NOTHING_TO_COLLECT));
}

#[test]
fn test_collect_twice_stays_collected() {
    let mut level = open_level(3);
    level.fuel_pos = Some(Position { x: 0, y: 0 });
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::Collect), &level);
    simulator::apply(&mut world, &cmd(CommandKind::Collect), &level);

    assert!(world.fuel_collected);
}

#[test]
fn test_collect_without_fuel_in_level() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);

    simulator::apply(&mut world, &cmd(CommandKind::Collect), &level);

    assert!(!world.fuel_collected);
    assert_eq!(world.message.as_deref(), Some(MSG_NOTHING_TO_COLLECT));
}

#[test]
fn test_visited_trail_is_distinct_and_ordered() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);

    // East, back west, east again: (0,0) and (1,0) each entered twice.
    for kind in [
        CommandKind::Move,
        CommandKind::TurnLeft,
        CommandKind::TurnLeft,
        CommandKind::Move,
        CommandKind::TurnLeft,
        CommandKind::TurnLeft,
        CommandKind::Move,
    ] {
        simulator::apply(&mut world, &cmd(kind), &level);
    }

    assert_eq!(
        world.visited,
        vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }]
    );
}

#[test]
fn test_visited_size_never_shrinks() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);
    let mut last_len = 0;

    for _ in 0..6 {
        simulator::apply(&mut world, &cmd(CommandKind::Move), &level);
        assert!(world.visited.len() >= last_len);
        last_len = world.visited.len();
    }
}

#[test]
fn test_playback_advances_cursor_one_per_call() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);
    let mut playback = Playback::load(vec![cmd(CommandKind::Move), cmd(CommandKind::Move)]);

    assert_eq!(playback.phase, Phase::Queued);
    assert_eq!(playback.advance(&mut world, &level), Advance::Applied);
    assert_eq!(playback.cursor(), 1);
    assert_eq!(playback.remaining(), 1);
    assert_eq!(playback.advance(&mut world, &level), Advance::Applied);
    assert_eq!(playback.cursor(), 2);
}

#[test]
fn test_playback_reports_exhausted_past_the_end() {
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);
    let mut playback = Playback::load(vec![cmd(CommandKind::Move)]);

    assert_eq!(playback.advance(&mut world, &level), Advance::Applied);
    assert_eq!(playback.advance(&mut world, &level), Advance::Exhausted);
    assert_eq!(playback.phase, Phase::Finished);

    // Exhaustion is stable and never touches the world again.
    let pos_before = world.character_pos;
    assert_eq!(playback.advance(&mut world, &level), Advance::Exhausted);
    assert_eq!(world.character_pos, pos_before);
}

#[test]
fn test_straight_run_reaches_goal() {
    // gridSize=3, no obstacles, start (0,0) facing East, goal (2,0).
    let level = open_level(3);
    let mut world = WorldState::for_level(&level);
    let mut playback = Playback::load(vec![cmd(CommandKind::Move), cmd(CommandKind::Move)]);

    while playback.advance(&mut world, &level) == Advance::Applied {}

    assert_eq!(world.character_pos, Position { x: 2, y: 0 });
    assert_eq!(
        outcome::evaluate(world.character_pos, world.fuel_collected, &level),
        Outcome::GoalReached
    );
}

#[test]
fn test_blocked_run_stays_put_with_message() {
    let mut level = open_level(3);
    level.obstacles.push(Position { x: 1, y: 0 });
    let mut world = WorldState::for_level(&level);
    let mut playback = Playback::load(vec![cmd(CommandKind::Move)]);

    while playback.advance(&mut world, &level) == Advance::Applied {}

    assert_eq!(world.character_pos, Position { x: 0, y: 0 });
    assert_eq!(world.message.as_deref(), Some(MSG_BUMPED_WALL));
}

#[test]
fn test_skipping_fuel_is_a_distinct_outcome() {
    // Fuel at (1,0), goal at (2,0), program walks straight past the fuel.
    let mut level = open_level(3);
    level.fuel_pos = Some(Position { x: 1, y: 0 });
    let mut world = WorldState::for_level(&level);
    let mut playback = Playback::load(vec![cmd(CommandKind::Move), cmd(CommandKind::Move)]);

    while playback.advance(&mut world, &level) == Advance::Applied {}

    assert_eq!(world.character_pos, level.goal_pos);
    assert_eq!(
        outcome::evaluate(world.character_pos, world.fuel_collected, &level),
        Outcome::GoalReachedMissingFuel
    );
}

#[test]
fn test_collecting_fuel_completes_the_level() {
    let mut level = open_level(3);
    level.fuel_pos = Some(Position { x: 1, y: 0 });
    let mut world = WorldState::for_level(&level);
    let mut playback = Playback::load(vec![
        cmd(CommandKind::Move),
        cmd(CommandKind::Collect),
        cmd(CommandKind::Move),
    ]);

    while playback.advance(&mut world, &level) == Advance::Applied {}

    assert_eq!(
        outcome::evaluate(world.character_pos, world.fuel_collected, &level),
        Outcome::GoalReached
    );
}

#[test]
fn test_outcome_not_reached_off_goal() {
    let level = open_level(3);
    assert_eq!(
        outcome::evaluate(Position { x: 1, y: 0 }, false, &level),
        Outcome::NotReached
    );
}

#[test]
fn test_progress_records_once() {
    let mut progress = Progress::new();

    assert!(progress.record(3));
    assert!(!progress.record(3));
    assert!(progress.record(1));

    assert!(progress.is_complete(1));
    assert!(progress.is_complete(3));
    assert!(!progress.is_complete(2));
    assert_eq!(progress.completed_ids(), vec![1, 3]);
}

#[test]
fn test_catalog_ids_are_contiguous() {
    let levels = Level::catalog();
    assert!(!levels.is_empty());
    for (index, level) in levels.iter().enumerate() {
        assert_eq!(level.id, index as u32 + 1);
    }
}

#[test]
fn test_catalog_poses_are_in_bounds() {
    for level in Level::catalog() {
        let inside = |p: Position| p.x < level.grid_size && p.y < level.grid_size;
        assert!(inside(level.start_pos), "level {} start out of bounds", level.id);
        assert!(inside(level.goal_pos), "level {} goal out of bounds", level.id);
        if let Some(fuel) = level.fuel_pos {
            assert!(inside(fuel), "level {} fuel out of bounds", level.id);
        }
        for o in &level.obstacles {
            assert!(inside(*o), "level {} obstacle out of bounds", level.id);
            assert_ne!(*o, level.start_pos, "level {} obstacle on start", level.id);
            assert_ne!(*o, level.goal_pos, "level {} obstacle on goal", level.id);
        }
    }
}

#[test]
fn test_world_state_tracks_level_fuel() {
    let mut level = open_level(3);
    let world = WorldState::for_level(&level);
    assert!(!world.has_fuel);

    level.fuel_pos = Some(Position { x: 1, y: 0 });
    let world = WorldState::for_level(&level);
    assert!(world.has_fuel);
    assert!(!world.fuel_collected);
    assert!(world.visited.is_empty());
}
