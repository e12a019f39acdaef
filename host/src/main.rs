use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use game::api::{Action, Event};
use game::data;
use game::farming::{Farming, SeedKey, Tile, TileId, TilePrompt, TileState};
use game::inventory::Inventory;
use game::targeting::{Interactor, Prompt, Warning, DEFAULT_INTERACT_DISTANCE};
use game::Game;
use log::{error, info};

const FIELD_WIDTH: usize = 3;
const FIELD_HEIGHT: usize = 3;
const STARTING_MONEY: i32 = 20;
const STARTING_SEEDS: u32 = 3;

enum Command {
    Move([f32; 2]),
    Use,
    Select(usize),
    Buy,
    Grow,
    Hud,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "move" => {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            Command::Move([x, y])
        }
        "use" => Command::Use,
        "seed" => Command::Select(words.next()?.parse().ok()?),
        "buy" => Command::Buy,
        "grow" => Command::Grow,
        "hud" => Command::Hud,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn spawn_console() -> Receiver<Command> {
    let (commands, receiver) = channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_command(line) {
                Some(command) => {
                    if commands.send(command).is_err() {
                        break;
                    }
                }
                None => println!("Unknown command: {} (try 'help')", line),
            }
        }
    });
    receiver
}

struct SeedSelector {
    seeds: Vec<(SeedKey, String)>,
    current: usize,
}

impl SeedSelector {
    fn new(game: &Game) -> Self {
        let mut seeds: Vec<(SeedKey, String)> = game
            .known
            .seeds
            .iter()
            .map(|kind| (kind.id, kind.name.clone()))
            .collect();
        seeds.sort_by_key(|(key, _)| key.0);
        Self { seeds, current: 0 }
    }

    fn selection(&self) -> Option<SeedKey> {
        self.seeds.get(self.current).map(|(key, _)| *key)
    }

    fn select(&mut self, number: usize) {
        if number >= 1 && number <= self.seeds.len() {
            self.current = number - 1;
            println!("Selected seed: {}", self.seeds[self.current].1);
        } else {
            println!("No seed #{}, have 1..{}", number, self.seeds.len());
        }
    }
}

fn seed_name(game: &Game, seed: SeedKey) -> String {
    match game.known.seeds.get(seed) {
        Ok(kind) => kind.name.clone(),
        Err(_) => format!("seed {}", seed.0),
    }
}

fn render_event(game: &Game, event: Event) {
    match event {
        Event::Farming(events) => {
            for event in events {
                match event {
                    Farming::TileAppeared { tile, place, phase, stage } => {
                        let stage = match stage {
                            Some(stage) => format!(", crop stage {}", stage + 1),
                            None => String::new(),
                        };
                        println!(
                            "[visual] tile {} at {:?} is {:?}{}",
                            tile.0, place, phase, stage
                        );
                    }
                    Farming::TilePhaseChanged { tile, phase } => {
                        println!("[visual] tile {} is now {:?}", tile.0, phase)
                    }
                    Farming::CropStageChanged { tile, stage } => {
                        println!("[visual] crop on tile {} grew to stage {}", tile.0, stage + 1)
                    }
                    Farming::TilePlowed { tile } => {
                        println!("[audio] plowing tile {}", tile.0)
                    }
                    Farming::CropPlanted { tile, seed } => {
                        println!("[audio] planting {} on tile {}", seed_name(game, seed), tile.0)
                    }
                    Farming::CropHarvested { tile, seed } => {
                        println!(
                            "[audio] harvesting {} from tile {}",
                            seed_name(game, seed),
                            tile.0
                        )
                    }
                }
            }
        }
        Event::Inventory(events) => {
            for event in events {
                match event {
                    Inventory::SeedsChanged { seed, quantity } => {
                        println!("[hud] {} x{}", seed_name(game, seed), quantity)
                    }
                    Inventory::MoneyChanged { money } => println!("[hud] $ {}", money),
                }
            }
        }
    }
}

fn render_hud(game: &Game, selector: &SeedSelector) {
    println!("$ {}", game.inventory.money);
    match selector.selection() {
        Some(seed) => {
            let quantity = game.inventory.quantity_of(seed);
            println!("Seed: {} (x{})", seed_name(game, seed), quantity);
        }
        None => println!("No seed selected"),
    }
}

fn render_prompt(prompt: Option<Prompt>, tile: Option<TileId>) {
    let text = match prompt {
        Some(Prompt::Action(TilePrompt::Plow)) => "Press 'use' to plow",
        Some(Prompt::Action(TilePrompt::Plant)) => "Press 'use' to plant",
        Some(Prompt::Action(TilePrompt::Harvest)) => "Press 'use' to harvest",
        Some(Prompt::Action(TilePrompt::Growing)) => "Growing...",
        Some(Prompt::Warning(Warning::NoSeedSelected)) => "No seed selected!",
        Some(Prompt::Warning(Warning::OutOfSeeds)) => "Out of seeds!",
        Some(Prompt::Warning(Warning::StillGrowing)) => "Not ready to harvest yet!",
        None => {
            println!("[prompt] -");
            return;
        }
    };
    match tile {
        Some(tile) => println!("[prompt] tile {}: {}", tile.0, text),
        None => println!("[prompt] {}", text),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  move <x> <y>  walk to a world position");
    println!("  use           interact with the targeted tile");
    println!("  seed <n>      select seed by number");
    println!("  buy           buy one of the selected seed");
    println!("  grow          cheat, ripen all planted crops");
    println!("  hud           show money and selected seed");
    println!("  quit          leave the farm");
}

fn main() {
    env_logger::init();
    info!("OS: {}", std::env::consts::OS);

    let text = match std::fs::read_to_string("./assets/seeds.json") {
        Ok(text) => text,
        Err(error) => {
            error!("Unable to read seed catalog: {}", error);
            return;
        }
    };
    let knowledge = match data::load_knowledge(&text) {
        Ok(knowledge) => knowledge,
        Err(error) => {
            error!("Unable to load seed catalog: {:?}", error);
            return;
        }
    };
    let mut game = Game::new(knowledge);

    let mut tiles = vec![];
    for y in 0..FIELD_HEIGHT {
        for x in 0..FIELD_WIDTH {
            tiles.push(Tile {
                id: TileId(tiles.len() + 1),
                place: [x, y],
                state: TileState::Bare,
            });
        }
    }
    let sequence = tiles.len();
    game.farming.load_tiles(tiles, sequence);

    let mut selector = SeedSelector::new(&game);
    game.inventory.money = STARTING_MONEY;
    if let Some(seed) = selector.selection() {
        game.inventory.add_seed(seed, STARTING_SEEDS);
    }

    for event in game.look_around() {
        render_event(&game, event);
    }
    print_help();

    let mut interactor = Interactor::new(DEFAULT_INTERACT_DISTANCE);
    let mut position = [1.5f32, 1.5];
    let mut last_prompt = None;
    let commands = spawn_console();
    let mut tick = Instant::now();
    info!("Start farm session");
    'session: loop {
        while let Ok(command) = commands.try_recv() {
            match command {
                Command::Move(destination) => {
                    position = destination;
                    interactor.aim(&game, position);
                }
                Command::Use => {
                    for event in interactor.interact(&mut game, selector.selection()) {
                        render_event(&game, event);
                    }
                }
                Command::Select(number) => selector.select(number),
                Command::Buy => match selector.selection() {
                    Some(seed) => match game.perform_action(Action::BuySeed { seed }) {
                        Ok(events) => {
                            for event in events {
                                render_event(&game, event);
                            }
                        }
                        Err(error) => println!("Purchase failed: {:?}", error),
                    },
                    None => println!("No seed selected"),
                },
                Command::Grow => match game.perform_action(Action::CheatGrowUpCrops) {
                    Ok(events) => {
                        for event in events {
                            render_event(&game, event);
                        }
                    }
                    Err(error) => println!("Cheat failed: {:?}", error),
                },
                Command::Hud => render_hud(&game, &selector),
                Command::Help => print_help(),
                Command::Quit => break 'session,
            }
        }

        let time = tick.elapsed().as_secs_f32();
        tick = Instant::now();
        interactor.update(time);
        for event in game.update(time) {
            render_event(&game, event);
        }
        interactor.aim(&game, position);
        let prompt = interactor.prompt(&game);
        if prompt != last_prompt {
            render_prompt(prompt, interactor.target);
            last_prompt = prompt;
        }

        thread::sleep(Duration::from_millis(20));
    }
    info!("Bye!");
}
