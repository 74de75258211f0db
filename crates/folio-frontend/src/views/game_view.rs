use folio_bridge::achievement::GAME_MASTER;
use folio_bridge::input::Key;
use folio_bridge::state::StoreAction;

/// Side length of the square playing field.
const FIELD_SIZE: f64 = 100.0;
const MOVE_SPEED: f64 = 5.0;
/// Distance below which the player picks a collectible up.
const PICKUP_RADIUS: f64 = 8.0;
const POINTS_PER_PICKUP: u32 = 10;

const START: Position = Position { x: 50.0, y: 50.0 };
const COLLECTIBLES: [Position; 7] = [
    Position { x: 20.0, y: 30.0 },
    Position { x: 80.0, y: 20.0 },
    Position { x: 10.0, y: 70.0 },
    Position { x: 90.0, y: 80.0 },
    Position { x: 60.0, y: 40.0 },
    Position { x: 30.0, y: 90.0 },
    Position { x: 70.0, y: 60.0 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    fn distance(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// WASD or arrow keys, ignoring case.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            Key::Character(ch) => match ch.to_ascii_lowercase() {
                'w' => Some(Direction::Up),
                's' => Some(Direction::Down),
                'a' => Some(Direction::Left),
                'd' => Some(Direction::Right),
                _ => None,
            },
            _ => None,
        }
    }
}

/// The "collect the skills" mini game.
#[derive(Debug, Clone)]
pub struct GameView {
    player: Position,
    collectibles: Vec<Position>,
    score: u32,
    started: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            player: START,
            collectibles: COLLECTIBLES.to_vec(),
            score: 0,
            started: false,
        }
    }
}

impl GameView {
    /// (Re)starts a run with a fresh field.
    pub fn start(&mut self) {
        *self = Self {
            started: true,
            ..Self::default()
        };
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn remaining(&self) -> usize {
        self.collectibles.len()
    }

    /// Moves the player for a key press and collects anything in reach.
    /// Returns the unlock issued when the last collectible was picked up.
    pub fn handle_key(&mut self, key: &Key) -> Option<StoreAction> {
        if !self.started {
            return None;
        }
        let direction = Direction::from_key(key)?;

        let Position { x, y } = self.player;
        self.player = match direction {
            Direction::Up => Position {
                x,
                y: (y - MOVE_SPEED).max(0.0),
            },
            Direction::Down => Position {
                x,
                y: (y + MOVE_SPEED).min(FIELD_SIZE),
            },
            Direction::Left => Position {
                x: (x - MOVE_SPEED).max(0.0),
                y,
            },
            Direction::Right => Position {
                x: (x + MOVE_SPEED).min(FIELD_SIZE),
                y,
            },
        };

        let before = self.collectibles.len();
        let player = self.player;
        self.collectibles
            .retain(|collectible| collectible.distance(player) >= PICKUP_RADIUS);
        let collected = before - self.collectibles.len();
        self.score += collected as u32 * POINTS_PER_PICKUP;

        if collected > 0 && self.collectibles.is_empty() {
            log::info!("Game finished with {} points", self.score);
            return Some(StoreAction::UnlockAchievement(GAME_MASTER.to_string()));
        }
        None
    }
}
