//! Plain-text frame renderer for headless runs and debugging

use crate::sim::{ActorType, Level, Obstacle, Status};

fn obstacle_char(cell: Option<Obstacle>) -> char {
    match cell {
        Some(Obstacle::Wall) => '#',
        Some(Obstacle::Lava) => '~',
        None => ' ',
    }
}

fn actor_char(actor_type: ActorType) -> char {
    match actor_type {
        ActorType::Player => '@',
        ActorType::Coin => 'o',
        ActorType::Fireball => '*',
        ActorType::Actor => '?',
    }
}

/// Draw the level as text, one line per grid row.
///
/// Each actor is drawn in the cell holding the centre of its box; the
/// player is drawn last so nothing hides it.
pub fn render_text(level: &Level) -> String {
    let width = level.width();
    let mut canvas: Vec<Vec<char>> = level
        .grid
        .rows()
        .iter()
        .map(|row| {
            let mut line: Vec<char> = row.iter().map(|&cell| obstacle_char(cell)).collect();
            line.resize(width, ' ');
            line
        })
        .collect();

    let mut actors: Vec<_> = level.actors.iter().collect();
    actors.sort_by_key(|a| a.actor_type() == ActorType::Player);
    for actor in actors {
        let center = actor.bounds().center();
        if center.x < 0.0 || center.y < 0.0 {
            continue;
        }
        let (col, row) = (center.x as usize, center.y as usize);
        if let Some(cell) = canvas.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = actor_char(actor.actor_type());
        }
    }

    let mut out = String::with_capacity((width + 1) * canvas.len() + 16);
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    match level.status {
        Some(Status::Won) => out.push_str("status: won\n"),
        Some(Status::Lost) => out.push_str("status: lost\n"),
        None => {}
    }
    out
}
