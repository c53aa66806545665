//! Scene composition: game state to an ordered list of draw commands

use super::commands::{Color, DrawCommand, FontRole, Rect};
use crate::consts::*;
use crate::platform::Key;
use crate::sim::{GamePhase, GameState, Side};

const WIDTH: i32 = GAME_WIDTH as i32;
const HEIGHT: i32 = GAME_HEIGHT as i32;
const SPACER: i32 = GFX_SPACER as i32;

/// Menu instruction line, built from the default key bindings
pub fn menu_prompt() -> String {
    format!(
        "({}) player - ({}) players - ({})ape",
        Key::OnePlayer.label(),
        Key::TwoPlayers.label(),
        Key::Quit.label()
    )
}

/// Build the frame for the current state. Pure: same state, same commands.
pub fn compose(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(16);
    match state.phase {
        GamePhase::Menu => menu(&mut commands),
        GamePhase::InGame | GamePhase::PointScored { .. } => court(state, &mut commands),
        GamePhase::Winner { .. } => {
            court(state, &mut commands);
            winner_banner(state, &mut commands);
        }
    }
    commands
}

fn fill(commands: &mut Vec<DrawCommand>, rect: Rect, color: Color) {
    commands.push(DrawCommand::FillRect { rect, color });
}

fn text(commands: &mut Vec<DrawCommand>, text: &str, x: i32, y: i32, font: FontRole) {
    commands.push(DrawCommand::Text {
        text: text.to_string(),
        x,
        y,
        font,
        color: Color::WHITE,
    });
}

fn menu(commands: &mut Vec<DrawCommand>) {
    fill(commands, Rect::new(0, 0, WIDTH, HEIGHT), Color::BLACK);

    // Title between two bars
    fill(commands, Rect::new(0, 70, WIDTH, 5), Color::WHITE);
    text(commands, GAME_NAME, 55, 130, FontRole::Title);
    fill(commands, Rect::new(0, 140, WIDTH, 5), Color::WHITE);

    text(commands, &menu_prompt(), 70, HEIGHT - SPACER, FontRole::Menu);
}

fn court(state: &GameState, commands: &mut Vec<DrawCommand>) {
    fill(commands, Rect::new(0, 0, WIDTH, HEIGHT), Color::BLACK);

    // Scores sit behind everything else
    for (side, x) in [(Side::Left, 120), (Side::Right, 155)] {
        commands.push(DrawCommand::Text {
            text: state.score.get(side).to_string(),
            x,
            y: 70,
            font: FontRole::Score,
            color: Color::DARK_GRAY,
        });
    }

    // Bottom and top borders
    let border_width = WIDTH - 2 * SPACER;
    fill(
        commands,
        Rect::new(SPACER, HEIGHT - 2 * SPACER, border_width, SPACER),
        Color::WHITE,
    );
    fill(commands, Rect::new(SPACER, SPACER, border_width, SPACER), Color::WHITE);

    commands.push(DrawCommand::DashedLine {
        from: (WIDTH / 2, 2 * SPACER),
        to: (WIDTH / 2, HEIGHT - 2 * SPACER),
        width: BALL_RADIUS,
        dash: 8.0,
        color: Color::WHITE,
    });

    let paddle_height = PADDLE_HEIGHT as i32;
    let paddle_width = (PADDLE_HALF_WIDTH * 2.0) as i32;
    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side);
        let x = (paddle.center_x() - PADDLE_HALF_WIDTH) as i32;
        fill(
            commands,
            Rect::new(x, paddle.y as i32, paddle_width, paddle_height),
            Color::WHITE,
        );
    }

    // Ball is drawn as its bounding square
    let ball = &state.ball;
    let size = (ball.radius * 2.0) as i32;
    fill(
        commands,
        Rect::new(
            (ball.pos.x - ball.radius) as i32,
            (ball.pos.y - ball.radius) as i32,
            size,
            size,
        ),
        Color::WHITE,
    );
}

fn winner_banner(state: &GameState, commands: &mut Vec<DrawCommand>) {
    fill(commands, Rect::new(0, 0, WIDTH, HEIGHT), Color::WINNER_MASK);

    let banner = match state.score.leader() {
        Side::Left => "Left player wins!",
        Side::Right => "Right player wins!",
    };
    text(commands, banner, 85, 120, FontRole::Winner);
}
