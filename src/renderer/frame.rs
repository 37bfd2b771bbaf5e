//! Per-frame draw list
//!
//! Paint order is background, entities, player, HUD, banner.

use glam::Vec2;

use crate::consts::{BACKGROUND_COLOR, TEXT_COLOR};
use crate::format_clock;
use crate::settings::SpriteSize;
use crate::sim::{EntityKind, GameState};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

/// Which image a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Coin,
    Hazard,
}

impl From<EntityKind> for SpriteKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Coin => SpriteKind::Coin,
            EntityKind::Hazard => SpriteKind::Hazard,
        }
    }
}

/// A sprite blitted with its top-left corner at `pos`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub size: SpriteSize,
}

/// Where a text line goes; the platform measures the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left edge, `line` font heights from the top
    TopLeft { line: u32 },
    /// Right edge, `line` font heights from the top
    TopRight { line: u32 },
    /// Centered on the screen
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub anchor: TextAnchor,
    pub color: Rgb,
}

impl TextItem {
    fn new(text: impl Into<String>, anchor: TextAnchor) -> Self {
        Self {
            text: text.into(),
            anchor,
            color: TEXT_COLOR.into(),
        }
    }
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Rgb,
    /// Entities first, player last
    pub sprites: Vec<Sprite>,
    pub hud: Vec<TextItem>,
    /// Game-over message, drawn over everything
    pub banner: Option<TextItem>,
}

/// Score line shared by the HUD and the game-over banner
pub fn money_text(total_money: u64) -> String {
    format!("Amount of money: {}", total_money)
}

pub fn time_text(elapsed_seconds: f64) -> String {
    format!("Time: {}", format_clock(elapsed_seconds))
}

/// Game-over banner text
pub fn banner_text(total_money: u64, elapsed_seconds: f64) -> String {
    format!(
        "Amount of money: {} - Time: {}",
        total_money,
        format_clock(elapsed_seconds)
    )
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let mut sprites: Vec<Sprite> = state
        .entities
        .iter()
        .map(|e| Sprite {
            kind: e.kind.into(),
            pos: e.pos,
            size: e.size,
        })
        .collect();
    sprites.push(Sprite {
        kind: SpriteKind::Player,
        pos: state.player.pos,
        size: state.player.size,
    });

    let hud = vec![
        TextItem::new(money_text(state.total_money), TextAnchor::TopRight { line: 1 }),
        TextItem::new("F2 = New game", TextAnchor::TopLeft { line: 0 }),
        TextItem::new("Esc = Close the game", TextAnchor::TopLeft { line: 1 }),
        TextItem::new(time_text(state.elapsed_seconds), TextAnchor::TopRight { line: 0 }),
    ];

    let banner = (!state.is_running()).then(|| {
        TextItem::new(
            banner_text(state.total_money, state.elapsed_seconds),
            TextAnchor::Center,
        )
    });

    Frame {
        background: BACKGROUND_COLOR.into(),
        sprites,
        hud,
        banner,
    }
}
