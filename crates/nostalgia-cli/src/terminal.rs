//! Renders cues as coloured terminal lines.

use colored::{ColoredString, Colorize};
use nostalgia_application::{CueAction, Panel, Stage};
use nostalgia_core::locale::{Catalog, Phrase};
use nostalgia_core::shape::{Category, PlacedShape, ShapeKind};

pub struct TerminalStage {
    catalog: Catalog,
}

impl TerminalStage {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    fn panel(&self, panel: Panel) {
        let (title, caption) = match panel {
            Panel::VideoPool => (Phrase::VideoPool, Phrase::VideoPoolCaption),
            Panel::Player => (Phrase::Player, Phrase::PlayerCaption),
        };
        println!();
        println!("{}", self.catalog.plain(title).bright_white().bold());
        println!("{}", self.catalog.plain(caption).bright_black());
    }
}

impl Stage for TerminalStage {
    fn perform(&self, action: &CueAction) {
        match action {
            CueAction::SwapPrompt { title, hint, .. } => {
                println!();
                println!("{}", title.bright_yellow().bold());
                if let Some(hint) = hint {
                    println!("{}", hint.bright_black());
                }
            }
            CueAction::ClearInput => {}
            CueAction::ShowNameplate { text } => println!("{}", text.bright_magenta().italic()),
            CueAction::DropShape { shape } => println!("  {}", describe(shape)),
            CueAction::ShowPanel { panel } => self.panel(*panel),
            CueAction::ReleaseShape { index } => {
                println!("  {}", format!("~ #{} drifts away", index + 1).bright_black())
            }
            CueAction::ClearCollage => println!("{}", "· · ·".bright_black()),
            CueAction::ShowReplayFrame { title } => {
                println!();
                println!("{}", title.bright_cyan().bold());
            }
        }
    }
}

fn glyph(shape: &PlacedShape) -> ColoredString {
    let mark = match shape.descriptor.kind {
        ShapeKind::Round => "●",
        ShapeKind::RoundedSquare => "■",
    };
    match shape.category {
        Category::Year => mark.yellow(),
        Category::Preferences => mark.cyan(),
        Category::Topics => mark.green(),
    }
}

fn describe(shape: &PlacedShape) -> String {
    let d = &shape.descriptor;
    format!(
        "{} {} {}",
        glyph(shape),
        shape.token,
        format!(
            "at ({:.2}em, {:.2}em) size {:.1}em turned {:.0}°",
            d.offset_x, d.offset_y, d.size, d.rotation
        )
        .bright_black()
    )
}
