use super::AppContext;
use super::replay;
use crate::prompt::{self, Prompt, PromptHelper};
use crate::terminal::TerminalStage;
use anyhow::Result;
use colored::Colorize;
use nostalgia_application::{OnboardingFlow, OnboardingStep};
use nostalgia_core::locale::{Catalog, Phrase};
use nostalgia_core::swipe::{self, SwipeIntent, ZoneBounds, ZoneId};
use std::sync::Arc;
use tracing::debug;

const SAVED_COMMAND: &str = "/saved";
const PLAYBACK_COMMANDS: &[&str] = &["/less", "/more", "/restart", "/quit"];

/// Rows of the swipe menu, top to bottom.
const ZONE_HEIGHT: f64 = 10.0;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let stage = Arc::new(TerminalStage::new(ctx.catalog.clone()));
    let flow = OnboardingFlow::new(
        ctx.backends.records.clone(),
        ctx.backends.profile.clone(),
        stage,
        ctx.settings(),
    );
    let mut editor = prompt::editor(PromptHelper::new(&[SAVED_COMMAND]))?;

    flow.begin().await?;
    drive(ctx, &flow, &mut editor).await
}

/// Feeds input to the flow until the user quits.
pub async fn drive(ctx: &AppContext, flow: &OnboardingFlow, editor: &mut Prompt) -> Result<()> {
    loop {
        let step = flow.step().await;

        if step == OnboardingStep::Playback {
            prompt::set_commands(editor, PLAYBACK_COMMANDS);
            if !playback_menu(&ctx.catalog, flow, editor).await? {
                return Ok(());
            }
            continue;
        }

        let commands: &[&str] = if step.allows_replay() {
            &[SAVED_COMMAND]
        } else {
            &[]
        };
        prompt::set_commands(editor, commands);

        let Some(line) = prompt::read(editor, "> ")? else {
            flow.abandon();
            return Ok(());
        };

        if step.allows_replay() && line.trim() == SAVED_COMMAND {
            replay::browse(ctx, flow, editor).await?;
            continue;
        }

        if step == OnboardingStep::NameThisMemory && line.trim().is_empty() {
            flow.skip_naming().await?;
        } else {
            flow.advance(&line).await?;
        }
    }
}

/// Returns `false` when the user quits.
async fn playback_menu(
    catalog: &Catalog,
    flow: &OnboardingFlow,
    editor: &mut Prompt,
) -> Result<bool> {
    println!();
    println!(
        "{}   {}",
        format!("/less <row>  {}", catalog.plain(Phrase::LessOf)).bright_black(),
        format!("/more <row>  {}", catalog.plain(Phrase::MoreOf)).bright_black()
    );
    println!("{}", "/restart   /quit".bright_black());

    let Some(line) = prompt::read(editor, "▶ ")? else {
        return Ok(false);
    };
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("/restart") => {
            flow.restart().await?;
        }
        Some("/quit") => return Ok(false),
        Some(command @ ("/less" | "/more")) => {
            let intent = if command == "/less" {
                SwipeIntent::Reduce
            } else {
                SwipeIntent::Increase
            };
            show_swipe_menu(catalog, intent);
            let row = parts.next().and_then(|row| row.parse::<f64>().ok());
            let Some(row) = row else {
                println!("{}", catalog.plain(Phrase::DragDown).bright_black());
                return Ok(true);
            };
            match swipe::signal(intent, row, &swipe_zones()) {
                Some(signal) if signal.zone == ZoneId::Exit => {
                    debug!(?signal, "swipe menu closed");
                }
                Some(signal) => {
                    debug!(?signal, "preference signal");
                    println!("{}", zone_label(catalog, signal.zone).bright_green());
                }
                None => {}
            }
        }
        _ => println!("{}", "?".bright_black()),
    }
    Ok(true)
}

fn swipe_zones() -> [ZoneBounds; 3] {
    [
        ZoneBounds::new(ZoneId::Less, 0.0, ZONE_HEIGHT),
        ZoneBounds::new(ZoneId::More, ZONE_HEIGHT, ZONE_HEIGHT),
        ZoneBounds::new(ZoneId::Exit, ZONE_HEIGHT * 2.0, ZONE_HEIGHT),
    ]
}

fn zone_label(catalog: &Catalog, zone: ZoneId) -> String {
    match zone {
        ZoneId::Less => catalog.plain(Phrase::LessOf),
        ZoneId::More => catalog.plain(Phrase::MoreOf),
        ZoneId::Exit => catalog.plain(Phrase::ExitMenu),
    }
}

fn show_swipe_menu(catalog: &Catalog, intent: SwipeIntent) {
    let subject = match intent {
        SwipeIntent::Reduce => Phrase::Creator,
        SwipeIntent::Increase => Phrase::Topic,
    };
    println!(
        "{} {}",
        catalog.plain(Phrase::Arrow),
        catalog.plain(subject).bright_white()
    );
    for zone in swipe_zones() {
        println!(
            "  {:>4.0}-{:<4.0} {}",
            zone.top,
            zone.top + zone.height,
            zone_label(catalog, zone.id).bright_black()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_zones_cover_rows_in_order() {
        let zones = swipe_zones();
        assert_eq!(swipe::classify(2.0, &zones), Some(ZoneId::Less));
        assert_eq!(swipe::classify(14.0, &zones), Some(ZoneId::More));
        assert_eq!(swipe::classify(40.0, &zones), Some(ZoneId::Exit));
    }
}
