use super::AppContext;
use super::onboard;
use crate::prompt::{self, Prompt, PromptHelper};
use crate::terminal::TerminalStage;
use anyhow::Result;
use colored::Colorize;
use nostalgia_application::{OnboardingFlow, ReplayController, ReplayError};
use nostalgia_core::locale::Phrase;
use std::sync::Arc;
use tracing::warn;

const REPLAY_COMMANDS: &[&str] = &["n", "c", "d", "q"];

/// Standalone replay. Choosing a session continues into playback.
pub async fn run(ctx: &AppContext) -> Result<()> {
    let stage = Arc::new(TerminalStage::new(ctx.catalog.clone()));
    let flow = OnboardingFlow::new(
        ctx.backends.records.clone(),
        ctx.backends.profile.clone(),
        stage,
        ctx.settings(),
    );
    let mut editor = prompt::editor(PromptHelper::new(REPLAY_COMMANDS))?;

    if browse(ctx, &flow, &mut editor).await? {
        onboard::drive(ctx, &flow, &mut editor).await?;
    }
    Ok(())
}

/// Runs the replay loop. Returns `true` if a session was chosen for
/// playback.
pub async fn browse(
    ctx: &AppContext,
    flow: &OnboardingFlow,
    editor: &mut Prompt,
) -> Result<bool> {
    let stage = Arc::new(TerminalStage::new(ctx.catalog.clone()));
    let mut replay = ReplayController::new(ctx.backends.records.clone(), stage, ctx.settings());
    prompt::set_commands(editor, REPLAY_COMMANDS);

    if replay.start().await.is_none() {
        println!("{}", "nothing saved yet".bright_black());
        return Ok(false);
    }

    let catalog = &ctx.catalog;
    loop {
        println!(
            "{}",
            format!(
                "c {}  d {}  n {}  q {}",
                catalog.plain(Phrase::ChooseThis),
                catalog.plain(Phrase::DeleteThis),
                catalog.plain(Phrase::NextOne),
                catalog.plain(Phrase::Nevermind)
            )
            .bright_black()
        );

        let Some(line) = prompt::read(editor, "replay> ")? else {
            replay.exit().await;
            return Ok(false);
        };

        let outcome = match line.trim() {
            "n" => replay.next().await.map(|_| ()),
            "d" => replay.delete().await.map(|_| ()),
            "c" => match replay.choose(flow).await {
                Ok(_) => return Ok(true),
                Err(e) => Err(e),
            },
            "q" | "nvm" => {
                replay.exit().await;
                return Ok(false);
            }
            _ => Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(ReplayError::EmptyStore) => {
                println!("{}", "nothing saved anymore".bright_black());
                flow.return_to_start().await?;
                return Ok(false);
            }
            Err(e) => warn!(error = %e, "replay action failed"),
        }
    }
}
