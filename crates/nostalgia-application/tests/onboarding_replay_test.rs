//! End-to-end: onboard, save, browse and replay against file-backed stores.

use nostalgia_application::{
    CueAction, FlowSettings, OnboardingFlow, OnboardingStep, RecordingStage, ReplayController,
    ReplayError,
};
use nostalgia_core::install_mode::InstallMode;
use nostalgia_core::session::{Session, SessionRecordStore};
use nostalgia_infrastructure::{NostalgiaPaths, StorageBackends};
use std::sync::Arc;
use tempfile::TempDir;

async fn onboard(flow: &OnboardingFlow, name: &str, year: &str, label: Option<&str>) {
    let first = flow.begin().await.unwrap();
    if first.to == OnboardingStep::Name {
        flow.advance(name).await.unwrap();
    }
    flow.advance(year).await.unwrap();
    flow.advance("Nirvana,Björk").await.unwrap();
    flow.advance("grunge").await.unwrap();
    match label {
        Some(label) => flow.advance(label).await.unwrap(),
        None => flow.skip_naming().await.unwrap(),
    };
}

async fn run_scenario(mode: InstallMode) {
    let temp = TempDir::new().unwrap();
    let paths = NostalgiaPaths::new(Some(temp.path().to_path_buf()));
    let backends = StorageBackends::open(mode, &paths).unwrap();
    let stage = Arc::new(RecordingStage::new());

    let flow = OnboardingFlow::new(
        backends.records.clone(),
        backends.profile.clone(),
        stage.clone(),
        FlowSettings::immediate(),
    );
    onboard(&flow, "Ada", "1999", Some("first")).await;
    flow.restart().await.unwrap();
    flow.advance("2004 2005").await.unwrap();
    flow.advance("a").await.unwrap();
    flow.advance("b").await.unwrap();
    flow.advance("second").await.unwrap();

    // A fresh flow over the same files sees the stored name.
    let returning = OnboardingFlow::new(
        backends.records.clone(),
        backends.profile.clone(),
        stage.clone(),
        FlowSettings::immediate(),
    );
    let begin = returning.begin().await.unwrap();
    assert_eq!(begin.to, OnboardingStep::Year);
    assert_eq!(returning.name().await.as_deref(), Some("Ada"));

    let mut replay =
        ReplayController::new(backends.records.clone(), stage.clone(), FlowSettings::immediate());
    let frame = replay.start().await.unwrap();
    assert_eq!(frame.title, "first(1/2)");

    let frame = replay.next().await.unwrap();
    assert_eq!(frame.title, "second(2/2)");
    assert_eq!(frame.record.session, Session::with_fields("2004 2005", "a", "b"));

    stage.take();
    let transition = replay.choose(&returning).await.unwrap();
    assert_eq!(transition.to, OnboardingStep::Playback);
    assert_eq!(transition.shapes.len(), 4);
    assert!(
        stage
            .take()
            .iter()
            .any(|action| matches!(action, CueAction::ReleaseShape { index: 3 }))
    );

    // Choosing does not modify the store.
    assert_eq!(backends.records.list_all().await.unwrap().len(), 2);

    let mut replay =
        ReplayController::new(backends.records.clone(), stage.clone(), FlowSettings::immediate());
    replay.start().await.unwrap();
    replay.delete().await.unwrap();
    assert_eq!(replay.delete().await, Err(ReplayError::EmptyStore));
    assert!(backends.records.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_browser_tab_scenario() {
    run_scenario(InstallMode::BrowserTab).await;
}

#[tokio::test]
async fn test_installed_scenario() {
    run_scenario(InstallMode::Installed).await;
}

#[tokio::test]
async fn test_skipped_naming_leaves_store_empty() {
    let temp = TempDir::new().unwrap();
    let paths = NostalgiaPaths::new(Some(temp.path().to_path_buf()));
    let backends = StorageBackends::open(InstallMode::BrowserTab, &paths).unwrap();
    let flow = OnboardingFlow::new(
        backends.records.clone(),
        backends.profile.clone(),
        Arc::new(RecordingStage::new()),
        FlowSettings::immediate(),
    );

    onboard(&flow, "", "1999", None).await;

    assert!(backends.records.list_all().await.unwrap().is_empty());
    let mut replay = ReplayController::new(
        backends.records.clone(),
        Arc::new(RecordingStage::new()),
        FlowSettings::immediate(),
    );
    assert!(replay.start().await.is_none());
}
