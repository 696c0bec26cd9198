//! Controller behaviour with in-memory collaborators.

use async_trait::async_trait;
use display_session::{DisplaySession, NotificationLevel, UiEvent, ViewerController};
use fits_parser::FitsFileSource;
use renderer::RecordingSurface;
use sky_common::{
    ImageMetadata, LoadedImage, SampleArray, ScalingMode, Survey, SurveySearch, ViewerError,
    ViewerResult, WorldMapping,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use test_utils::{create_star_field, FitsBuilder};

/// Survey search that answers from memory and records its queries.
#[derive(Default)]
struct FakeSurvey {
    queries: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SurveySearch for FakeSurvey {
    async fn search(&self, position: &str, survey: &Survey) -> ViewerResult<LoadedImage> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push((position.to_string(), survey.id.to_string()));
        }
        if position == "nowhere" {
            return Err(ViewerError::RemoteLookup(format!(
                "no image of '{}' in {}",
                position, survey.id
            )));
        }
        let samples = SampleArray::new(8, 8, create_star_field(8, 8, 3))?;
        Ok(LoadedImage::new(
            samples,
            WorldMapping::pixel(),
            ImageMetadata::from_source(format!("{} / {}", position, survey.id)),
        ))
    }
}

fn controller() -> (ViewerController<RecordingSurface>, Arc<FakeSurvey>) {
    let survey = Arc::new(FakeSurvey::default());
    let controller = ViewerController::new(
        DisplaySession::default(),
        Box::new(FitsFileSource::new()),
        survey.clone(),
        RecordingSurface::new(),
    );
    (controller, survey)
}

fn write_fits(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    FitsBuilder::new(6, 4, create_star_field(6, 4, 11))
        .bitpix(-32)
        .write_to(&path)
        .unwrap();
    path
}

#[tokio::test]
async fn test_open_presents_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fits(&dir, "frame.fits");
    let (mut controller, _) = controller();

    assert_eq!(controller.handle(UiEvent::Open(path)).await, None);
    let frame = controller.surface().last().unwrap();
    assert_eq!((frame.rows, frame.cols), (4, 6));
    assert_eq!(frame.colormap, "gist_heat");
}

#[tokio::test]
async fn test_settings_before_load_do_not_redraw() {
    let (mut controller, _) = controller();

    assert_eq!(controller.handle(UiEvent::Scaling(ScalingMode::Root)).await, None);
    assert_eq!(controller.handle(UiEvent::Colormap("viridis".into())).await, None);
    assert_eq!(controller.handle(UiEvent::Invert(true)).await, None);

    assert!(controller.surface().presented.is_empty());
    assert_eq!(controller.session().effective_colormap(), "viridis_r");
}

#[tokio::test]
async fn test_each_setting_redraws() {
    let (mut controller, _) = controller();
    controller
        .handle(UiEvent::Search {
            object: "M31".into(),
            survey: "DSS".into(),
        })
        .await;
    controller.handle(UiEvent::Scaling(ScalingMode::Logarithmic)).await;
    controller.handle(UiEvent::Colormap("magma".into())).await;
    controller.handle(UiEvent::Invert(true)).await;

    let names: Vec<&str> = controller
        .surface()
        .presented
        .iter()
        .map(|b| b.colormap.as_str())
        .collect();
    assert_eq!(names, vec!["gist_heat", "gist_heat", "magma", "magma_r"]);
}

#[tokio::test]
async fn test_search_resolves_survey_case_insensitively() {
    let (mut controller, survey) = controller();
    let note = controller
        .handle(UiEvent::Search {
            object: " M42 ".into(),
            survey: "sdssg".into(),
        })
        .await;
    assert_eq!(note, None);
    assert_eq!(
        survey.queries.lock().unwrap().as_slice(),
        &[("M42".to_string(), "SDSSg".to_string())]
    );
    let image = controller.session().image().unwrap();
    assert_eq!(image.metadata.source, "M42 / SDSSg");
}

#[tokio::test]
async fn test_failed_search_keeps_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fits(&dir, "keep.fits");
    let (mut controller, _) = controller();
    controller.handle(UiEvent::Open(path)).await;

    let note = controller
        .handle(UiEvent::Search {
            object: "nowhere".into(),
            survey: "DSS".into(),
        })
        .await
        .unwrap();
    assert_eq!(note.level, NotificationLevel::Warning);
    assert_eq!(note.title, "Image search failed");

    let image = controller.session().image().unwrap();
    assert_eq!(image.samples.cols(), 6);
    assert_eq!(controller.surface().presented.len(), 1);
}

#[tokio::test]
async fn test_unknown_survey_never_queries() {
    let (mut controller, survey) = controller();
    let note = controller
        .handle(UiEvent::Search {
            object: "M42".into(),
            survey: "Hubble".into(),
        })
        .await
        .unwrap();
    assert!(note.message.contains("Hubble"));
    assert!(survey.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_object_is_rejected() {
    let (mut controller, survey) = controller();
    let note = controller
        .handle(UiEvent::Search {
            object: "   ".into(),
            survey: "DSS".into(),
        })
        .await
        .unwrap();
    assert_eq!(note.title, "Image search failed");
    assert!(survey.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_open_wrong_extension_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fits(&dir, "frame.jpg");
    let (mut controller, _) = controller();

    let note = controller.handle(UiEvent::Open(path)).await.unwrap();
    assert_eq!(note.title, "Cannot open image");
    assert!(!controller.session().has_image());
}

#[tokio::test]
async fn test_unknown_colormap_notifies() {
    let (mut controller, _) = controller();
    let note = controller
        .handle(UiEvent::Colormap("not_a_cmap".into()))
        .await
        .unwrap();
    assert_eq!(note.title, "Unknown colormap");
    assert_eq!(controller.session().config().colormap(), "gist_heat");
}

#[tokio::test]
async fn test_save_requires_image() {
    let (mut controller, _) = controller();
    let note = controller
        .handle(UiEvent::Save(PathBuf::from("out.png")))
        .await
        .unwrap();
    assert_eq!(note.title, "Nothing to display");
    assert!(controller.surface().saved.is_empty());
}

#[tokio::test]
async fn test_save_after_load() {
    let (mut controller, _) = controller();
    controller
        .handle(UiEvent::Search {
            object: "M31".into(),
            survey: "DSS".into(),
        })
        .await;
    let note = controller
        .handle(UiEvent::Save(PathBuf::from("m31.png")))
        .await
        .unwrap();
    assert_eq!(note.level, NotificationLevel::Info);
    assert_eq!(controller.surface().saved[0].0, PathBuf::from("m31.png"));
}

#[tokio::test]
async fn test_about() {
    let (mut controller, _) = controller();
    let note = controller.handle(UiEvent::About).await.unwrap();
    assert_eq!(note.level, NotificationLevel::Info);
    assert!(note.message.starts_with("skyspotter "));
}
