//! skyspotter viewer service: configuration, wiring and event scripts.

pub mod config;
pub mod script;

use anyhow::Result;
use display_session::{DisplaySession, ViewerController};
use fits_parser::FitsFileSource;
use renderer::{ColormapRegistry, PngSurface};
use std::path::PathBuf;
use std::sync::Arc;
use survey_client::SkyViewClient;

pub use config::ViewerConfig;

/// Wire a controller from configuration.
///
/// Every redraw rewrites `preview` as a PNG, zoomed by `output.zoom`.
pub fn build_controller(
    config: &ViewerConfig,
    preview: PathBuf,
) -> Result<ViewerController<PngSurface>> {
    let session = DisplaySession::with_config(ColormapRegistry::builtin(), config.render_config())?;
    let search = SkyViewClient::new(config.survey.clone())?;
    let surface = PngSurface::new(config.output.zoom).with_preview(preview);

    Ok(ViewerController::new(
        session,
        Box::new(FitsFileSource::new()),
        Arc::new(search),
        surface,
    ))
}
