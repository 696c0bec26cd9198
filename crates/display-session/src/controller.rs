//! User actions applied to a display session.

use renderer::RenderSurface;
use serde::Serialize;
use sky_common::{
    ImageSource, ScalingMode, SurveyCatalog, SurveySearch, ViewerError, ViewerResult,
};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::session::DisplaySession;

const APP_NAME: &str = "skyspotter";

/// One action requested through the user interface.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Open(PathBuf),
    Search { object: String, survey: String },
    Scaling(ScalingMode),
    Colormap(String),
    Invert(bool),
    Save(PathBuf),
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_error(err: &ViewerError) -> Self {
        Self {
            level: NotificationLevel::Warning,
            title: err.notification_title().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Drives a [`DisplaySession`] from user actions.
///
/// Each action that changes what is shown redraws onto the surface. A
/// failing action leaves the session as it was.
pub struct ViewerController<S: RenderSurface> {
    session: DisplaySession,
    source: Box<dyn ImageSource>,
    search: Arc<dyn SurveySearch>,
    catalog: SurveyCatalog,
    surface: S,
}

impl<S: RenderSurface> ViewerController<S> {
    pub fn new(
        session: DisplaySession,
        source: Box<dyn ImageSource>,
        search: Arc<dyn SurveySearch>,
        surface: S,
    ) -> Self {
        Self {
            session,
            source,
            search,
            catalog: SurveyCatalog::skyview(),
            surface,
        }
    }

    pub fn session(&self) -> &DisplaySession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn catalog(&self) -> &SurveyCatalog {
        &self.catalog
    }

    /// Apply one event. Failures come back as warning notifications.
    pub async fn handle(&mut self, event: UiEvent) -> Option<Notification> {
        let result = match event {
            UiEvent::Open(path) => self.open(&path).map(|_| None),
            UiEvent::Search { object, survey } => self.search(&object, &survey).await.map(|_| None),
            UiEvent::Scaling(mode) => self.set_scaling_mode(mode).map(|_| None),
            UiEvent::Colormap(name) => self.set_colormap(&name).map(|_| None),
            UiEvent::Invert(flag) => self.set_inverted(flag).map(|_| None),
            UiEvent::Save(path) => self.save(&path).map(|_| {
                Some(Notification::info("Image saved", path.display().to_string()))
            }),
            UiEvent::About => Ok(Some(self.about())),
        };

        match result {
            Ok(notification) => notification,
            Err(err) => {
                warn!(session = %self.session.id(), error = %err, "Action failed");
                Some(Notification::from_error(&err))
            }
        }
    }

    /// Open an image file and show it.
    pub fn open(&mut self, path: &Path) -> ViewerResult<()> {
        let image = self.source.open(path)?;
        self.session.load(image)?;
        self.redraw()
    }

    /// Fetch an image of `object` from a survey and show it.
    pub async fn search(&mut self, object: &str, survey: &str) -> ViewerResult<()> {
        let object = object.trim();
        if object.is_empty() {
            return Err(ViewerError::RemoteLookup(
                "no object name or position given".to_string(),
            ));
        }
        let survey = self.catalog.lookup(survey)?;
        info!(session = %self.session.id(), object, survey = %survey, "Searching survey");

        let image = self.search.search(object, &survey).await?;
        self.session.load(image)?;
        self.redraw()
    }

    pub fn set_scaling_mode(&mut self, mode: ScalingMode) -> ViewerResult<()> {
        self.session.set_scaling_mode(mode);
        self.redraw()
    }

    pub fn set_colormap(&mut self, name: &str) -> ViewerResult<()> {
        self.session.set_colormap(name)?;
        self.redraw()
    }

    pub fn set_inverted(&mut self, inverted: bool) -> ViewerResult<()> {
        self.session.set_inverted(inverted);
        self.redraw()
    }

    /// Render the current image and write it to `path`.
    pub fn save(&mut self, path: &Path) -> ViewerResult<()> {
        let buffer = self.session.render_image()?;
        self.surface.save(&buffer, path)
    }

    pub fn about(&self) -> Notification {
        Notification::info(
            format!("About {}", APP_NAME),
            format!(
                "{} {}: FITS image viewer with sky survey search",
                APP_NAME,
                env!("CARGO_PKG_VERSION")
            ),
        )
    }

    fn redraw(&mut self) -> ViewerResult<()> {
        if !self.session.has_image() {
            debug!(session = %self.session.id(), "Nothing loaded, skipping redraw");
            return Ok(());
        }
        let buffer = self.session.render_image()?;
        self.surface.present(&buffer)
    }
}
