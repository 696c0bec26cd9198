//! Catalog of sky surveys that can be queried for images.
//!
//! Surveys are grouped by band and instrument ("Optical:SDSS", ...). The
//! identifiers are the names the SkyView service expects in its `Survey`
//! query parameter.

use serde::Serialize;
use std::fmt;

use crate::{ViewerError, ViewerResult};

/// One queryable survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Survey {
    /// Band/instrument group, e.g. "Optical:SDSS"
    pub group: &'static str,
    /// Survey identifier, e.g. "SDSSg"
    pub id: &'static str,
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.group)
    }
}

/// A named group of surveys.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurveyGroup {
    pub name: &'static str,
    pub surveys: &'static [&'static str],
}

const SKYVIEW_GROUPS: &[SurveyGroup] = &[
    SurveyGroup {
        name: "Optical:DSS",
        surveys: &["DSS", "DSS1 Blue", "DSS1 Red", "DSS2 Red", "DSS2 Blue", "DSS2 IR"],
    },
    SurveyGroup {
        name: "Optical:SDSS",
        surveys: &["SDSSg", "SDSSi", "SDSSr", "SDSSu", "SDSSz"],
    },
    SurveyGroup {
        name: "Infrared:2MASS",
        surveys: &["2MASS-J", "2MASS-H", "2MASS-K"],
    },
    SurveyGroup {
        name: "Infrared:WISE",
        surveys: &["WISE 3.4", "WISE 4.6", "WISE 12", "WISE 22"],
    },
    SurveyGroup {
        name: "Infrared:IRAS",
        surveys: &["IRIS 12", "IRIS 25", "IRIS 60", "IRIS 100"],
    },
    SurveyGroup {
        name: "UV:GALEX",
        surveys: &["GALEX Near UV", "GALEX Far UV"],
    },
    SurveyGroup {
        name: "Radio",
        surveys: &["NVSS", "VLA FIRST (1.4 GHz)", "SUMSS 843 MHz", "TGSS ADR1"],
    },
    SurveyGroup {
        name: "X-ray:ROSAT",
        surveys: &["RASS-Cnt Soft", "RASS-Cnt Hard", "RASS-Cnt Broad"],
    },
];

/// The enumerated set of surveys offered to the user.
#[derive(Debug, Clone, Copy)]
pub struct SurveyCatalog {
    groups: &'static [SurveyGroup],
}

impl Default for SurveyCatalog {
    fn default() -> Self {
        Self::skyview()
    }
}

impl SurveyCatalog {
    /// Surveys served by NASA SkyView.
    pub fn skyview() -> Self {
        Self {
            groups: SKYVIEW_GROUPS,
        }
    }

    pub fn groups(&self) -> &'static [SurveyGroup] {
        self.groups
    }

    /// Every survey in catalog order.
    pub fn all(&self) -> impl Iterator<Item = Survey> + '_ {
        self.groups.iter().flat_map(|group| {
            group.surveys.iter().map(move |&id| Survey {
                group: group.name,
                id,
            })
        })
    }

    /// Find a survey by identifier (case-insensitive).
    pub fn find(&self, id: &str) -> Option<Survey> {
        let id = id.trim();
        self.all().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// Like [`find`](Self::find) but fails with `UnknownSurvey`.
    pub fn lookup(&self, id: &str) -> ViewerResult<Survey> {
        self.find(id)
            .ok_or_else(|| ViewerError::UnknownSurvey(id.to_string()))
    }

    /// Surveys of one group, e.g. "Optical:SDSS".
    pub fn group(&self, name: &str) -> Option<&'static SurveyGroup> {
        self.groups.iter().find(|g| g.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdss_group() {
        let catalog = SurveyCatalog::skyview();
        let group = catalog.group("Optical:SDSS").unwrap();
        assert_eq!(group.surveys, &["SDSSg", "SDSSi", "SDSSr", "SDSSu", "SDSSz"]);
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = SurveyCatalog::skyview();
        let survey = catalog.find("dss2 red").unwrap();
        assert_eq!(survey.id, "DSS2 Red");
        assert_eq!(survey.group, "Optical:DSS");
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = SurveyCatalog::skyview();
        assert!(matches!(
            catalog.lookup("Hubble Deep Field"),
            Err(ViewerError::UnknownSurvey(_))
        ));
    }

    #[test]
    fn test_ids_unique() {
        let catalog = SurveyCatalog::skyview();
        let ids: Vec<_> = catalog.all().map(|s| s.id.to_lowercase()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
