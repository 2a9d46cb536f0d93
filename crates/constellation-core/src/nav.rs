use crate::error::{Error, Result};
use crate::grid::PillarId;
use std::str::FromStr;

/// Logical views the page components navigate between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Homepage,
    Architect,
    System,
    Process,
    Proof,
    Blog,
    Contact,
    Pillar(PillarId),
}

impl View {
    pub fn path(self) -> String {
        match self {
            View::Homepage => "/".to_string(),
            View::Architect => "/architect".to_string(),
            View::System => "/system".to_string(),
            View::Process => "/process".to_string(),
            View::Proof => "/proof".to_string(),
            View::Blog => "/blog".to_string(),
            View::Contact => "/contact".to_string(),
            View::Pillar(p) => format!("/system/{}", p),
        }
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let view = match name.as_str() {
            "homepage" | "home" => View::Homepage,
            "architect" | "about" => View::Architect,
            "system" => View::System,
            "process" => View::Process,
            "proof" => View::Proof,
            "blog" => View::Blog,
            "contact" => View::Contact,
            other => View::Pillar(
                other
                    .parse::<PillarId>()
                    .map_err(|_| Error::UnknownView(s.to_string()))?,
            ),
        };
        Ok(view)
    }
}

/// Client route for `onNavigate(view, sectionId?)`.
pub fn route(view: View, section: Option<&str>) -> String {
    let mut path = view.path();
    if let Some(section) = section.map(str::trim).filter(|s| !s.is_empty()) {
        path.push('#');
        path.push_str(section.trim_start_matches('#'));
    }
    path
}
