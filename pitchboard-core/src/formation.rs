use crate::marker::{Role, Team};
use crate::pitch::Point;
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("formations.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationKind {
    Classic,
    Attack,
    Defense,
}

/// One slot in a formation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub team: Team,
    #[serde(default)]
    pub role: Role,
    pub number: Option<u8>,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub kind: FormationKind,
    pub label: String,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError(pub String);

impl CatalogError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The set of formations the board can apply. Tables are data, not code;
/// the built-in set ships embedded in the binary.
#[derive(Debug, Clone)]
pub struct FormationCatalog {
    formations: Vec<Formation>,
}

impl FormationCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let formations: Vec<Formation> = serde_json::from_str(json)
            .map_err(|err| CatalogError::new(format!("malformed formation table: {err}")))?;

        if formations.is_empty() {
            return Err(CatalogError::new("formation catalog is empty"));
        }
        for (index, formation) in formations.iter().enumerate() {
            if formation.placements.is_empty() {
                return Err(CatalogError::new(format!(
                    "formation {:?} has no placements",
                    formation.kind
                )));
            }
            if formations[..index]
                .iter()
                .any(|earlier| earlier.kind == formation.kind)
            {
                return Err(CatalogError::new(format!(
                    "duplicate formation {:?}",
                    formation.kind
                )));
            }
        }

        Ok(Self { formations })
    }

    /// The embedded catalog. A parse failure here is a build defect, so
    /// this panics rather than surfacing a Result to every caller.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG)
            .unwrap_or_else(|err| panic!("invalid built-in formation catalog: {:?}", err))
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn get(&self, kind: FormationKind) -> Option<&Formation> {
        self.formations
            .iter()
            .find(|formation| formation.kind == kind)
    }
}
