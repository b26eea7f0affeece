use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Package-manager coordinate kinds recognized by label derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateKind {
    Maven,
    Npm,
    Nuget,
    Pypi,
    Generic,
}

impl CoordinateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CoordinateKind::Maven => "maven",
            CoordinateKind::Npm => "npm",
            CoordinateKind::Nuget => "nuget",
            CoordinateKind::Pypi => "pypi",
            CoordinateKind::Generic => "generic",
        }
    }
}

/// A typed package identifier exposed by an artifact.
///
/// `canonicalize` renders the purl-style form used as the display identity in
/// reports, e.g. `pkg:maven/org.example/demo@1.2.0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub kind: CoordinateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coordinate {
    pub fn new(
        kind: CoordinateKind,
        namespace: Option<&str>,
        name: &str,
        version: Option<&str>,
    ) -> Self {
        Self {
            kind,
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            version: version.map(str::to_string),
        }
    }

    pub fn canonicalize(&self) -> String {
        let mut out = format!("pkg:{}", self.kind.as_str());
        if let Some(namespace) = &self.namespace {
            out.push('/');
            out.push_str(namespace);
        }
        out.push('/');
        out.push_str(&self.name);
        if let Some(version) = &self.version {
            out.push('@');
            out.push_str(version);
        }
        out
    }
}
