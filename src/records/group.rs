/// Selects which record fields become point dimensions.
///
/// Named groups match every field whose name starts with the group's label;
/// `All` keeps every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FeatureGroup {
    All,
    Middle,
    #[default]
    Hard,
    Soft,
}

impl FeatureGroup {
    /// Field name prefix, or `None` when every field is selected.
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Middle => Some("middle"),
            Self::Hard => Some("hard"),
            Self::Soft => Some("soft"),
        }
    }
    pub fn admits(&self, name: &str) -> bool {
        self.label().map_or(true, |label| name.starts_with(label))
    }
}

impl std::fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().unwrap_or("all"))
    }
}

impl TryFrom<&str> for FeatureGroup {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "middle" => Ok(Self::Middle),
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            other => Err(format!("unknown feature group: {}", other)),
        }
    }
}
