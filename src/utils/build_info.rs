use std::fmt;

/// What `version` reports about the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub built_at: Option<&'static str>,
    pub target: Option<&'static str>,
    pub profile: Option<&'static str>,
}

impl BuildMetadata {
    /// Label/value pairs for the `version` table; missing values read `unknown`.
    pub fn rows(&self) -> [(&'static str, &'static str); 4] {
        let or_unknown = |value: Option<&'static str>| value.unwrap_or("unknown");
        [
            ("Commit", or_unknown(self.commit)),
            ("Built", or_unknown(self.built_at)),
            ("Target", or_unknown(self.target)),
            ("Profile", or_unknown(self.profile)),
        ]
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Toll Tax {}", self.version)?;
        if let Some(commit) = self.commit {
            write!(f, " ({commit})")?;
        }
        Ok(())
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("TOLL_TAX_BUILD_COMMIT"),
        built_at: option_env!("TOLL_TAX_BUILD_DATE"),
        target: option_env!("TOLL_TAX_BUILD_TARGET"),
        profile: option_env!("TOLL_TAX_BUILD_PROFILE"),
    }
}
