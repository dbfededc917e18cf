use crate::errors::DomainError;
use crate::hostname::normalize_hostname;
use std::fmt;
use std::str::FromStr;

/// Curated housekeeping hostnames: OS telemetry, time sync, certificate
/// revocation and connectivity checks.
pub const BUILTIN_BACKGROUND_PATTERNS: &[&str] = &[
    // Microsoft connectivity checks & telemetry
    "msftconnecttest.com",
    "msftncsi.com",
    "windowsupdate.com",
    "update.microsoft.com",
    "telemetry.microsoft.com",
    "vortex.data.microsoft.com",
    "settings-win.data.microsoft.com",
    "watson.telemetry.microsoft.com",
    "smartscreen.microsoft.com",
    // NTP / time sync
    "time.windows.com",
    "time.apple.com",
    "time.cloudflare.com",
    "ntp.org",
    // OCSP / CRL
    "ocsp.",
    "crl.",
    // Apple background services
    "captive.apple.com",
    "appleanalytics.com",
    "apple-cloudkit.com",
    "push.apple.com",
    "configuration.apple.com",
    "mesu.apple.com",
    // Google connectivity checks
    "connectivitycheck.gstatic.com",
    "clients*.google.com",
    // Generic keep-alive probes
    "^connectivity-check",
    "^captive",
];

/// One entry of a [`BackgroundPatternSet`].
///
/// Textual forms:
/// - `name.tld` matches the name and every subdomain; a `*` inside a label
///   matches one or more characters of that label (`clients*.google.com`).
/// - `^label` matches hostnames whose first label is `label`.
/// - `label.` matches hostnames with `label` anywhere before the final label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundPattern {
    Suffix(Vec<String>),
    LeadingLabel(String),
    InnerLabel(String),
}

impl BackgroundPattern {
    pub fn matches(&self, hostname: &str) -> bool {
        let labels: Vec<&str> = hostname.split('.').collect();
        match self {
            BackgroundPattern::Suffix(pattern) => {
                labels.len() >= pattern.len()
                    && pattern
                        .iter()
                        .rev()
                        .zip(labels.iter().rev())
                        .all(|(p, l)| label_matches(p, l))
            }
            BackgroundPattern::LeadingLabel(label) => {
                labels.len() > 1 && labels[0] == label.as_str()
            }
            BackgroundPattern::InnerLabel(label) => labels
                .split_last()
                .is_some_and(|(_, init)| init.iter().any(|l| *l == label.as_str())),
        }
    }
}

impl FromStr for BackgroundPattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        let invalid = || DomainError::InvalidBackgroundPattern(s.to_string());

        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        if let Some(label) = raw.strip_prefix('^') {
            if label.is_empty() || label.contains(['.', '*']) {
                return Err(invalid());
            }
            return Ok(BackgroundPattern::LeadingLabel(label.to_string()));
        }

        if let Some(label) = raw.strip_suffix('.') {
            if label.is_empty() || label.contains(['.', '*']) {
                return Err(invalid());
            }
            return Ok(BackgroundPattern::InnerLabel(label.to_string()));
        }

        let labels: Vec<String> = raw.split('.').map(str::to_string).collect();
        if labels.iter().any(String::is_empty) {
            return Err(invalid());
        }
        Ok(BackgroundPattern::Suffix(labels))
    }
}

impl fmt::Display for BackgroundPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundPattern::Suffix(labels) => f.write_str(&labels.join(".")),
            BackgroundPattern::LeadingLabel(label) => write!(f, "^{label}"),
            BackgroundPattern::InnerLabel(label) => write!(f, "{label}."),
        }
    }
}

/// Glob match of a single label where `*` consumes at least one character.
fn label_matches(pattern: &str, label: &str) -> bool {
    let Some((prefix, rest)) = pattern.split_once('*') else {
        return pattern == label;
    };
    let Some(tail) = label.strip_prefix(prefix) else {
        return false;
    };
    (1..=tail.len())
        .filter(|&i| tail.is_char_boundary(i))
        .any(|i| label_matches(rest, &tail[i..]))
}

/// Immutable set of background patterns, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundPatternSet {
    patterns: Vec<BackgroundPattern>,
}

impl BackgroundPatternSet {
    pub fn builtin() -> Self {
        let patterns = BUILTIN_BACKGROUND_PATTERNS
            .iter()
            .filter_map(|p| p.parse().ok())
            .collect();
        Self { patterns }
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Appends user patterns to this set.
    pub fn with_extra<I, S>(mut self, extra: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = Self::from_patterns(extra)?;
        self.patterns.extend(extra.patterns);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[BackgroundPattern] {
        &self.patterns
    }

    pub fn matches(&self, hostname: &str) -> bool {
        let hostname = normalize_hostname(hostname);
        if hostname.is_empty() {
            return false;
        }
        self.patterns.iter().any(|p| p.matches(&hostname))
    }
}

impl Default for BackgroundPatternSet {
    fn default() -> Self {
        Self::builtin()
    }
}
