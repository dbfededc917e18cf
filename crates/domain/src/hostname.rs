use crate::background::BackgroundPatternSet;

/// Lowercases a hostname and strips the trailing root dot.
pub fn normalize_hostname(hostname: &str) -> String {
    hostname.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// True when `hostname` equals `domain` or is one of its subdomains.
///
/// Comparison is on whole labels, so `www.roblox.com` matches `roblox.com`
/// while `notroblox.com` does not.
pub fn matches_domain(hostname: &str, domain: &str) -> bool {
    let hostname = hostname.trim_end_matches('.');
    let domain = domain.trim_end_matches('.');
    if domain.is_empty() {
        return false;
    }
    if hostname.eq_ignore_ascii_case(domain) {
        return true;
    }
    hostname.len() > domain.len()
        && hostname.as_bytes()[hostname.len() - domain.len() - 1] == b'.'
        && hostname[hostname.len() - domain.len()..].eq_ignore_ascii_case(domain)
}

/// Reduces a hostname to its last two labels.
///
/// This is a fixed heuristic, not a public-suffix lookup: `bbc.co.uk`
/// reduces to `co.uk`.
pub fn root_domain(hostname: &str) -> String {
    let hostname = normalize_hostname(hostname);
    let mut dots = hostname.rmatch_indices('.');
    dots.next();
    match dots.next() {
        Some((idx, _)) => hostname[idx + 1..].to_string(),
        None => hostname,
    }
}

/// Noise, domain and grouping decisions for queried hostnames.
#[derive(Debug, Clone)]
pub struct HostnameClassifier {
    background: BackgroundPatternSet,
}

impl HostnameClassifier {
    pub fn new(background: BackgroundPatternSet) -> Self {
        Self { background }
    }

    pub fn background_patterns(&self) -> &BackgroundPatternSet {
        &self.background
    }

    #[inline]
    pub fn is_background(&self, hostname: &str) -> bool {
        self.background.matches(hostname)
    }

    #[inline]
    pub fn matches_domain(&self, hostname: &str, domain: &str) -> bool {
        matches_domain(hostname, domain)
    }

    #[inline]
    pub fn root_domain(&self, hostname: &str) -> String {
        root_domain(hostname)
    }
}

impl Default for HostnameClassifier {
    fn default() -> Self {
        Self::new(BackgroundPatternSet::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_domain_short_names() {
        assert_eq!(root_domain("localhost"), "localhost");
        assert_eq!(root_domain("roblox.com."), "roblox.com");
        assert_eq!(root_domain(""), "");
    }

    #[test]
    fn test_matches_domain_trailing_dots() {
        assert!(matches_domain("www.roblox.com.", "roblox.com"));
        assert!(matches_domain("roblox.com", "roblox.com."));
        assert!(!matches_domain("roblox.com", ""));
    }
}
