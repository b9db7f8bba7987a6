const LOW_END_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const PERFORMANCE_CLASS: &str = "performance-mode";

/// Mobile and other weak user agents, matched case-insensitively.
pub fn is_low_end_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    LOW_END_AGENTS.iter().any(|needle| ua.contains(needle))
}

pub fn wants_performance_mode(user_agent: &str, reduced_motion: bool) -> bool {
    reduced_motion || is_low_end_user_agent(user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const PHONE: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    #[test]
    fn agents() {
        assert!(!is_low_end_user_agent(DESKTOP));
        assert!(is_low_end_user_agent(PHONE));
        assert!(is_low_end_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_low_end_user_agent("mozilla/5.0 (linux; ANDROID 14)"));
    }

    #[test]
    fn reduced_motion_wins() {
        assert!(wants_performance_mode(DESKTOP, true));
        assert!(!wants_performance_mode(DESKTOP, false));
    }
}
