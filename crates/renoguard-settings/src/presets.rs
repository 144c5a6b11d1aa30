use renoguard_domain::policy::EngineConfig;

/// Named starting points for `profile = ...` in `renoguard.toml`.
///
/// Per-category switches and coverage requirements are layered on top from the file.
pub fn preset(profile: &str) -> Option<EngineConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "advisory" => Some(advisory_profile()),
        _ => None,
    }
}

fn strict_profile() -> EngineConfig {
    EngineConfig {
        profile: "strict".to_string(),
        ..EngineConfig::default()
    }
}

fn advisory_profile() -> EngineConfig {
    // Same rules, but findings are reported without failing the run.
    EngineConfig {
        profile: "advisory".to_string(),
        enforce: false,
        ..EngineConfig::default()
    }
}
