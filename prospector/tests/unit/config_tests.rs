use prospector::config::{AgentConfig, DEFAULT_API_BASE, DEFAULT_MODEL};

// Environment mutation happens inside a single test to keep the harness
// race-free when tests run in parallel.
#[test]
fn from_env_requires_the_api_key() {
    envmnt::remove("GEMINI_API_KEY");
    let err = AgentConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    envmnt::set("GEMINI_API_KEY", "test-key");
    let config = AgentConfig::from_env().unwrap();
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert!(config.completions_url().ends_with("/chat/completions"));

    envmnt::remove("GEMINI_API_KEY");
}
