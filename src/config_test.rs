use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_env_is_empty() {
    let config = ServerConfig::from_lookup(|_| None).expect("defaults should parse");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.assets_dir, PathBuf::from("public"));
    assert_eq!(config.site, SiteConfig::default());
}

#[test]
fn port_and_assets_dir_are_read() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("ASSETS_DIR", "/srv/site")]))
        .expect("config should parse");
    assert_eq!(config.port, 8080);
    assert_eq!(config.images_dir(), PathBuf::from("/srv/site/images"));
}

#[test]
fn blank_port_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "  ")])).expect("config should parse");
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).expect_err("port should be rejected");
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn site_config_reads_same_lookup() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("WHATSAPP_NUMBER", "5511999999999"),
        ("FORM_ENDPOINT", "https://forms.example.com/lead"),
    ]))
    .expect("config should parse");
    assert_eq!(config.site.whatsapp_number, "5511999999999");
    assert_eq!(config.site.form_endpoint.as_deref(), Some("https://forms.example.com/lead"));
}
