//! Test fixtures for webserver integration tests

#![allow(dead_code)]

use shared::{ConfigStore, Configuration};

pub const DOMAIN: &str = "https://meet.example.org";
pub const HOST: &str = "meet.example.org";
pub const ROOM: &str = "room-42";
pub const CODE: &str = "4021";

/// Direct-link page, TTS on
pub fn direct_config() -> Configuration {
    let mut config = Configuration::new(DOMAIN);
    config.enable_tts = true;
    config
}

/// Dial pad page resolving codes against `mapper_url`
pub fn ivr_config(mapper_url: &str) -> Configuration {
    let mut config = direct_config();
    config.ivr.enabled = true;
    config.ivr.confmapper_url = mapper_url.to_string();
    config.ivr.confmapper_endpoint = "/conferenceMapper".to_string();
    config
}

pub fn store(config: &Configuration) -> ConfigStore {
    let raw = serde_json::to_string(config).unwrap();
    ConfigStore::from_json("config.json", &raw).unwrap()
}
