//! Test fixtures for dial pad tests

use shared::Configuration;

pub struct TestFixtures;

impl TestFixtures {
    pub const DOMAIN: &'static str = "https://meet.example.org";
    pub const MAPPER_URL: &'static str = "https://mapper.example.org";
    pub const MAPPER_ENDPOINT: &'static str = "/conferenceMapper";
    pub const ROOM: &'static str = "room-42";
    pub const CODE: &'static str = "4021";

    /// IVR enabled, codes of 4 to 10 digits
    pub fn ivr_config() -> Configuration {
        let mut config = Configuration::new(Self::DOMAIN);
        config.ivr.enabled = true;
        config.ivr.confmapper_url = Self::MAPPER_URL.to_string();
        config.ivr.confmapper_endpoint = Self::MAPPER_ENDPOINT.to_string();
        config
    }
}
