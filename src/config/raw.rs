use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("landmarks.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub upload: Option<Upload>,
    pub map: Option<Map>,
    pub location: Option<Location>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
    pub image_base_url: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Upload {
    pub max_width: u32,
    pub max_height: u32,
    pub jpeg_quality: u8,
}

impl Default for Upload {
    fn default() -> Self {
        Config::default().upload.expect("Upload configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}
