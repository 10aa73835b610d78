use anyhow::{anyhow, Result};
use landmarks_core::{
    entities::{MapPoint, Url},
    projection::Viewport,
    util::image::UploadPolicy,
};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "landmarks.toml";

const ENV_NAME_API_URL: &str = "LANDMARKS_API_URL";

pub struct Config {
    pub api: Api,
    pub upload: UploadPolicy,
    pub map: Viewport,
    /// Replaces a location sensor
    pub location: Option<MapPoint>,
}

pub struct Api {
    pub base_url: Url,
    pub image_base_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            log::debug!("Use API URL from {ENV_NAME_API_URL}");
            let mut api = raw_config.api.unwrap_or_default();
            api.base_url = api_url;
            raw_config.api = Some(api);
        }
        Self::try_from(raw_config)
    }
}

fn parse_base_url(url: &str) -> Result<Url> {
    let mut url: Url = url
        .trim()
        .parse()
        .map_err(|err| anyhow!("Invalid URL '{url}': {err}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("Invalid base URL '{url}'"));
    }
    // Joined paths must not replace the last segment
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            upload,
            map,
            location,
        } = from;

        let raw::Api {
            base_url,
            image_base_url,
            timeout,
        } = api.unwrap_or_default();
        let base_url = parse_base_url(&base_url)?;
        let image_base_url = match image_base_url {
            Some(url) => parse_base_url(&url)?,
            None => base_url.clone(),
        };
        if timeout.is_zero() {
            return Err(anyhow!("The request timeout must not be zero"));
        }
        let api = Api {
            base_url,
            image_base_url,
            timeout,
        };

        let raw::Upload {
            max_width,
            max_height,
            jpeg_quality,
        } = upload.unwrap_or_default();
        if max_width == 0 || max_height == 0 {
            return Err(anyhow!(
                "Invalid upload envelope {max_width}x{max_height}"
            ));
        }
        if !(1..=100).contains(&jpeg_quality) {
            return Err(anyhow!("Invalid JPEG quality {jpeg_quality}"));
        }
        let upload = UploadPolicy {
            max_width,
            max_height,
            quality: jpeg_quality,
        };

        let raw::Map {
            center_lat,
            center_lng,
            zoom,
        } = map.unwrap_or_default();
        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
            .ok_or_else(|| anyhow!("Invalid map center {center_lat},{center_lng}"))?;
        if !zoom.is_finite() || zoom < 0.0 {
            return Err(anyhow!("Invalid map zoom {zoom}"));
        }
        let map = Viewport::new(center, zoom);

        let location = location
            .map(|raw::Location { lat, lng }| {
                MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid location {lat},{lng}"))
            })
            .transpose()?;
        if let Some(pos) = location {
            log::info!("Use fixed location {pos}");
        }

        Ok(Self {
            api,
            upload,
            map,
            location,
        })
    }
}
