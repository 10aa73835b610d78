use std::{path::PathBuf, rc::Rc};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use landmarks_application::prelude::*;
use landmarks_core::{
    entities::{EditRecord, Id, Landmark},
    store::LandmarkStore,
};
use landmarks_gateways::{
    http::HttpLandmarkService, image_file::FileImageSource, location::FixedLocation,
};

use crate::{config::Config, render::Terminal};

#[derive(Parser, Debug)]
#[command(name = "landmarks", version, about = "Manage geotagged landmarks")]
pub struct Args {
    /// Configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the landmarks as map markers
    Markers {
        /// Only show landmarks with a matching title
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Show all landmarks as a list
    List,
    /// Create a new landmark
    Create {
        #[arg(long)]
        title: String,
        /// Defaults to the configured location
        #[arg(long)]
        lat: Option<String>,
        /// Defaults to the configured location
        #[arg(long)]
        lng: Option<String>,
        /// JPEG or PNG file
        #[arg(long)]
        image: PathBuf,
    },
    /// Edit an existing landmark
    Update {
        id: Id,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        lat: Option<String>,
        #[arg(long)]
        lng: Option<String>,
        /// Replaces the current image
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete a landmark
    Delete {
        /// Row in the list
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        position: Option<usize>,
        #[arg(long)]
        id: Option<Id>,
    },
}

type Coordinator = MutationCoordinator<HttpLandmarkService>;

fn coordinator(cfg: &Config) -> Result<Rc<Coordinator>> {
    let service = HttpLandmarkService::new(&cfg.api.base_url, cfg.api.timeout)?;
    log::debug!("Using endpoint {}", service.endpoint());
    let store = Rc::new(LandmarkStore::new(Rc::new(service)));
    Ok(Rc::new(MutationCoordinator::new(store, cfg.upload)))
}

async fn find(coordinator: &Coordinator, id: Id) -> Result<Landmark> {
    coordinator.store().refresh().await?;
    coordinator
        .store()
        .get(id)
        .ok_or_else(|| anyhow!("Landmark {id} not found"))
}

pub async fn run(command: Command, cfg: Config) -> Result<()> {
    let coordinator = coordinator(&cfg)?;
    let image_base_url = Some(cfg.api.image_base_url.clone());
    match command {
        Command::Markers { search } => {
            let mut screen =
                OverviewScreen::new(coordinator, Terminal, image_base_url, cfg.map);
            if let Some(query) = search {
                screen = screen.with_query(query);
            }
            screen.load().await?;
            screen.detach();
        }
        Command::List => {
            let mut screen = RecordsScreen::new(coordinator, Terminal, image_base_url);
            screen.load().await?;
            screen.detach();
        }
        Command::Create {
            title,
            lat,
            lng,
            image,
        } => {
            let mut form = EntryForm::create(Rc::clone(&coordinator));
            form.input.title = title;
            form.input.lat = lat.unwrap_or_default();
            form.input.lng = lng.unwrap_or_default();
            form.prefill_location(&FixedLocation::new(cfg.location)).await;
            if !form.pick_image(&FileImageSource::new(&image)).await? {
                return Err(anyhow!("No image in {}", image.display()));
            }
            let created = form.submit().await?;
            println!("Created [{}] {}", created.id, created.title);
        }
        Command::Update {
            id,
            title,
            lat,
            lng,
            image,
        } => {
            let record = EditRecord::from(&find(&coordinator, id).await?);
            let mut form = EntryForm::edit(Rc::clone(&coordinator), record);
            if let Some(title) = title {
                form.input.title = title;
            }
            if let Some(lat) = lat {
                form.input.lat = lat;
            }
            if let Some(lng) = lng {
                form.input.lng = lng;
            }
            if let Some(path) = image {
                form.pick_image(&FileImageSource::new(path)).await?;
            }
            let updated = form.submit().await?;
            println!("Updated [{}] {}", updated.id, updated.title);
        }
        Command::Delete { position, id } => {
            if let Some(id) = id {
                let landmark = find(&coordinator, id).await?;
                coordinator.delete(&landmark).await?;
                println!("Deleted [{id}] {}", landmark.title);
            } else if let Some(position) = position {
                let mut screen = RecordsScreen::new(coordinator, Terminal, image_base_url);
                screen.load().await?;
                if screen.swipe(position, Swipe::Left).await? == SwipeAction::Ignored {
                    return Err(anyhow!("No landmark at position {position}"));
                }
            }
        }
    }
    Ok(())
}
