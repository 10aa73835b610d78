use landmarks_application::view::{ListRenderer, MapRenderer, Notice};
use landmarks_core::projection::{Marker, Row, Viewport};

/// Prints view models to the standard output.
#[derive(Debug, Default)]
pub struct Terminal;

fn print_notice(notice: &Notice) {
    match notice {
        Notice::Info(msg) => println!("{msg}"),
        Notice::Error(msg) => eprintln!("Error: {msg}"),
    }
}

impl MapRenderer for Terminal {
    fn show_markers(&self, markers: &[Marker]) {
        println!("{} marker(s)", markers.len());
        for Marker {
            id,
            pos,
            title,
            thumbnail_url,
        } in markers
        {
            print!("[{id}] {title} @ {pos}");
            if let Some(url) = thumbnail_url {
                print!(" ({url})");
            }
            println!();
        }
    }

    fn center_on(&self, viewport: &Viewport) {
        println!("Map centered on {} (zoom {})", viewport.center, viewport.zoom);
    }

    fn notice(&self, notice: &Notice) {
        print_notice(notice);
    }
}

impl ListRenderer for Terminal {
    fn show_rows(&self, rows: &[Row]) {
        for (position, row) in rows.iter().enumerate() {
            println!("{position:>3}. [{}] {} | {}", row.id, row.title, row.caption);
            if let Some(url) = &row.image_url {
                println!("       {url}");
            }
        }
    }

    fn remove_row(&self, position: usize) {
        log::debug!("Removed row {position}");
    }

    fn restore_row(&self, position: usize, row: &Row) {
        println!("Restored row {position}: [{}] {}", row.id, row.title);
    }

    fn notice(&self, notice: &Notice) {
        print_notice(notice);
    }
}
