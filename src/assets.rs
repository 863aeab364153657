/// Image reference resolution for the photo gallery
///
/// Data files reference images by relative path, historically under an
/// `assets/` directory that later deployments renamed to `images/`. The
/// resolver applies that pure string rewrite, joins the result onto the
/// assets root on disk, and substitutes a generated placeholder for any
/// file that is missing. No network fetches, no failure propagation.

use iced::widget::image::Handle;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::state::data::Album;

/// Side length of the generated placeholder square
const PLACEHOLDER_SIZE: u32 = 96;

/// Apply the fixed path rewrite to an image reference
///
/// Strips one leading slash (the references are relative) and rewrites a
/// leading `assets/` segment to `images/`. Anything else passes through.
pub fn rewrite_asset_path(reference: &str) -> String {
    let clean = reference.strip_prefix('/').unwrap_or(reference);

    match clean.strip_prefix("assets/") {
        Some(rest) => format!("images/{}", rest),
        None => clean.to_string(),
    }
}

/// Resolves image references against an assets root directory
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
    placeholder: Handle,
}

impl AssetResolver {
    /// Create a resolver rooted at `root` (usually the data file's directory)
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            placeholder: Handle::from_bytes(placeholder_png()),
        }
    }

    /// The assets root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The on-disk path for a reference, or None when the file is missing
    pub fn resolve_path(&self, reference: &str) -> Option<PathBuf> {
        let path = self.root.join(rewrite_asset_path(reference));
        path.is_file().then_some(path)
    }

    /// The generated placeholder handle
    pub fn placeholder(&self) -> Handle {
        self.placeholder.clone()
    }

    /// A display handle for a reference, falling back to the placeholder
    pub fn handle(&self, reference: &str) -> Handle {
        match self.resolve_path(reference) {
            Some(path) => Handle::from_path(path),
            None => self.placeholder.clone(),
        }
    }
}

/// How many referenced images were found on disk after a load
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanReport {
    pub present: usize,
    pub missing: usize,
}

/// Walk the assets root once and check every referenced image against it
pub fn verify_images(root: &Path, albums: &[Album]) -> ScanReport {
    let on_disk: HashSet<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.into_path())
        .collect();

    let mut report = ScanReport::default();
    for album in albums {
        for reference in &album.images {
            let path = root.join(rewrite_asset_path(reference));
            if on_disk.contains(&path) {
                report.present += 1;
            } else {
                report.missing += 1;
            }
        }
    }

    if report.missing > 0 {
        println!(
            "⚠️  {} referenced images missing under {}",
            report.missing,
            root.display()
        );
    } else {
        println!("🖼️  All {} referenced images found", report.present);
    }

    report
}

/// Encode the flat gray placeholder square as PNG bytes
fn placeholder_png() -> Vec<u8> {
    let pixels = image::RgbaImage::from_pixel(
        PLACEHOLDER_SIZE,
        PLACEHOLDER_SIZE,
        image::Rgba([58, 58, 66, 255]),
    );

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encoding the placeholder to memory cannot fail");

    bytes
}
