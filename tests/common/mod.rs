#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use cfb_terminal::source::{DataSource, Endpoint};

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Canned upstream: `None` for an endpoint means that request fails.
#[derive(Clone, Default)]
pub struct FakeSource {
    pub records: Option<String>,
    pub games: Option<String>,
    pub teams: Option<String>,
    pub rankings: Option<String>,
    pub image: Option<Vec<u8>>,
}

impl FakeSource {
    pub fn georgia_2022() -> Self {
        Self {
            records: Some(read_fixture("records_2022.json")),
            games: Some(read_fixture("games_2022_georgia.json")),
            teams: Some(read_fixture("teams_2022.json")),
            rankings: Some(read_fixture("rankings_2022.json")),
            image: Some(png_bytes(&two_tone_logo())),
        }
    }
}

impl DataSource for FakeSource {
    fn get_json(&self, endpoint: Endpoint<'_>) -> Result<String> {
        let body = match endpoint {
            Endpoint::Records { .. } => &self.records,
            Endpoint::Games { .. } => &self.games,
            Endpoint::Teams { .. } => &self.teams,
            Endpoint::Rankings { .. } => &self.rankings,
        };
        body.clone()
            .ok_or_else(|| anyhow::anyhow!("http 500 Internal Server Error: {}", endpoint.label()))
    }

    fn proxy_image(&self, _logo_url: &str) -> Result<Vec<u8>> {
        self.image
            .clone()
            .ok_or_else(|| anyhow::anyhow!("http 404 Not Found: logo"))
    }
}

/// Mostly transparent padding around stripes of #2864a0, so black wins the
/// raw count and the theme must fall back to the second candidate.
pub fn two_tone_logo() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 0]));
    for y in 0..5 {
        for x in 0..20 {
            if x % 10 == 0 {
                img.put_pixel(x, y, Rgba([0x28, 0x64, 0xa0, 255]));
            }
        }
    }
    img
}

pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encoding should succeed");
    bytes
}
