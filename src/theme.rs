use anyhow::{Context, Result};
use image::DynamicImage;
use image::imageops::FilterType;

use crate::palette::{ProminentOptions, parse_hex, prominent_colors, to_hex};

const CANDIDATES: usize = 2;
const LOGO_ART_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    White,
    Black,
}

impl TextTone {
    pub fn label(self) -> &'static str {
        match self {
            TextTone::White => "white",
            TextTone::Black => "black",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: String,
    pub rgb: [u8; 3],
    pub text: TextTone,
}

impl Theme {
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = parse_hex(hex).with_context(|| format!("not a hex color: {hex}"))?;
        Ok(Self {
            background: hex.to_string(),
            rgb,
            text: text_tone(brightness(rgb)),
        })
    }
}

/// `0.299R + 0.587G + 0.114B`, summed in integer per-mille so that a gray of
/// 128 lands on exactly 128.0 instead of just under it.
pub fn brightness(rgb: [u8; 3]) -> f64 {
    let milli = 299 * u32::from(rgb[0]) + 587 * u32::from(rgb[1]) + 114 * u32::from(rgb[2]);
    f64::from(milli) / 1000.0
}

pub fn text_tone(brightness: f64) -> TextTone {
    if brightness < 128.0 {
        TextTone::White
    } else {
        TextTone::Black
    }
}

fn is_black(hex: &str) -> bool {
    hex == "#000" || hex == "#000000"
}

/// First candidate, unless it is pure black and a runner-up exists.
pub fn pick_theme_color(candidates: &[String]) -> Option<&str> {
    let first = candidates.first()?;
    if is_black(first) {
        if let Some(second) = candidates.get(1) {
            return Some(second);
        }
    }
    Some(first)
}

pub fn decode_logo(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).context("logo image could not be decoded")
}

pub fn theme_from_logo(img: &DynamicImage) -> Result<Theme> {
    let colors = prominent_colors(
        &img.to_rgba8(),
        ProminentOptions {
            amount: CANDIDATES,
            ..ProminentOptions::default()
        },
    )?;
    let hexes: Vec<String> = colors.into_iter().map(to_hex).collect();
    let chosen = pick_theme_color(&hexes).context("no colors extracted")?;
    Theme::from_hex(chosen)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoArt {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Option<[u8; 3]>>,
}

impl LogoArt {
    pub fn from_image(img: &DynamicImage) -> Self {
        let small = img
            .resize(LOGO_ART_SIZE, LOGO_ART_SIZE, FilterType::Triangle)
            .to_rgba8();
        let pixels = small
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                if a < 64 { None } else { Some([r, g, b]) }
            })
            .collect();
        Self {
            width: small.width(),
            height: small.height(),
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y * self.width + x) as usize)
            .copied()
            .flatten()
    }
}
