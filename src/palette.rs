use std::collections::HashMap;

use anyhow::Result;
use image::RgbaImage;

#[derive(Debug, Clone, Copy)]
pub struct ProminentOptions {
    pub amount: usize,
    pub group: u8,
    pub sample: usize,
}

impl Default for ProminentOptions {
    fn default() -> Self {
        Self {
            amount: 3,
            group: 20,
            sample: 10,
        }
    }
}

// Ties keep first-seen order.
pub fn prominent_colors(img: &RgbaImage, opts: ProminentOptions) -> Result<Vec<[u8; 3]>> {
    if img.width() == 0 || img.height() == 0 {
        return Err(anyhow::anyhow!("image has no pixels"));
    }
    let step = opts.sample.max(1);
    let group = opts.group.max(1);

    let mut index: HashMap<[u8; 3], usize> = HashMap::new();
    let mut counts: Vec<([u8; 3], usize)> = Vec::new();
    for pixel in img.pixels().step_by(step) {
        let [r, g, b, a] = pixel.0;
        // A canvas reports fully transparent pixels as black.
        let rgb = if a == 0 { [0, 0, 0] } else { [r, g, b] };
        let key = rgb.map(|c| group_channel(c, group));
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts
        .into_iter()
        .take(opts.amount)
        .map(|(rgb, _)| rgb)
        .collect())
}

fn group_channel(value: u8, group: u8) -> u8 {
    let grouped = (f64::from(value) / f64::from(group)).round() * f64::from(group);
    grouped.min(255.0) as u8
}

pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                let v = ch.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(out)
        }
        6 => Some([
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn grouping_rounds_to_nearest_and_caps() {
        assert_eq!(group_channel(9, 20), 0);
        assert_eq!(group_channel(10, 20), 20);
        assert_eq!(group_channel(250, 20), 255);
        assert_eq!(group_channel(255, 20), 255);
    }

    #[test]
    fn dominant_color_comes_first() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([186, 12, 47, 255]));
        for x in 0..10 {
            img.put_pixel(x, 0, Rgba([255, 255, 255, 255]));
        }
        let colors = prominent_colors(
            &img,
            ProminentOptions {
                amount: 2,
                group: 20,
                sample: 1,
            },
        )
        .unwrap();
        assert_eq!(colors, vec![[180, 20, 40], [255, 255, 255]]);
    }

    #[test]
    fn transparent_pixels_count_as_black() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([200, 200, 200, 0]));
        let colors = prominent_colors(&img, ProminentOptions::default()).unwrap();
        assert_eq!(to_hex(colors[0]), "#000000");
    }

    #[test]
    fn empty_image_is_an_error() {
        let img = RgbaImage::new(0, 0);
        assert!(prominent_colors(&img, ProminentOptions::default()).is_err());
    }

    #[test]
    fn hex_round_trips_both_lengths() {
        assert_eq!(parse_hex("#336699"), Some([0x33, 0x66, 0x99]));
        assert_eq!(parse_hex("#000"), Some([0, 0, 0]));
        assert_eq!(parse_hex("#fFf"), Some([255, 255, 255]));
        assert_eq!(parse_hex("336699"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(to_hex([0x33, 0x66, 0x99]), "#336699");
    }
}
