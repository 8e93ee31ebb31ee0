use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use image::{Rgba, RgbaImage};

use cfb_terminal::palette::{ProminentOptions, prominent_colors};
use cfb_terminal::polls::{Poll, RankedSchool, RankingWeek, collect_poll_ranks};

const SCHOOLS: [&str; 8] = [
    "Georgia",
    "Alabama",
    "Ohio State",
    "Michigan",
    "TCU",
    "Tennessee",
    "USC",
    "Clemson",
];

fn sample_logo(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as i64 - size as i64 / 2;
        let dy = y as i64 - size as i64 / 2;
        if dx * dx + dy * dy > (size as i64 / 2).pow(2) {
            Rgba([0, 0, 0, 0])
        } else if (x / 16 + y / 16) % 2 == 0 {
            Rgba([186, 12, 47, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

fn sample_season(weeks: u32, polls: usize) -> Vec<RankingWeek> {
    (0..weeks)
        .map(|week| RankingWeek {
            season: 2022,
            week: week + 1,
            polls: (0..polls)
                .map(|p| Poll {
                    poll: format!("Poll {p}"),
                    ranks: (0..25u32)
                        .map(|rank| RankedSchool {
                            rank: rank + 1,
                            school: SCHOOLS[(rank as usize + p) % SCHOOLS.len()].to_string(),
                            points: Some(1600 - rank * 60),
                            first_place_votes: Some(0),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

fn bench_prominent_colors(c: &mut Criterion) {
    let logo = sample_logo(500);
    let opts = ProminentOptions {
        amount: 2,
        ..ProminentOptions::default()
    };
    c.bench_function("prominent_colors_500px", |b| {
        b.iter(|| prominent_colors(black_box(&logo), opts).expect("non-empty logo"))
    });
}

fn bench_collect_poll_ranks(c: &mut Criterion) {
    let weeks = sample_season(16, 4);
    c.bench_function("collect_poll_ranks_full_season", |b| {
        b.iter(|| collect_poll_ranks(black_box(&weeks), "2022", "georgia"))
    });
}

criterion_group!(benches, bench_prominent_colors, bench_collect_poll_ranks);
criterion_main!(benches);
