// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated frame loop over three parallax layers.
//!
//! Loads layer art through an [`AssetReader`] (generated PNGs served as
//! embedded data, with the working directory as fallback), runs 120 frames
//! on a [`ManualClock`], and records scroll events to both a
//! [`PrettyPrintSink`] and a [`RecorderSink`]. Writes a Chrome trace JSON
//! file and the last frame as a PNG.
//!
//! Children draw mirrored about the viewport origin, so layer positions are
//! negative offsets from the top-left corner.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see composite and asset logging.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::PathBuf;

use backdrop_assets::{AssetReader, EmbeddedAssets};
use backdrop_core::clock::ManualClock;
use backdrop_core::drawable::{SharedDrawable, shared};
use backdrop_core::scroll::{ScrollConfig, ScrollingBackground, WrapPolicy};
use backdrop_core::sprite::Sprite;
use backdrop_core::time::HostTime;
use backdrop_core::trace::{RedrawEvent, ScrollStepEvent, TraceSink, Tracer, WrapEvent};
use backdrop_debug::pretty::PrettyPrintSink;
use backdrop_debug::recorder::RecorderSink;
use image::{ImageFormat, Rgba, RgbaImage};
use kurbo::{Point, Vec2};
use tracing_subscriber::EnvFilter;

const FRAME_COUNT: u32 = 120;
const FRAME_MILLIS: u64 = 16;
const WIDTH: u32 = 160;
const HEIGHT: u32 = 90;

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TraceSink,
    second: &'a mut dyn TraceSink,
}

impl std::fmt::Debug for Tee<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tee").finish_non_exhaustive()
    }
}

impl TraceSink for Tee<'_> {
    fn on_scroll_step(&mut self, e: &ScrollStepEvent) {
        self.first.on_scroll_step(e);
        self.second.on_scroll_step(e);
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        self.first.on_wrap(e);
        self.second.on_wrap(e);
    }

    fn on_redraw(&mut self, e: &RedrawEvent) {
        self.first.on_redraw(e);
        self.second.on_redraw(e);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // -- assets ------------------------------------------------------------
    let reader = AssetReader::with_embedded(std::env::current_dir()?, generated_layers()?);
    match reader.read_dir("layers") {
        Ok(entries) => {
            for entry in entries {
                tracing::info!(
                    asset = %entry.name,
                    dir = entry.is_dir,
                    source = ?entry.source,
                    "layer asset"
                );
            }
        }
        Err(err) => tracing::info!(error = %err, "no layer directory on disk"),
    }
    let sky = load_sprite(&reader, "layers/sky.png", Point::ZERO)?;
    let hills = load_sprite(&reader, "layers/hills.png", Point::new(0.0, -50.0))?;
    let clouds = load_sprite(&reader, "layers/clouds.png", Point::new(-30.0, -10.0))?;

    // -- composites --------------------------------------------------------
    let clock = ManualClock::new(HostTime::from_millis(1_000));
    let mut far = ScrollingBackground::from_config(
        vec![sky],
        &ScrollConfig::horizontal(40, WIDTH, HEIGHT),
        clock.clone(),
    );
    let mut near = ScrollingBackground::from_config(
        vec![hills],
        &ScrollConfig::horizontal(8, WIDTH, HEIGHT),
        clock.clone(),
    );
    let mut weather = ScrollingBackground::from_config(
        vec![clouds],
        &ScrollConfig::vertical(-30, WIDTH, HEIGHT).with_wrap(WrapPolicy::Once),
        clock.clone(),
    );
    far.set_layer(0);
    weather.set_layer(1);
    near.set_layer(2);

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- simulated loop ----------------------------------------------------
    let mut frame = RgbaImage::new(WIDTH, HEIGHT);
    for frame_index in 0..FRAME_COUNT {
        clock.advance_millis(FRAME_MILLIS);

        match frame_index {
            60 => near.pause(),
            80 => near.unpause(),
            90 => weather.set_scroll_rate(0, 15),
            _ => {}
        }

        frame.fill(0);
        let mut tee = Tee {
            first: &mut pretty,
            second: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        let mut layers = [&mut far, &mut weather, &mut near];
        layers.sort_by_key(|bg| bg.layer());
        for bg in layers {
            bg.draw_offset_traced(&mut frame, Vec2::ZERO, &mut tracer);
        }
    }

    tracing::info!(
        far = far.redraw_count(),
        near = near.redraw_count(),
        weather = weather.redraw_count(),
        "redraws"
    );

    // -- export ------------------------------------------------------------
    let trace_path = "trace.json";
    let mut writer = BufWriter::new(File::create(trace_path)?);
    backdrop_debug::chrome::export(recorder.as_bytes(), &mut writer)?;
    let frame_path = "parallax.png";
    frame.save(frame_path)?;

    println!("Wrote {trace_path} and {frame_path} ({FRAME_COUNT} frames)");
    Ok(())
}

fn load_sprite(
    reader: &AssetReader,
    path: &str,
    position: Point,
) -> Result<SharedDrawable, Box<dyn Error>> {
    let pixels = image::load_from_memory(&reader.read_file(path)?)?.to_rgba8();
    let sprite: SharedDrawable = shared(Sprite::from_image(position, pixels));
    Ok(sprite)
}

/// Renders the demo's layer art to PNG bytes and serves it as embedded data.
fn generated_layers() -> Result<EmbeddedAssets, Box<dyn Error>> {
    let sky = RgbaImage::from_fn(WIDTH, HEIGHT, |_, y| {
        let shade = u8::try_from(120 + y).unwrap_or(u8::MAX);
        Rgba([40, 60, shade, 255])
    });
    let hills = RgbaImage::from_fn(WIDTH, 40, |x, y| {
        let crest = 20 + (x * 7 % 23);
        if y >= 40 - crest.min(40) {
            Rgba([30, 110, 40, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let clouds = RgbaImage::from_pixel(24, 8, Rgba([240, 240, 250, 200]));

    let mut files = HashMap::new();
    for (name, img) in [("sky.png", sky), ("hills.png", hills), ("clouds.png", clouds)] {
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)?;
        files.insert(PathBuf::from("layers").join(name), bytes.into_inner());
    }
    Ok(EmbeddedAssets::from_map(files))
}
