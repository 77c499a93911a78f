//! Plain text PPM (`P3`) output.
//!
//! The header is `P3\n<width> <height>\n255\n`, followed by one `r g b` line
//! per pixel in raster order. Channels are quantized with [`to_byte`] and are
//! not clamped here.

use crate::math::*;
use crate::renderer::Vec2D;
use crate::tonemap::Tonemapper;

use anyhow::{bail, Context};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const MAGIC: &str = "P3";
pub const MAX_VALUE: i32 = 255;

pub fn write_header<W: Write>(out: &mut W, width: usize, height: usize) -> std::io::Result<()> {
    write!(out, "{}\n{} {}\n{}\n", MAGIC, width, height, MAX_VALUE)
}

pub fn write_color<W: Write>(out: &mut W, pixel_color: RGBColor) -> std::io::Result<()> {
    let [r, g, b] = to_bytes(pixel_color);
    writeln!(out, "{} {} {}", r, g, b)
}

pub fn write_film<W: Write>(
    out: &mut W,
    film: &Vec2D<RGBColor>,
    tonemapper: &dyn Tonemapper,
) -> std::io::Result<()> {
    write_header(out, film.width, film.height)?;
    for row in film.rows() {
        for &color in row {
            write_color(out, tonemapper.map(color))?;
        }
    }
    Ok(())
}

pub fn write_film_to_file(
    path: &Path,
    film: &Vec2D<RGBColor>,
    tonemapper: &dyn Tonemapper,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_film(&mut out, film, tonemapper)
        .and_then(|_| out.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "wrote {}x{} image to {}",
        film.width,
        film.height,
        path.display()
    );
    Ok(())
}

/// A decoded `P3` image. pixel values are kept as written.
#[derive(Clone, Debug, PartialEq)]
pub struct PpmImage {
    pub width: usize,
    pub height: usize,
    pub max_value: i32,
    pub pixels: Vec<[i32; 3]>,
}

pub fn read_ppm<R: Read>(input: R) -> anyhow::Result<PpmImage> {
    let mut tokens = Vec::new();
    for line in BufReader::new(input).lines() {
        let line = line.context("failed to read ppm data")?;
        // comments run to the end of the line
        let content = line.split('#').next().unwrap_or("");
        tokens.extend(content.split_whitespace().map(str::to_owned));
    }
    // everything after the four header tokens is pixel data
    let available = tokens.len().saturating_sub(4);
    let mut tokens = tokens.into_iter();

    match tokens.next() {
        Some(magic) if magic == MAGIC => {}
        Some(other) => bail!("expected magic {}, found {}", MAGIC, other),
        None => bail!("empty ppm data"),
    }

    let mut next_number = |what: &str| -> anyhow::Result<i64> {
        let token = tokens
            .next()
            .with_context(|| format!("missing {}", what))?;
        token
            .parse::<i64>()
            .with_context(|| format!("invalid {}: {:?}", what, token))
    };

    let width = next_number("width")?;
    let height = next_number("height")?;
    let max_value = next_number("max value")?;
    if width < 1 || height < 1 {
        bail!("invalid dimensions {}x{}", width, height);
    }
    let (width, height) = (width as usize, height as usize);
    let pixel_count = match width.checked_mul(height) {
        Some(count) if count.checked_mul(3).is_some_and(|n| n <= available) => count,
        _ => bail!(
            "dimensions {}x{} need more channels than the {} present",
            width,
            height,
            available
        ),
    };

    let mut pixels = Vec::with_capacity(pixel_count);
    for _ in 0..pixel_count {
        let r = next_number("red channel")?;
        let g = next_number("green channel")?;
        let b = next_number("blue channel")?;
        pixels.push([r as i32, g as i32, b as i32]);
    }
    if tokens.next().is_some() {
        bail!("trailing data after {} pixels", pixel_count);
    }

    Ok(PpmImage {
        width,
        height,
        max_value: max_value as i32,
        pixels,
    })
}

/// Reads `path` back and checks it holds exactly `film` as the writer would
/// have encoded it.
pub fn verify_film_file(
    path: &Path,
    film: &Vec2D<RGBColor>,
    tonemapper: &dyn Tonemapper,
) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let image = read_ppm(file).with_context(|| format!("failed to decode {}", path.display()))?;
    if (image.width, image.height) != (film.width, film.height) {
        bail!(
            "{} is {}x{}, expected {}x{}",
            path.display(),
            image.width,
            image.height,
            film.width,
            film.height
        );
    }
    if image.max_value != MAX_VALUE {
        bail!("{} has max value {}", path.display(), image.max_value);
    }
    let expected = film.buffer.iter().map(|&c| to_bytes(tonemapper.map(c)));
    if let Some(index) = expected
        .zip(image.pixels.iter())
        .position(|(expected, found)| expected != *found)
    {
        bail!(
            "{} differs at pixel ({}, {})",
            path.display(),
            index % film.width,
            index / film.width
        );
    }
    info!("verified {}", path.display());
    Ok(())
}
