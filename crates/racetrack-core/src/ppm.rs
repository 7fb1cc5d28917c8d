//! PPM image codec for tracks.
//!
//! Tracks are drawn as images, one pixel per cell. [`read_ppm`] decodes the
//! ASCII `P3` variant and [`write_ppm`] encodes the binary `P6` variant, both
//! through the `image` crate's PNM codec.
//!
//! ## Palette
//!
//! ```text
//! outside  (255, 255, 255)  white
//! road     (  0,   0,   0)  black
//! start    (255,   0,   0)  red
//! finish   (  0,   0, 255)  blue
//! trace    (  0, 255,   0)  green   (written only)
//! ```

use std::io::{self, Read, Write};

use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageDecoder, ImageEncoder, ImageError};
use thiserror::Error;

use crate::cell::CellKind;
use crate::geom::{Point, Range};
use crate::track::Track;

/// Only 8-bit channels are supported.
const MAX_VALUE: u32 = 255;

/// RGB colour per [`CellKind`], indexed by discriminant.
const PALETTE: [[u8; 3]; 5] = [
    [255, 255, 255],
    [0, 0, 0],
    [255, 0, 0],
    [0, 0, 255],
    [0, 255, 0],
];

/// Errors produced while decoding or encoding a PPM track.
#[derive(Debug, Error)]
pub enum PpmError {
    #[error("ppm: i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("ppm: {0}")]
    Image(#[from] ImageError),
    #[error("ppm: wrong id, P3 expected, but got {0:?}")]
    BadMagic(String),
    #[error("ppm: max value {0} unsupported, expected 255")]
    UnsupportedMaxValue(u32),
    #[error("ppm: {width}x{height} image is too large for a track")]
    TooLarge { width: u32, height: u32 },
    #[error("ppm: unexpected end of data while reading {0}")]
    Truncated(&'static str),
    #[error("ppm: unknown colour {rgb:?} at {pos}")]
    UnknownColor { pos: Point, rgb: [u8; 3] },
}

fn classify(rgb: [u8; 3]) -> Option<CellKind> {
    match rgb {
        [0, 0, 0] => Some(CellKind::Road),
        [255, 0, 0] => Some(CellKind::Start),
        [0, 0, 255] => Some(CellKind::Finish),
        [255, 255, 255] => Some(CellKind::Outside),
        _ => None,
    }
}

/// Decode a `P3` image into a [`Track`].
pub fn read_ppm<R: Read>(mut reader: R) -> Result<Track, PpmError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let (_, header) = PnmDecoder::new(bytes.as_slice())?.into_inner();
    let subtype = header.subtype();
    if subtype != PnmSubtype::Pixmap(SampleEncoding::Ascii) {
        let magic = String::from_utf8_lossy(subtype.magic_constant()).into_owned();
        return Err(PpmError::BadMagic(magic));
    }
    if header.maximal_sample() != MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue(header.maximal_sample()));
    }

    let decoder = PnmDecoder::new(bytes.as_slice())?;
    let (width, height) = decoder.dimensions();
    // Every ASCII sample takes at least one byte, so a header promising more
    // samples than the input holds is cut short.
    let needed = decoder.total_bytes();
    if needed > bytes.len() as u64 {
        return Err(PpmError::Truncated("pixel data"));
    }
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(PpmError::TooLarge { width, height });
    };

    let mut pixels = vec![0; needed as usize];
    decoder.read_image(&mut pixels)?;

    let bounds = Range::new(0, 0, w, h);
    let cells = bounds
        .iter()
        .zip(pixels.chunks_exact(3))
        .map(|(pos, px)| {
            let rgb = [px[0], px[1], px[2]];
            classify(rgb).ok_or(PpmError::UnknownColor { pos, rgb })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Track::from_cells(w, h, cells).ok_or(PpmError::Truncated("pixel data"))
}

/// Encode a [`Track`] as a binary `P6` image.
pub fn write_ppm<W: Write>(track: &Track, writer: W) -> Result<(), PpmError> {
    let mut body = Vec::with_capacity(track.cells().len() * 3);
    for &kind in track.cells() {
        body.extend_from_slice(&PALETTE[kind as usize]);
    }
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(
            &body,
            track.width() as u32,
            track.height() as u32,
            ExtendedColorType::Rgb8,
        )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "P3
# Created by hand
3 2
255
255 0 0   0 0 0   0 0 255
255 255 255   0 0 0   255 255 255
";

    #[test]
    fn decode_p3() {
        let t = read_ppm(SMALL.as_bytes()).unwrap();
        assert_eq!(t.width(), 3);
        assert_eq!(t.height(), 2);
        assert_eq!(t.to_ascii(), "S.F\n#.#");
    }

    #[test]
    fn decode_rejects_binary_magic() {
        let err = read_ppm("P6\n1 1\n255\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PpmError::BadMagic(ref m) if m == "P6"));
    }

    #[test]
    fn decode_rejects_16_bit() {
        let err = read_ppm("P3 1 1 65535 0 0 0".as_bytes()).unwrap_err();
        assert!(matches!(err, PpmError::UnsupportedMaxValue(65535)));
    }

    #[test]
    fn decode_rejects_unknown_colour() {
        let err = read_ppm("P3 2 1 255 0 0 0 10 20 30".as_bytes()).unwrap_err();
        match err {
            PpmError::UnknownColor { pos, rgb } => {
                assert_eq!(pos, Point::new(1, 0));
                assert_eq!(rgb, [10, 20, 30]);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn decode_reports_short_pixel_data() {
        let err = read_ppm("P3 2 1 255 0 0 0 0 0".as_bytes()).unwrap_err();
        assert!(matches!(err, PpmError::Image(_)), "{err}");
    }

    #[test]
    fn decode_reports_garbage_header() {
        let err = read_ppm("P3 two 1 255".as_bytes()).unwrap_err();
        assert!(matches!(err, PpmError::Image(_)), "{err}");
    }

    #[test]
    fn oversized_header_is_rejected_before_allocating() {
        // Claims about 4.6e18 pixels with three samples of data.
        let err = read_ppm("P3 2147483647 2147483647 255 0 0 0".as_bytes()).unwrap_err();
        assert!(
            matches!(err, PpmError::Truncated(_) | PpmError::Image(_)),
            "{err}"
        );
    }

    #[test]
    fn non_utf8_bytes_are_a_format_error() {
        let err = read_ppm(&b"\xffP3\n1 1\n255\n0 0 255\n"[..]).unwrap_err();
        assert!(matches!(err, PpmError::Image(_)), "{err}");
    }

    #[test]
    fn encode_p6() {
        let mut t = Track::from_ascii("S.\nF#").unwrap();
        t.set(Point::new(1, 0), CellKind::Trace);
        let mut out = Vec::new();
        write_ppm(&t, &mut out).unwrap();

        assert!(out.starts_with(b"P6"));
        let body = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        assert!(out.ends_with(&body));
        let header = String::from_utf8_lossy(&out[..out.len() - body.len()]);
        let fields: Vec<_> = header.split_ascii_whitespace().collect();
        assert_eq!(fields, ["P6", "2", "2", "255"]);
    }
}
