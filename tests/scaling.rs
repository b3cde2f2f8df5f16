//! End-to-end integration tests driving the public `Scaler` API.

use oil_resample::{Colorspace, PpmReader, PpmWriter, RowSink, RowSource, Scaler};
use std::io::Cursor;

fn drive_rows(mut scaler: Scaler, input: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut iter = input.iter();
    let mut out = Vec::new();
    while !scaler.is_done() {
        while scaler.slots_needed() > 0 {
            scaler.push_row(iter.next().expect("ran out of input rows"));
        }
        let mut row = vec![0u8; scaler.out_width() * scaler.colorspace().channels()];
        scaler.emit(&mut row);
        out.push(row);
    }
    out
}

#[test]
fn opaque_rgba_matches_rgb_within_one_srgb_step() {
    let w = 6;
    let h = 6;
    let rgb: Vec<Vec<u8>> = (0..h)
        .map(|y| {
            (0..w)
                .flat_map(|x| {
                    let r = ((x * 40 + y * 11) % 256) as u8;
                    let g = ((x * 17 + y * 53) % 256) as u8;
                    let b = ((x * 93 + y * 7) % 256) as u8;
                    [r, g, b]
                })
                .collect()
        })
        .collect();
    let rgba: Vec<Vec<u8>> = rgb
        .iter()
        .map(|row| row.chunks(3).flat_map(|px| [px[0], px[1], px[2], 255]).collect())
        .collect();

    let wout = 4;
    let hout = 3;
    let rgb_scaler = Scaler::new(h, hout, w, wout, Colorspace::Rgb).unwrap();
    let rgba_scaler = Scaler::new(h, hout, w, wout, Colorspace::Rgba).unwrap();

    let rgb_out = drive_rows(rgb_scaler, &rgb);
    let rgba_out = drive_rows(rgba_scaler, &rgba);

    for (rgb_row, rgba_row) in rgb_out.iter().zip(rgba_out.iter()) {
        for (px_rgb, px_rgba) in rgb_row.chunks(3).zip(rgba_row.chunks(4)) {
            assert_eq!(px_rgba[3], 255);
            for c in 0..3 {
                let diff = (px_rgb[c] as i16 - px_rgba[c] as i16).abs();
                assert!(diff <= 1, "channel {c}: {} vs {}", px_rgb[c], px_rgba[c]);
            }
        }
    }
}

#[test]
fn fully_transparent_rgba_has_zero_alpha_everywhere() {
    let w = 5;
    let h = 5;
    let rgba: Vec<Vec<u8>> = (0..h)
        .map(|_| (0..w).flat_map(|_| [200u8, 100, 50, 0]).collect())
        .collect();

    let scaler = Scaler::new(h, 3, w, 3, Colorspace::Rgba).unwrap();
    let out = drive_rows(scaler, &rgba);
    for row in out {
        for px in row.chunks(4) {
            assert_eq!(px[3], 0);
        }
    }
}

#[test]
fn grayscale_with_alpha_unpremultiplies_correctly() {
    let w = 4;
    let h = 4;
    let ga: Vec<Vec<u8>> = (0..h).map(|_| (0..w).flat_map(|_| [180u8, 128]).collect()).collect();
    let scaler = Scaler::new(h, 2, w, 2, Colorspace::Ga).unwrap();
    let out = drive_rows(scaler, &ga);
    for row in out {
        for px in row.chunks(2) {
            assert!((px[0] as i16 - 180).abs() <= 2);
            assert!((px[1] as i16 - 128).abs() <= 2);
        }
    }
}

#[test]
fn cmyk_channels_stay_in_range_and_unmodified_for_identity_scale() {
    let w = 3;
    let h = 3;
    let cmyk: Vec<Vec<u8>> = (0..h)
        .map(|y| (0..w).flat_map(|x| [(x * 10) as u8, (y * 10) as u8, 5u8, 250u8]).collect())
        .collect();

    let scaler = Scaler::new(h, h, w, w, Colorspace::Cmyk).unwrap();
    let out = drive_rows(scaler, &cmyk);
    for (row_in, row_out) in cmyk.iter().zip(out.iter()) {
        for (a, b) in row_in.iter().zip(row_out.iter()) {
            assert!((*a as i16 - *b as i16).abs() <= 1);
        }
    }
}

#[test]
fn ppm_round_trip_through_row_source_and_sink() {
    let w = 3;
    let h = 2;
    let pixels: Vec<u8> = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30, 40, 50, 60, 70, 80, 90];

    let mut ppm_bytes = Vec::new();
    {
        let mut writer = PpmWriter::new(&mut ppm_bytes, w, h).unwrap();
        writer.write_row(&pixels[0..9]).unwrap();
        writer.write_row(&pixels[9..18]).unwrap();
    }

    let mut reader = PpmReader::new(Cursor::new(ppm_bytes)).unwrap();
    let (rw, rh, cs) = reader.header();
    assert_eq!((rw, rh), (w, h));
    assert_eq!(cs, Colorspace::Rgb);

    let wout = 2;
    let hout = 1;
    let mut scaler = Scaler::new(h, hout, w, wout, cs).unwrap();
    let mut out_bytes = Vec::new();
    {
        let mut sink = PpmWriter::new(&mut out_bytes, wout, hout).unwrap();
        let mut in_row = vec![0u8; w * 3];
        let mut out_row = vec![0u8; wout * 3];
        while !scaler.is_done() {
            while scaler.slots_needed() > 0 {
                reader.read_row(&mut in_row).unwrap();
                scaler.push_row(&in_row);
            }
            scaler.emit(&mut out_row);
            sink.write_row(&out_row).unwrap();
        }
    }
    assert!(out_bytes.starts_with(b"P6\n2 1\n255\n"));
    assert_eq!(out_bytes.len(), "P6\n2 1\n255\n".len() + wout * hout * 3);
}

#[test]
fn single_input_column_upscales_to_a_constant_row() {
    let h = 4;
    let input: Vec<Vec<u8>> = (0..h).map(|_| vec![90u8]).collect();
    let scaler = Scaler::new(h, h, 1, 9, Colorspace::G).unwrap();
    let out = drive_rows(scaler, &input);
    for row in out {
        for &v in &row {
            assert!((v as i16 - 90).abs() <= 1, "expected ~90, got {v}");
        }
    }
}

#[test]
fn single_input_row_upscales_to_a_constant_column() {
    let w = 4;
    let input: Vec<Vec<u8>> = vec![vec![42u8; w]];
    let scaler = Scaler::new(1, 9, w, w, Colorspace::G).unwrap();
    let out = drive_rows(scaler, &input);
    assert_eq!(out.len(), 9);
    for row in out {
        for &v in &row {
            assert!((v as i16 - 42).abs() <= 1, "expected ~42, got {v}");
        }
    }
}

#[test]
fn fix_ratio_reduces_exactly_one_dimension() {
    let mut w = 800;
    let mut h = 800;
    oil_resample::fix_ratio(1920, 1080, &mut w, &mut h).unwrap();
    assert_eq!(w, 800);
    assert!(h < 800);
}
