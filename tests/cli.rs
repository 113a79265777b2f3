#![cfg(feature = "cli")]

use clap::Parser;
use image::{Rgba, RgbaImage};
use texmip::cli::args::Cli;
use texmip::cli::command::build_mips::{build_mips, effective_prefs, load_options};
use texmip::config::prefs::MipPrefs;
use texmip::{ErrorKind, MipFilter, PixelFormat, TextureFlags};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("texmip").chain(args.iter().copied())).unwrap()
}

#[test]
fn parses_the_flag_set() {
    let cli = parse(&["-i", "a.png", "-i", "b.png", "-f", "ARGB4444", "-m", "--filter", "kaiser", "--mirrorv", "-o", "out"]);
    assert_eq!(cli.inputs.len(), 2);
    assert!(cli.mipmap);
    assert_eq!((cli.mirror_v, cli.mirror_h), (Some(true), None));
    assert_eq!(cli.filter, Some(MipFilter::Kaiser));

    let opts = load_options(&cli, &MipPrefs::default()).unwrap();
    assert_eq!(opts.texture_type.format, PixelFormat::ARGB4444);
    assert!(opts.mipmapped());
    assert_eq!(opts.filter, MipFilter::Kaiser);
}

#[test]
fn input_and_format_are_required() {
    assert!(Cli::try_parse_from(["texmip", "-f", "RGB565"]).is_err());
    assert!(Cli::try_parse_from(["texmip", "-i", "a.png"]).is_err());
}

#[test]
fn filter_falls_back_to_prefs_then_format() {
    let pal = parse(&["-i", "a.png", "-f", "PAL8BPP", "-m"]);
    assert_eq!(load_options(&pal, &MipPrefs::default()).unwrap().filter, MipFilter::Nearest);

    let prefs = MipPrefs { filter: Some(MipFilter::Kaiser), mirror_h: true, ..Default::default() };
    let opts = load_options(&pal, &prefs).unwrap();
    assert_eq!(opts.filter, MipFilter::Kaiser);
    assert!(opts.mirror_h);

    let rgb = parse(&["-i", "a.png", "-f", "RGB565", "-m"]);
    assert_eq!(load_options(&rgb, &MipPrefs::default()).unwrap().filter, MipFilter::Bilinear);
}

#[test]
fn mirror_flags_override_saved_prefs() {
    let prefs = MipPrefs { mirror_v: true, mirror_h: true, ..Default::default() };

    let plain = parse(&["-i", "a.png", "-f", "RGB565"]);
    let opts = load_options(&plain, &prefs).unwrap();
    assert!(opts.mirror_v && opts.mirror_h);

    let off = parse(&["-i", "a.png", "-f", "RGB565", "--mirrorv=false", "--mirrorh", "-o", "out"]);
    assert_eq!(off.mirror_v, Some(false));
    let opts = load_options(&off, &prefs).unwrap();
    assert!(!opts.mirror_v);
    assert!(opts.mirror_h);

    let saved = effective_prefs(&off, &prefs);
    assert!(!saved.mirror_v);
    assert_eq!(saved.out_dir, Some("out".into()));
}

#[test]
fn unknown_format_is_rejected() {
    let cli = parse(&["-i", "a.png", "-f", "RGBA8888"]);
    let err = load_options(&cli, &MipPrefs::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedFormat { name: "RGBA8888".into() });
}

#[test]
fn stride_with_mipmaps_is_rejected() {
    let cli = parse(&["-i", "a.png", "-f", "RGB565", "-s", "-m"]);
    let err = load_options(&cli, &MipPrefs::default()).unwrap_err();
    assert_eq!(err.key(), "error-texture-type");
}

#[test]
fn builds_and_writes_levels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("brick.png");
    RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 255]))
        .save(&input)
        .unwrap();
    let out = dir.path().join("levels");

    let input_arg = input.to_string_lossy().into_owned();
    let out_arg = out.to_string_lossy().into_owned();
    let cli = parse(&["-i", &input_arg, "-f", "RGB565", "-m", "-o", &out_arg]);
    let report = build_mips(&cli, &MipPrefs::default()).unwrap();

    assert_eq!((report.width, report.height), (32, 32));
    assert_eq!(report.written.len(), 6);
    assert!(out.join("brick_32x32.png").exists());
    assert!(out.join("brick_1x1.png").exists());
}

#[test]
fn stride_texture_records_its_stride_setting() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("screen.png");
    RgbaImage::from_pixel(640, 8, Rgba([0, 0, 0, 255]))
        .save(&input)
        .unwrap();

    let input_arg = input.to_string_lossy().into_owned();
    let cli = parse(&["-i", &input_arg, "-f", "RGB565", "-s"]);
    let report = build_mips(&cli, &MipPrefs::default()).unwrap();

    assert!(report.texture_type.flags.contains(TextureFlags::STRIDED | TextureFlags::NONTWIDDLED));
    assert_eq!(report.texture_type.stride_setting, 20);
    assert_eq!(report.written, vec![dir.path().join("screen_640x8.png")]);
}
