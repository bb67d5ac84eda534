use pretty_assertions::assert_eq;
use solidcolor::*;

fn headless() -> Result<(u32, u32), SolidColorError> {
    Err(SolidColorError::DetectionFailed("no display".into()))
}

#[test]
fn png_opaque_is_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orange.png");

    let written = generate(
        Color::from_hex("#FF5733").unwrap(),
        Resolution::new(4, 3).unwrap(),
        &path,
    )
    .unwrap();
    assert_eq!(written.format.format, ImageFormat::Png);
    assert_eq!(written.layout, PixelLayout::Rgb8);

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (4, 3));
    assert_eq!(img.color(), image::ColorType::Rgb8);
    let rgb = img.to_rgb8();
    assert!(rgb.pixels().all(|p| p.0 == [255, 87, 51]));
}

#[test]
fn png_ff5733_4x4() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    generate(
        Color::from_hex("#FF5733").unwrap(),
        Resolution::new(4, 4).unwrap(),
        &path,
    )
    .unwrap();

    let rgba = image::open(&path).unwrap().to_rgba8();
    assert_eq!(rgba.dimensions(), (4, 4));
    assert!(rgba.pixels().all(|p| p.0 == [255, 87, 51, 255]));
}

#[test]
fn bmp_0000ff40_decodes_as_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.bmp");

    generate(
        Color::from_hex("#0000FF40").unwrap(),
        Resolution::new(4, 4).unwrap(),
        &path,
    )
    .unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgba8);
    assert_eq!((img.width(), img.height()), (4, 4));
    assert!(img.to_rgba8().pixels().all(|p| p.0 == [0, 0, 255, 64]));
}

#[test]
fn jpeg_00ff00_quality_150() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.jpg");

    let written = GenerateRequest::new(Color::from_hex("#00FF00").unwrap(), &path)
        .with_resolution(Resolution::new(4, 4).unwrap())
        .with_quality(150)
        .generate()
        .unwrap();
    assert_eq!(written.layout.channels(), 3);

    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert_eq!((img.width(), img.height()), (4, 4));
}

#[test]
fn png_translucent_keeps_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlay.png");

    generate(
        Color::from_hex("#FF573380").unwrap(),
        Resolution::new(5, 2).unwrap(),
        &path,
    )
    .unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgba8);
    let rgba = img.to_rgba8();
    assert_eq!(rgba.pixels().count(), 10);
    assert!(rgba.pixels().all(|p| p.0 == [255, 87, 51, 128]));
}

#[test]
fn fully_transparent_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clear.png");

    generate(
        Color::from_hex("FFFFFF00").unwrap(),
        Resolution::new(2, 2).unwrap(),
        &path,
    )
    .unwrap();

    let rgba = image::open(&path).unwrap().to_rgba8();
    assert!(rgba.pixels().all(|p| p.0 == [255, 255, 255, 0]));
}

#[test]
fn bmp_translucent_is_32bit_bgra() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blue.bmp");

    let written = generate(
        Color::from_hex("#0000FF40").unwrap(),
        Resolution::new(3, 2).unwrap(),
        &path,
    )
    .unwrap();
    assert_eq!(written.layout, PixelLayout::Rgba8);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    let offset = u32::from_le_bytes(bytes[10..14].try_into().unwrap()) as usize;
    assert_eq!(offset, 122);
    let bpp = u16::from_le_bytes(bytes[28..30].try_into().unwrap());
    assert_eq!(bpp, 32);
    let data = &bytes[offset..];
    assert_eq!(data.len(), 3 * 2 * 4);
    assert!(data.chunks_exact(4).all(|px| px == [255, 0, 0, 64]));
}

#[test]
fn bmp_opaque_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("green.bmp");

    generate(
        Color::from_hex("#00FF00").unwrap(),
        Resolution::new(5, 3).unwrap(),
        &path,
    )
    .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // 5 px * 3 bytes = 15, padded to 16 per row
    assert_eq!(bytes.len(), 54 + 16 * 3);

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (5, 3));
    assert!(img.to_rgb8().pixels().all(|p| p.0 == [0, 255, 0]));
}

#[test]
fn jpeg_quality_is_clamped_and_alpha_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpg");

    let written = GenerateRequest::new(Color::from_hex("#3498DB80").unwrap(), &path)
        .with_resolution(Resolution::new(16, 16).unwrap())
        .with_quality(150)
        .generate()
        .unwrap();
    assert_eq!(written.format.format, ImageFormat::Jpeg);
    assert_eq!(written.layout, PixelLayout::Rgb8);

    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert_eq!((img.width(), img.height()), (16, 16));
    // Lossy, but a flat block at max quality stays close.
    let px = img.to_rgb8().get_pixel(8, 8).0;
    for (got, want) in px.iter().zip([0x34u8, 0x98, 0xDB]) {
        assert!(got.abs_diff(want) <= 4, "{px:?}");
    }
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.dat");

    let written = GenerateRequest::new(Color::new(10, 20, 30), &path)
        .with_resolution(Resolution::new(2, 2).unwrap())
        .with_format("bmp")
        .generate()
        .unwrap();
    assert_eq!(written.format.format, ImageFormat::Bmp);
    assert_eq!(&std::fs::read(&path).unwrap()[..2], b"BM");
}

#[test]
fn missing_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noext");

    let err = generate(Color::default(), Resolution::HD, &path).unwrap_err();
    assert!(matches!(err, SolidColorError::MissingFormat(_)), "{err}");
    assert!(!path.exists());
}

#[test]
fn unrecognized_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.gif");

    let err = generate(Color::default(), Resolution::HD, &path).unwrap_err();
    assert!(matches!(err, SolidColorError::UnrecognizedFormat(_)), "{err}");
    assert!(!path.exists());
}

#[test]
fn unwritable_path_reports_encode_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.png");

    let err = generate(Color::default(), Resolution::new(1, 1).unwrap(), &path).unwrap_err();
    match err {
        SolidColorError::EncodeFailed { path: p, format, .. } => {
            assert_eq!(p, path);
            assert_eq!(format, "PNG");
        }
        other => panic!("expected EncodeFailed, got {other:?}"),
    }
}

#[test]
fn detection_failure_falls_back_to_full_hd() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fallback.bmp");
    let screen = headless;

    let written = GenerateRequest::new(Color::new(0, 0, 0), &path)
        .with_screen(&screen)
        .generate()
        .unwrap();
    assert_eq!(written.resolution, Resolution::FULL_HD);

    let bytes = std::fs::read(&path).unwrap();
    let width = i32::from_le_bytes(bytes[18..22].try_into().unwrap());
    let height = i32::from_le_bytes(bytes[22..26].try_into().unwrap());
    assert_eq!((width, height), (1920, 1080));
}

#[test]
fn detected_resolution_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screen.png");
    let screen = || -> Result<(u32, u32), SolidColorError> { Ok((7, 5)) };

    let written = GenerateRequest::new(Color::new(1, 1, 1), &path)
        .with_screen(&screen)
        .generate()
        .unwrap();
    assert_eq!(written.resolution, Resolution::new(7, 5).unwrap());
    assert_eq!(image::image_dimensions(&path).unwrap(), (7, 5));
}

#[test]
fn limits_reject_large_requests() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.png");
    let limits = Limits {
        max_width: Some(1000),
        ..Default::default()
    };

    let err = GenerateRequest::new(Color::default(), &path)
        .with_resolution(Resolution::FULL_HD)
        .with_limits(&limits)
        .generate()
        .unwrap_err();
    assert!(matches!(err, SolidColorError::LimitExceeded(_)), "{err}");
}

#[test]
fn oversized_bmp_is_rejected_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.bmp");

    let err = generate(
        Color::new(0, 0, 0),
        Resolution::new(65535, 65535).unwrap(),
        &path,
    )
    .unwrap_err();
    assert!(matches!(err, SolidColorError::DimensionsTooLarge { .. }), "{err}");
    assert!(!path.exists());
}
