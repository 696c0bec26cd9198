//! End-to-end decoding of synthetic FITS files.

use fits_parser::{read_primary_image, Bitpix, FitsError, FitsFileSource};
use sky_common::{ImageSource, Projection, ViewerError};
use test_utils::{
    assert_all_approx_eq, assert_approx_eq, create_test_grid, fits_card, CardValue, FitsBuilder,
    CARD_SIZE,
};

#[test]
fn test_decode_every_bitpix() {
    let values = vec![0.0, 3.0, 8.0, 15.0];
    for bitpix in [8, 16, 32, 64, -32, -64] {
        let bytes = FitsBuilder::new(2, 2, values.clone()).bitpix(bitpix).to_bytes();
        let image = read_primary_image(&bytes).unwrap();
        assert_eq!(image.bitpix, Bitpix::from_value(bitpix as i64).unwrap());
        assert_eq!(image.shape.rows, 2);
        assert_eq!(image.shape.cols, 2);
        assert_eq!(image.data, values, "BITPIX {}", bitpix);
    }
}

#[test]
fn test_row_order_matches_file() {
    let data = create_test_grid(5, 3);
    let bytes = FitsBuilder::new(5, 3, data.clone()).bitpix(32).to_bytes();
    let image = read_primary_image(&bytes).unwrap();
    assert_eq!(image.data, data);
}

#[test]
fn test_bscale_bzero_applied() {
    let bytes = FitsBuilder::new(3, 1, vec![-1.0, 0.0, 1.0])
        .bitpix(16)
        .bscale(0.5)
        .bzero(100.0)
        .to_bytes();
    let image = read_primary_image(&bytes).unwrap();
    assert_all_approx_eq!(&image.data, &[99.5, 100.0, 100.5], 1e-12);
}

#[test]
fn test_blank_pixels_become_nan() {
    let bytes = FitsBuilder::new(2, 2, vec![1.0, f64::NAN, 3.0, 4.0])
        .bitpix(16)
        .blank(-32768)
        .to_bytes();
    let image = read_primary_image(&bytes).unwrap();
    assert!(image.data[1].is_nan());
    assert_eq!(image.data[3], 4.0);
}

#[test]
fn test_degenerate_third_axis_squeezed() {
    let bytes = FitsBuilder::new(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .axes(&[2, 2, 1])
        .to_bytes();
    let image = read_primary_image(&bytes).unwrap();
    assert_eq!((image.shape.rows, image.shape.cols), (2, 2));
}

#[test]
fn test_cube_is_not_an_image() {
    let bytes = FitsBuilder::new(2, 2, vec![0.0; 8]).axes(&[2, 2, 2]).to_bytes();
    let err = read_primary_image(&bytes).unwrap_err();
    assert!(matches!(err, FitsError::NotAnImage(_)));
    assert!(matches!(ViewerError::from(err), ViewerError::InvalidImage(_)));
}

#[test]
fn test_header_only_is_not_an_image() {
    let bytes = FitsBuilder::header_only().to_bytes();
    assert!(matches!(
        read_primary_image(&bytes),
        Err(FitsError::NotAnImage(_))
    ));
}

#[test]
fn test_overflowing_axes_rejected() {
    // 2^33 x 2^33 samples do not fit in usize
    let bytes = FitsBuilder::new(1, 1, vec![0.0])
        .axes(&[1 << 33, 1 << 33])
        .to_bytes();
    assert!(matches!(
        read_primary_image(&bytes),
        Err(FitsError::NotAnImage(_))
    ));
    assert!(matches!(
        fits_parser::decode_loaded_image(bytes.into(), "huge.fits"),
        Err(ViewerError::InvalidImage(_))
    ));
}

#[test]
fn test_large_axes_without_data_are_truncated() {
    let bytes = FitsBuilder::new(1, 1, vec![0.0])
        .axes(&[1 << 20, 1 << 20])
        .to_bytes();
    assert!(matches!(
        read_primary_image(&bytes),
        Err(FitsError::Truncated { .. })
    ));
}

#[test]
fn test_naxis_above_standard_limit() {
    let mut bytes = FitsBuilder::new(2, 2, vec![0.0; 4]).to_bytes();
    // NAXIS is the third card
    let card = fits_card("NAXIS", &CardValue::Integer(1_000_000_000_000));
    bytes[2 * CARD_SIZE..3 * CARD_SIZE].copy_from_slice(card.as_bytes());

    assert!(matches!(
        read_primary_image(&bytes),
        Err(FitsError::InvalidHeader(ref m)) if m.contains("NAXIS")
    ));
}

#[test]
fn test_truncated_data() {
    let bytes = FitsBuilder::new(40, 40, vec![1.0; 1600])
        .truncate(6000)
        .to_bytes();
    assert!(matches!(
        read_primary_image(&bytes),
        Err(FitsError::Truncated { .. })
    ));
}

#[test]
fn test_wcs_and_metadata() {
    let bytes = FitsBuilder::new(101, 101, vec![1.0; 101 * 101])
        .tan_wcs(83.8221, -5.3911, 0.0005)
        .text("OBJECT", "M42")
        .text("TELESCOP", "UKST")
        .text("DATE-OBS", "1998-03-12T10:00:00")
        .text("BUNIT", "counts")
        .to_bytes();
    let image = read_primary_image(&bytes).unwrap();
    let loaded = image.into_loaded("m42.fits").unwrap();

    assert_eq!(loaded.mapping.projection(), Projection::Tan);
    assert!(loaded.mapping.is_equatorial());
    let (ra, dec) = loaded.mapping.pixel_to_world(50.0, 50.0).unwrap();
    assert_approx_eq!(ra, 83.8221, 1e-9);
    assert_approx_eq!(dec, -5.3911, 1e-9);

    assert_eq!(loaded.metadata.source, "m42.fits");
    assert_eq!(loaded.metadata.title(), "M42 (UKST)");
    assert_eq!(loaded.metadata.unit.as_deref(), Some("counts"));
    assert!(loaded.metadata.observed_at.is_some());
}

#[test]
fn test_file_source_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.fits");
    FitsBuilder::new(4, 3, vec![2.0; 12])
        .bitpix(-32)
        .write_to(&path)
        .unwrap();

    let image = FitsFileSource::new().open(&path).unwrap();
    assert_eq!(image.samples.rows(), 3);
    assert_eq!(image.samples.cols(), 4);
    assert!(!image.mapping.is_celestial());
}

#[test]
fn test_file_source_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    FitsBuilder::new(1, 1, vec![0.0]).write_to(&path).unwrap();

    let err = FitsFileSource::new().open(&path).unwrap_err();
    assert!(matches!(err, ViewerError::UnsupportedFile(_)));
}

#[test]
fn test_file_source_missing_file() {
    let err = FitsFileSource::new()
        .open(std::path::Path::new("/nonexistent/none.fits"))
        .unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)));
}

#[test]
fn test_real_survey_file() {
    let path = test_utils::require_test_file!("horse.fits");
    let image = FitsFileSource::new().open(&path).unwrap();
    assert!(image.samples.validate().is_ok());
}
