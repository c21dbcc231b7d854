//! End-to-end pipeline test writing artifacts into a temporary directory

use bizcard::config::{CardConfig, ContactOptions, OutputOptions, RenderOptions};
use bizcard::output::Artifacts;
use bizcard::{QrDecoder, QrEncoder, Theme, card, vcard};
use std::fs;
use std::path::Path;

fn test_config(dir: &Path) -> CardConfig {
    CardConfig {
        contact: ContactOptions {
            first_name: Some("Alex".to_string()),
            last_name: Some("Lewis".to_string()),
            email: Some("hello@alex-lewis.me".to_string()),
            website: Some("alex-lewis.me".to_string()),
            city: Some("London".to_string()),
            postcode: Some("W4".to_string()),
            country: Some("UK".to_string()),
            ..Default::default()
        },
        output: OutputOptions {
            dir: dir.to_path_buf(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn pipeline_writes_all_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp.path().join("data"));
    let params = config.resolve().unwrap();

    let artifacts = Artifacts::new(&config.output, &params.render);
    artifacts.create_dir().unwrap();

    let record = vcard::render(&params.contact);
    artifacts.save_vcard(&record).unwrap();

    let palette = params.render.theme.palette();
    let qr = QrEncoder::new().encode(&record, &palette).unwrap();
    artifacts.save_image(&qr, &artifacts.qr_path()).unwrap();

    let blank = card::blank(&params.render);
    artifacts.save_image(&blank, &artifacts.blank_path()).unwrap();

    let back = card::back(&params.render, &qr);
    artifacts.save_image(&back, &artifacts.back_path()).unwrap();

    for path in [
        artifacts.vcard_path(),
        artifacts.qr_path(),
        artifacts.blank_path(),
        artifacts.back_path(),
    ] {
        assert!(path.exists(), "missing artifact {}", path.display());
    }

    assert_eq!(fs::read_to_string(artifacts.vcard_path()).unwrap(), record);
    assert_eq!(
        record,
        "BEGIN:VCARD\nN:Lewis;Alex;\nORG:;\nURL:alex-lewis.me;\n\
         ADR:;London;;W4;UK;\nTEL:\nEMAIL:hello@alex-lewis.me\nEND:VCARD"
    );
}

#[test]
fn saved_qr_scans_back_to_the_record() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(tmp.path());
    let params = config.resolve().unwrap();
    assert_eq!(params.render.theme, Theme::Light);

    let artifacts = Artifacts::new(&config.output, &params.render);
    artifacts.create_dir().unwrap();

    let record = vcard::render(&params.contact);
    let qr = QrEncoder::new()
        .encode(&record, &params.render.theme.palette())
        .unwrap();
    artifacts.save_image(&qr, &artifacts.qr_path()).unwrap();

    let loaded = image::open(artifacts.qr_path()).unwrap().to_rgb8();
    let decoded = QrDecoder::new().decode(&loaded).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn back_face_keeps_canvas_dimensions() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = test_config(tmp.path());
    config.render = RenderOptions {
        theme: Some("bitcoin".to_string()),
        width: Some(400),
        height: Some(300),
        ..Default::default()
    };
    let params = config.resolve().unwrap();

    let record = vcard::render(&params.contact);
    let qr = QrEncoder::new()
        .encode(&record, &params.render.theme.palette())
        .unwrap();
    let back = card::back(&params.render, &qr);
    assert_eq!(back.dimensions(), (400, 300));
}
