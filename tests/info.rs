use std::fs;

use ansi_sauce::{
    AspectRatio, FileType, LetterSpacing, SauceDataType, SauceDate, SauceInfo, SauceTrailer,
    encode,
};
use pretty_assertions::assert_eq;

const MEMBERS_JSON: &str = r#"{
    "Title": "fire #40 members",
    "Author": "nail",
    "Group": "fire",
    "Date": 20240707,
    "Filesize": 92,
    "Datatype": 1,
    "Filetype": 1,
    "Tinfo1": 80,
    "Tinfo2": 149,
    "Tinfo3": 0,
    "Tinfo4": 0,
    "Tflags": 20,
    "Tinfos": "IBM VGA",
    "Comments": "",
    "ansiflags": { "blink": 0, "ls": 2, "ar": 2 }
}"#;

#[test]
fn test_ansi_fixture() {
    let data = fs::read("tests/files/members.ans").unwrap();
    let info = SauceInfo::from_bytes(&data).unwrap();

    assert_eq!(info.title(), "fire #40 members");
    assert_eq!(info.author(), "nail");
    assert_eq!(info.group(), "fire");
    assert_eq!(info.comments(), "");
    assert_eq!(info.filesize(), 92);
    assert_eq!(info.date(), Some(SauceDate::new(2024, 7, 7)));
    assert_eq!(info.datatype(), Some(SauceDataType::Character));
    assert_eq!(info.filetype(), Some(FileType::Ansi));
    assert_eq!(info.character_width(), Some(80));
    assert_eq!(info.number_of_lines(), Some(149));
    assert_eq!(info.pixel_width(), None);
    assert_eq!(info.pixel_height(), None);
    assert_eq!(info.sample_rate(), None);
    assert_eq!(info.font_name(), "IBM VGA");
    assert_eq!(info.ice_colors(), Some(false));
    assert_eq!(info.letter_spacing(), Some(LetterSpacing::NinePixel));
    assert_eq!(info.aspect_ratio(), Some(AspectRatio::Square));
}

#[test]
fn test_remote_record_matches_local() {
    let data = fs::read("tests/files/members.ans").unwrap();
    let local = SauceInfo::from_bytes(&data).unwrap();
    let remote = SauceInfo::from_json(MEMBERS_JSON).unwrap();
    assert_eq!(remote, local);
}

#[test]
fn test_remote_flags_fall_back_to_tflags() {
    let remote = SauceInfo::from_json(r#"{"Datatype": 1, "Filetype": 1, "Tflags": 1}"#).unwrap();
    assert_eq!(remote.ice_colors(), Some(true));
    assert_eq!(remote.letter_spacing(), Some(LetterSpacing::Legacy));

    let remote = SauceInfo::from_json(r#"{"ansiflags": {"blink": true}}"#).unwrap();
    assert_eq!(remote.ice_colors(), Some(true));
    assert_eq!(remote.letter_spacing(), None);
}

#[test]
fn test_remote_record_with_missing_fields() {
    let remote = SauceInfo::from_json(r#"{"Title": "untitled", "Date": "19970401"}"#).unwrap();
    assert_eq!(remote.title(), "untitled");
    assert_eq!(remote.author(), "");
    assert_eq!(remote.date(), Some(SauceDate::new(1997, 4, 1)));
    assert_eq!(remote.datatype(), None);
    assert_eq!(remote.filetype(), None);
    assert_eq!(remote.character_width(), None);
    assert_eq!(remote.ice_colors(), None);
    assert_eq!(remote.font_name(), "");
}

#[test]
fn test_remote_numbers_out_of_range() {
    let remote = SauceInfo::from_json(
        r#"{"Title": "big", "Filesize": 5000000000, "Datatype": 1, "Filetype": 1, "Tinfo1": 80, "Tinfo2": 99999}"#,
    )
    .unwrap();
    assert_eq!(remote.title(), "big");
    assert_eq!(remote.filesize(), 0);
    assert_eq!(remote.character_width(), Some(80));
    assert_eq!(remote.number_of_lines(), None);
}

#[test]
fn test_xbin_fixture() {
    let data = fs::read("tests/files/clouds.xb").unwrap();
    let info = SauceInfo::from_bytes(&data).unwrap();

    assert_eq!(info.filetype(), Some(FileType::XBin));
    assert_eq!(info.character_width(), Some(80));
    assert_eq!(info.number_of_lines(), Some(25));
    assert_eq!(info.comments(), "blah\nblah\nblah");
    assert_eq!(info.date(), Some(SauceDate::new(2026, 1, 18)));
}

#[test]
fn test_bitmap_dimensions() {
    let sauce = SauceTrailer {
        data_type: SauceDataType::Bitmap,
        file_type: 10, // PNG
        tinfo1: 640,
        tinfo2: 350,
        tinfo3: 4,
        font_name: "ignored".to_string(),
        ..Default::default()
    };
    let info = SauceInfo::from_bytes(&encode(b"\x89PNG", &sauce)).unwrap();

    assert_eq!(info.filetype(), Some(FileType::Png));
    assert_eq!(info.pixel_width(), Some(640));
    assert_eq!(info.pixel_height(), Some(350));
    assert_eq!(info.pixel_depth(), Some(4));
    assert_eq!(info.character_width(), None);
    assert_eq!(info.font_name(), "");
}

#[test]
fn test_rip_script_uses_pixels() {
    let sauce = SauceTrailer {
        data_type: SauceDataType::Character,
        file_type: 3,
        tinfo1: 640,
        tinfo2: 350,
        tinfo3: 16,
        ..Default::default()
    };
    let info = SauceInfo::from(&sauce);
    assert_eq!(info.filetype(), Some(FileType::RipScript));
    assert_eq!(info.pixel_width(), Some(640));
    assert_eq!(info.pixel_height(), Some(350));
    assert_eq!(info.pixel_depth(), None);
    assert_eq!(info.character_width(), None);
}

#[test]
fn test_audio_sample_rate() {
    let sauce = SauceTrailer {
        data_type: SauceDataType::Audio,
        file_type: 16, // SMP8
        tinfo1: 22050,
        ..Default::default()
    };
    let info = SauceInfo::from(&sauce);
    assert_eq!(info.filetype(), Some(FileType::Smp8));
    assert_eq!(info.sample_rate(), Some(22050));

    let info = SauceInfo::from(&SauceTrailer {
        file_type: 0, // MOD
        ..sauce
    });
    assert_eq!(info.filetype(), Some(FileType::Mod));
    assert_eq!(info.sample_rate(), None);
}

#[test]
fn test_unknown_types_resolve_to_none() {
    let info = SauceInfo::from(&SauceTrailer {
        data_type: SauceDataType::Character,
        file_type: 200,
        tinfo1: 80,
        ..Default::default()
    });
    assert_eq!(info.filetype(), None);
    assert_eq!(info.character_width(), None);

    let info = SauceInfo::from(&SauceTrailer {
        data_type: SauceDataType::Undefined(42),
        ..Default::default()
    });
    assert_eq!(info.datatype(), Some(SauceDataType::Undefined(42)));
    assert_eq!(info.filetype(), None);
}

#[test]
fn test_info_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SauceInfo>();
    assert_send_sync::<SauceTrailer>();
}
