//! The SAUCE file type taxonomy.
//!
//! The FileType byte is an index whose meaning depends on the DataType: `1`
//! is ANSI for character data but PCX for bitmaps. [`FileType::resolve`]
//! turns the pair into one flat enum through a typed table per data type.

use crate::SauceDataType;

/// Every format the SAUCE standard names, across all data types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    None,

    // Character
    Ascii,
    Ansi,
    AnsiMation,
    RipScript,
    PcBoard,
    Avatar,
    Html,
    Source,
    TundraDraw,

    // Bitmap
    Gif,
    Pcx,
    LbmIff,
    Tga,
    Fli,
    Flc,
    Bmp,
    Gl,
    Dl,
    WpgBitmap,
    Png,
    Jpg,
    Mpg,
    Avi,

    // Vector
    Dxf,
    Dwg,
    WpgVector,
    ThreeDs,

    // Audio
    Mod,
    Composer669,
    Stm,
    S3m,
    Mtm,
    Far,
    Ult,
    Amf,
    Dmf,
    Okt,
    Rol,
    Cmf,
    Midi,
    Sadt,
    Voc,
    Wav,
    Smp8,
    Smp8s,
    Smp16,
    Smp16s,
    Patch8,
    Patch16,
    Xm,
    Hsc,
    It,

    BinaryText,
    XBin,

    // Archive
    Zip,
    Arj,
    Lzh,
    Arc,
    Tar,
    Zoo,
    Rar,
    Uc2,
    Pak,
    Sqz,

    Executable,
}

const CHARACTER: [FileType; 9] = [
    FileType::Ascii,
    FileType::Ansi,
    FileType::AnsiMation,
    FileType::RipScript,
    FileType::PcBoard,
    FileType::Avatar,
    FileType::Html,
    FileType::Source,
    FileType::TundraDraw,
];

const BITMAP: [FileType; 14] = [
    FileType::Gif,
    FileType::Pcx,
    FileType::LbmIff,
    FileType::Tga,
    FileType::Fli,
    FileType::Flc,
    FileType::Bmp,
    FileType::Gl,
    FileType::Dl,
    FileType::WpgBitmap,
    FileType::Png,
    FileType::Jpg,
    FileType::Mpg,
    FileType::Avi,
];

const VECTOR: [FileType; 4] = [
    FileType::Dxf,
    FileType::Dwg,
    FileType::WpgVector,
    FileType::ThreeDs,
];

const AUDIO: [FileType; 25] = [
    FileType::Mod,
    FileType::Composer669,
    FileType::Stm,
    FileType::S3m,
    FileType::Mtm,
    FileType::Far,
    FileType::Ult,
    FileType::Amf,
    FileType::Dmf,
    FileType::Okt,
    FileType::Rol,
    FileType::Cmf,
    FileType::Midi,
    FileType::Sadt,
    FileType::Voc,
    FileType::Wav,
    FileType::Smp8,
    FileType::Smp8s,
    FileType::Smp16,
    FileType::Smp16s,
    FileType::Patch8,
    FileType::Patch16,
    FileType::Xm,
    FileType::Hsc,
    FileType::It,
];

const ARCHIVE: [FileType; 10] = [
    FileType::Zip,
    FileType::Arj,
    FileType::Lzh,
    FileType::Arc,
    FileType::Tar,
    FileType::Zoo,
    FileType::Rar,
    FileType::Uc2,
    FileType::Pak,
    FileType::Sqz,
];

impl FileType {
    /// Resolves the raw FileType byte in the context of `data_type`.
    ///
    /// BinaryText, XBin and Executable ignore the byte (BinaryText keeps its
    /// width there). An index past the end of its table, or an unknown data
    /// type, is logged and yields `None`.
    ///
    /// ```
    /// use ansi_sauce::{FileType, SauceDataType};
    ///
    /// assert_eq!(FileType::resolve(SauceDataType::Character, 1), Some(FileType::Ansi));
    /// assert_eq!(FileType::resolve(SauceDataType::Bitmap, 1), Some(FileType::Pcx));
    /// assert_eq!(FileType::resolve(SauceDataType::BinaryText, 80), Some(FileType::BinaryText));
    /// assert_eq!(FileType::resolve(SauceDataType::Vector, 4), None);
    /// ```
    pub fn resolve(data_type: SauceDataType, file_type: u8) -> Option<FileType> {
        let table: &[FileType] = match data_type {
            SauceDataType::None => return Some(FileType::None),
            SauceDataType::BinaryText => return Some(FileType::BinaryText),
            SauceDataType::XBin => return Some(FileType::XBin),
            SauceDataType::Executable => return Some(FileType::Executable),
            SauceDataType::Character => &CHARACTER,
            SauceDataType::Bitmap => &BITMAP,
            SauceDataType::Vector => &VECTOR,
            SauceDataType::Audio => &AUDIO,
            SauceDataType::Archive => &ARCHIVE,
            SauceDataType::Undefined(byte) => {
                log::warn!("Unknown SAUCE data type {byte} - file type left undefined");
                return None;
            }
        };

        let resolved = table.get(file_type as usize).copied();
        if resolved.is_none() {
            log::warn!(
                "Invalid SAUCE file type {file_type} for data type {}",
                data_type.label()
            );
        }
        resolved
    }

    /// The data type this format belongs to.
    pub fn data_type(self) -> SauceDataType {
        match self {
            FileType::None => SauceDataType::None,
            FileType::BinaryText => SauceDataType::BinaryText,
            FileType::XBin => SauceDataType::XBin,
            FileType::Executable => SauceDataType::Executable,
            other if CHARACTER.contains(&other) => SauceDataType::Character,
            other if BITMAP.contains(&other) => SauceDataType::Bitmap,
            other if VECTOR.contains(&other) => SauceDataType::Vector,
            other if AUDIO.contains(&other) => SauceDataType::Audio,
            _ => SauceDataType::Archive,
        }
    }

    /// Character formats whose TInfo1/TInfo2 hold width and line count.
    pub fn has_character_dimensions(self) -> bool {
        matches!(
            self,
            FileType::Ascii
                | FileType::Ansi
                | FileType::AnsiMation
                | FileType::PcBoard
                | FileType::Avatar
                | FileType::TundraDraw
                | FileType::XBin
        )
    }

    /// Formats whose TInfoS names a font.
    pub fn has_font_name(self) -> bool {
        matches!(
            self,
            FileType::Ascii | FileType::Ansi | FileType::AnsiMation | FileType::XBin
        )
    }

    /// Sample based audio, which keeps the sample rate in TInfo1.
    pub fn is_sample(self) -> bool {
        matches!(
            self,
            FileType::Smp8 | FileType::Smp8s | FileType::Smp16 | FileType::Smp16s
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FileType::None => "None",
            FileType::Ascii => "ASCII",
            FileType::Ansi => "ANSi",
            FileType::AnsiMation => "ANSiMation",
            FileType::RipScript => "RIP script",
            FileType::PcBoard => "PCBoard",
            FileType::Avatar => "Avatar",
            FileType::Html => "HTML",
            FileType::Source => "Source",
            FileType::TundraDraw => "TundraDraw",
            FileType::Gif => "GIF",
            FileType::Pcx => "PCX",
            FileType::LbmIff => "LBM/IFF",
            FileType::Tga => "TGA",
            FileType::Fli => "FLI",
            FileType::Flc => "FLC",
            FileType::Bmp => "BMP",
            FileType::Gl => "GL",
            FileType::Dl => "DL",
            FileType::WpgBitmap | FileType::WpgVector => "WPG",
            FileType::Png => "PNG",
            FileType::Jpg => "JPG",
            FileType::Mpg => "MPG",
            FileType::Avi => "AVI",
            FileType::Dxf => "DXF",
            FileType::Dwg => "DWG",
            FileType::ThreeDs => "3DS",
            FileType::Mod => "MOD",
            FileType::Composer669 => "669",
            FileType::Stm => "STM",
            FileType::S3m => "S3M",
            FileType::Mtm => "MTM",
            FileType::Far => "FAR",
            FileType::Ult => "ULT",
            FileType::Amf => "AMF",
            FileType::Dmf => "DMF",
            FileType::Okt => "OKT",
            FileType::Rol => "ROL",
            FileType::Cmf => "CMF",
            FileType::Midi => "MIDI",
            FileType::Sadt => "SADT",
            FileType::Voc => "VOC",
            FileType::Wav => "WAV",
            FileType::Smp8 => "SMP8",
            FileType::Smp8s => "SMP8S",
            FileType::Smp16 => "SMP16",
            FileType::Smp16s => "SMP16S",
            FileType::Patch8 => "PATCH8",
            FileType::Patch16 => "PATCH16",
            FileType::Xm => "XM",
            FileType::Hsc => "HSC",
            FileType::It => "IT",
            FileType::BinaryText => "BinaryText",
            FileType::XBin => "XBin",
            FileType::Zip => "ZIP",
            FileType::Arj => "ARJ",
            FileType::Lzh => "LZH",
            FileType::Arc => "ARC",
            FileType::Tar => "TAR",
            FileType::Zoo => "ZOO",
            FileType::Rar => "RAR",
            FileType::Uc2 => "UC2",
            FileType::Pak => "PAK",
            FileType::Sqz => "SQZ",
            FileType::Executable => "Executable",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indices_follow_the_standard() {
        assert_eq!(FileType::resolve(SauceDataType::Character, 0), Some(FileType::Ascii));
        assert_eq!(FileType::resolve(SauceDataType::Character, 3), Some(FileType::RipScript));
        assert_eq!(FileType::resolve(SauceDataType::Character, 8), Some(FileType::TundraDraw));
        assert_eq!(FileType::resolve(SauceDataType::Bitmap, 10), Some(FileType::Png));
        assert_eq!(FileType::resolve(SauceDataType::Vector, 3), Some(FileType::ThreeDs));
        assert_eq!(FileType::resolve(SauceDataType::Audio, 16), Some(FileType::Smp8));
        assert_eq!(FileType::resolve(SauceDataType::Audio, 24), Some(FileType::It));
        assert_eq!(FileType::resolve(SauceDataType::Archive, 9), Some(FileType::Sqz));
    }

    #[test]
    fn out_of_range_index_is_absent() {
        assert_eq!(FileType::resolve(SauceDataType::Character, 9), None);
        assert_eq!(FileType::resolve(SauceDataType::Audio, 25), None);
        assert_eq!(FileType::resolve(SauceDataType::Archive, 255), None);
        assert_eq!(FileType::resolve(SauceDataType::Undefined(9), 0), None);
    }

    #[test]
    fn fixed_types_ignore_the_byte() {
        assert_eq!(FileType::resolve(SauceDataType::None, 77), Some(FileType::None));
        assert_eq!(FileType::resolve(SauceDataType::XBin, 3), Some(FileType::XBin));
        assert_eq!(FileType::resolve(SauceDataType::Executable, 0), Some(FileType::Executable));
    }

    #[test]
    fn every_table_entry_maps_back_to_its_data_type() {
        let tables: [(&[FileType], SauceDataType); 5] = [
            (&CHARACTER, SauceDataType::Character),
            (&BITMAP, SauceDataType::Bitmap),
            (&VECTOR, SauceDataType::Vector),
            (&AUDIO, SauceDataType::Audio),
            (&ARCHIVE, SauceDataType::Archive),
        ];
        for (table, data_type) in tables {
            for (index, file_type) in table.iter().enumerate() {
                assert_eq!(file_type.data_type(), data_type);
                assert_eq!(FileType::resolve(data_type, index as u8), Some(*file_type));
            }
        }
    }
}
