//! Typed interpretation of SAUCE fields.
//!
//! The TInfo slots and the font name mean different things per data and file
//! type. [`SauceInfo`] resolves the file type once and answers each question
//! only where the standard defines it, `None` elsewhere. It is built from a
//! decoded [`SauceTrailer`] or from a [`RemoteSauce`] record, and the two
//! sources behave the same.
//!
//! ```
//! use ansi_sauce::{FileType, SauceDataType, SauceInfo, SauceTrailer};
//!
//! let trailer = SauceTrailer {
//!     data_type: SauceDataType::Character,
//!     file_type: 1,
//!     tinfo1: 80,
//!     tinfo2: 149,
//!     ..Default::default()
//! };
//! let info = SauceInfo::from(&trailer);
//! assert_eq!(info.filetype(), Some(FileType::Ansi));
//! assert_eq!(info.character_width(), Some(80));
//! assert_eq!(info.number_of_lines(), Some(149));
//! assert_eq!(info.pixel_width(), None);
//! ```

use crate::{
    AspectRatio, FileType, LetterSpacing, RemoteSauce, SauceDataType, SauceDate, SauceFlags,
    SauceTrailer,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SauceInfo {
    title: String,
    author: String,
    group: String,
    comments: String,
    date: String,
    filesize: u32,
    datatype: Option<SauceDataType>,
    filetype: Option<FileType>,
    tinfo: [Option<u16>; 4],
    tinfos: String,
    ice_colors: Option<bool>,
    letter_spacing: Option<LetterSpacing>,
    aspect_ratio: Option<AspectRatio>,
}

impl From<&SauceTrailer> for SauceInfo {
    fn from(trailer: &SauceTrailer) -> Self {
        let flags = trailer.flags;
        SauceInfo {
            title: trailer.title.clone(),
            author: trailer.author.clone(),
            group: trailer.group.clone(),
            comments: trailer.comments.clone(),
            date: trailer.date.clone(),
            filesize: trailer.filesize,
            datatype: Some(trailer.data_type),
            filetype: FileType::resolve(trailer.data_type, trailer.file_type),
            tinfo: [
                Some(trailer.tinfo1),
                Some(trailer.tinfo2),
                Some(trailer.tinfo3),
                Some(trailer.tinfo4),
            ],
            tinfos: trailer.font_name.clone(),
            ice_colors: Some(flags.ice_colors()),
            letter_spacing: Some(flags.letter_spacing()),
            aspect_ratio: Some(flags.aspect_ratio()),
        }
    }
}

impl From<RemoteSauce> for SauceInfo {
    fn from(remote: RemoteSauce) -> Self {
        let datatype = remote.datatype.map(SauceDataType::from);
        let filetype = match (datatype, remote.filetype) {
            (Some(datatype), Some(filetype)) => FileType::resolve(datatype, filetype),
            _ => None,
        };

        let (ice_colors, letter_spacing, aspect_ratio) = match (remote.ansi_flags, remote.tflags) {
            (Some(flags), _) => (
                flags.blink,
                flags.ls.map(LetterSpacing::from_bits),
                flags.ar.map(AspectRatio::from_bits),
            ),
            (None, Some(bits)) => {
                let flags = SauceFlags::from_bits(bits);
                (
                    Some(flags.ice_colors()),
                    Some(flags.letter_spacing()),
                    Some(flags.aspect_ratio()),
                )
            }
            (None, None) => (None, None, None),
        };

        SauceInfo {
            title: remote.title.unwrap_or_default(),
            author: remote.author.unwrap_or_default(),
            group: remote.group.unwrap_or_default(),
            comments: remote.comments.unwrap_or_default(),
            date: remote.date.map(|date| date.to_string()).unwrap_or_default(),
            filesize: remote.filesize.unwrap_or_default(),
            datatype,
            filetype,
            tinfo: [remote.tinfo1, remote.tinfo2, remote.tinfo3, remote.tinfo4],
            tinfos: remote.tinfos.unwrap_or_default(),
            ice_colors,
            letter_spacing,
            aspect_ratio,
        }
    }
}

impl SauceInfo {
    /// Decodes and interprets the trailer at the end of `data`.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        crate::decode(data).map(|trailer| SauceInfo::from(&trailer))
    }

    /// Parses a remote record, see [`RemoteSauce`].
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::InvalidRemoteSauce`](crate::SauceError::InvalidRemoteSauce)
    /// if `json` is not an object of the expected shape.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let remote: RemoteSauce = serde_json::from_str(json)?;
        Ok(remote.into())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn filesize(&self) -> u32 {
        self.filesize
    }

    /// The creation date; an invalid one is logged and absent.
    pub fn date(&self) -> Option<SauceDate> {
        SauceDate::parse_field(&self.date)
    }

    pub fn datatype(&self) -> Option<SauceDataType> {
        self.datatype
    }

    /// `None` when the record has no file type or its index is out of range.
    pub fn filetype(&self) -> Option<FileType> {
        self.filetype
    }

    fn is_pixel_based(&self) -> bool {
        self.datatype == Some(SauceDataType::Bitmap) || self.filetype == Some(FileType::RipScript)
    }

    fn has_character_dimensions(&self) -> bool {
        self.filetype.is_some_and(FileType::has_character_dimensions)
    }

    /// Width in pixels, for bitmaps and RIP scripts.
    pub fn pixel_width(&self) -> Option<u16> {
        self.tinfo[0].filter(|_| self.is_pixel_based())
    }

    pub fn pixel_height(&self) -> Option<u16> {
        self.tinfo[1].filter(|_| self.is_pixel_based())
    }

    /// Bits per pixel, for bitmaps only.
    pub fn pixel_depth(&self) -> Option<u16> {
        self.tinfo[2].filter(|_| self.datatype == Some(SauceDataType::Bitmap))
    }

    /// Sample rate of SMP8/SMP16 audio.
    pub fn sample_rate(&self) -> Option<u16> {
        self.tinfo[0].filter(|_| self.filetype.is_some_and(FileType::is_sample))
    }

    /// Width in characters, for the text formats that store it.
    pub fn character_width(&self) -> Option<u16> {
        self.tinfo[0].filter(|_| self.has_character_dimensions())
    }

    pub fn number_of_lines(&self) -> Option<u16> {
        self.tinfo[1].filter(|_| self.has_character_dimensions())
    }

    /// The font name for ASCII, ANSI, ANSiMation and XBin; empty otherwise.
    pub fn font_name(&self) -> &str {
        if self.filetype.is_some_and(FileType::has_font_name) {
            &self.tinfos
        } else {
            ""
        }
    }

    pub fn ice_colors(&self) -> Option<bool> {
        self.ice_colors
    }

    pub fn letter_spacing(&self) -> Option<LetterSpacing> {
        self.letter_spacing
    }

    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio
    }
}
