use crate::{
    AspectRatio, LetterSpacing, SauceDataType, SauceDate, SauceError, SauceTrailer, limits,
};

/// The builder helps creating valid SAUCE trailers.
///
/// [`encode`](crate::encode) silently pads and truncates whatever it is given;
/// the builder is where user supplied metadata gets rejected instead.
///
/// ```
/// use ansi_sauce::{SauceDataType, SauceDate, SauceTrailerBuilder};
///
/// let sauce = SauceTrailerBuilder::default()
///     .title("clouds").unwrap()
///     .author("mozz").unwrap()
///     .group("mistigris").unwrap()
///     .date(SauceDate::new(2026, 1, 18))
///     .data_type(SauceDataType::XBin)
///     .dimensions(80, 25).unwrap()
///     .build();
/// assert_eq!(sauce.date, "20260118");
/// assert_eq!(sauce.tinfo1, 80);
/// ```
#[derive(Default, Clone, Debug)]
pub struct SauceTrailerBuilder {
    trailer: SauceTrailer,
    comments: Vec<String>,
}

impl SauceTrailerBuilder {
    pub(crate) fn from_trailer(mut trailer: SauceTrailer) -> Self {
        let comments = if !trailer.comments.is_empty() {
            trailer.comments.split('\n').map(str::to_string).collect()
        } else if trailer.comment_count > 0 {
            vec![String::new()]
        } else {
            Vec::new()
        };
        trailer.comments.clear();
        SauceTrailerBuilder { trailer, comments }
    }

    pub fn title(mut self, title: impl Into<String>) -> crate::Result<Self> {
        let title = title.into();
        if title.len() > limits::MAX_TITLE_LENGTH {
            return Err(SauceError::TitleTooLong(title.len()));
        }
        self.trailer.title = title;
        Ok(self)
    }

    pub fn author(mut self, author: impl Into<String>) -> crate::Result<Self> {
        let author = author.into();
        if author.len() > limits::MAX_AUTHOR_LENGTH {
            return Err(SauceError::AuthorTooLong(author.len()));
        }
        self.trailer.author = author;
        Ok(self)
    }

    pub fn group(mut self, group: impl Into<String>) -> crate::Result<Self> {
        let group = group.into();
        if group.len() > limits::MAX_GROUP_LENGTH {
            return Err(SauceError::GroupTooLong(group.len()));
        }
        self.trailer.group = group;
        Ok(self)
    }

    pub fn date(mut self, date: SauceDate) -> Self {
        self.trailer.date = date.to_sauce_string();
        self
    }

    /// Sets the date from its `YYYYMMDD` text form.
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::UnsupportedSauceDate`] unless `date` is exactly
    /// eight ASCII digits.
    pub fn date_str(self, date: &str) -> crate::Result<Self> {
        match SauceDate::from_bytes(date.as_bytes()) {
            Some(parsed) => Ok(self.date(parsed)),
            None => Err(SauceError::UnsupportedSauceDate(date.into())),
        }
    }

    pub fn data_type(mut self, data_type: SauceDataType) -> Self {
        self.trailer.data_type = data_type;
        self
    }

    pub fn file_type(mut self, file_type: u8) -> Self {
        self.trailer.file_type = file_type;
        self
    }

    /// Sets width and height; call after [`data_type`](Self::data_type).
    ///
    /// # Errors
    ///
    /// See [`SauceTrailer::set_dimensions`].
    pub fn dimensions(mut self, columns: u16, rows: u16) -> crate::Result<Self> {
        self.trailer.set_dimensions(columns, rows)?;
        Ok(self)
    }

    pub fn tinfo(mut self, tinfo1: u16, tinfo2: u16, tinfo3: u16, tinfo4: u16) -> Self {
        self.trailer.tinfo1 = tinfo1;
        self.trailer.tinfo2 = tinfo2;
        self.trailer.tinfo3 = tinfo3;
        self.trailer.tinfo4 = tinfo4;
        self
    }

    pub fn ice_colors(mut self, ice_colors: bool) -> Self {
        self.trailer.flags = self.trailer.flags.with_ice_colors(ice_colors);
        self
    }

    pub fn letter_spacing(mut self, letter_spacing: LetterSpacing) -> Self {
        self.trailer.flags = self.trailer.flags.with_letter_spacing(letter_spacing);
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.trailer.flags = self.trailer.flags.with_aspect_ratio(aspect_ratio);
        self
    }

    pub fn font_name(mut self, font_name: impl Into<String>) -> crate::Result<Self> {
        let font_name = font_name.into();
        if font_name.len() > limits::MAX_FONT_NAME_LENGTH {
            return Err(SauceError::FontNameTooLong(font_name.len()));
        }
        self.trailer.font_name = font_name;
        Ok(self)
    }

    /// Adds a comment line to the SAUCE trailer
    pub fn add_comment(mut self, comment: impl Into<String>) -> crate::Result<Self> {
        let comment = comment.into();
        if self.comments.len() >= limits::MAX_COMMENTS {
            return Err(SauceError::CommentLimitExceeded);
        }
        if comment.len() > limits::COMMENT_LINE_LENGTH {
            return Err(SauceError::CommentTooLong(comment.len()));
        }
        self.comments.push(comment);
        Ok(self)
    }

    pub fn clear_comments(mut self) -> Self {
        self.comments.clear();
        self
    }

    /// Builds the SAUCE trailer
    pub fn build(self) -> SauceTrailer {
        let mut trailer = self.trailer;
        trailer.comments = self.comments.join("\n");
        // a lone empty comment still takes one line
        trailer.comment_count = u8::from(!self.comments.is_empty());
        trailer.comment_count = trailer.comment_lines() as u8;
        trailer
    }
}
