use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of media the user wants analysed. Decides which files the picker
/// accepts and which renderer shows the inference result.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    /// Value sent in the `media_type` form field.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// `accept` filter for the file picker.
    pub fn accept(self) -> &'static str {
        match self {
            MediaType::Image => "image/*",
            MediaType::Video => "video/*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::Image => "Image",
            MediaType::Video => "Video",
        }
    }
}
