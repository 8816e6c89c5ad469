use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Every accepted string form, in declaration order.
            pub fn variants() -> &'static [&'static str] {
                &[$($s),+]
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(EventCategory {
    Medical => "medical",
    Appointment => "appointment",
    Medication => "medication",
    Other => "other",
});

str_enum!(AttachmentKind {
    Image => "image",
    Pdf => "pdf",
    Audio => "audio",
});

impl EventCategory {
    /// Badge classes for the timeline card.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Medical => "bg-blue-100 text-blue-800",
            Self::Appointment => "bg-green-100 text-green-800",
            Self::Medication => "bg-purple-100 text-purple-800",
            Self::Other => "bg-gray-100 text-gray-800",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Appointment => "lucide-calendar",
            _ => "lucide-file-text",
        }
    }
}

impl AttachmentKind {
    /// Guess the kind from a file name's extension. Unknown extensions are images.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Self::Pdf,
            "mp3" | "wav" | "m4a" | "ogg" | "aac" | "flac" | "webm" => Self::Audio,
            _ => Self::Image,
        }
    }
}
