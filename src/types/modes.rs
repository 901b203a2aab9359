//! Small integer-coded enums used by inpainting and ControlNet.
//!
//! The service takes these as bare integers, so they serialize as their code.

use serde::{Serialize, Serializer};

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $domain:literal {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code),+
        }

        impl $name {
            /// Human-readable description of the accepted codes
            pub const DOMAIN: &'static str = $domain;

            /// Integer code sent on the wire
            pub const fn code(self) -> u8 {
                self as u8
            }

            /// Look up a variant by its integer code
            pub const fn from_code(code: u64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.code())
            }
        }
    };
}

coded_enum! {
    /// What fills the masked region before inpainting.
    InpaintingFill, "one of 0 (fill), 1 (original), 2 (latent noise), 3 (latent nothing)" {
        Fill = 0,
        Original = 1,
        LatentNoise = 2,
        LatentNothing = 3,
    }
}

coded_enum! {
    /// Which side of the mask gets regenerated.
    MaskInvert, "one of 0 (inpaint masked), 1 (inpaint not masked)" {
        InpaintMasked = 0,
        InpaintNotMasked = 1,
    }
}

coded_enum! {
    /// Balance between the prompt and the ControlNet conditioning.
    ControlMode, "one of 0 (balanced), 1 (prompt is more important), 2 (ControlNet is more important)" {
        Balanced = 0,
        PromptMoreImportant = 1,
        ControlNetMoreImportant = 2,
    }
}
