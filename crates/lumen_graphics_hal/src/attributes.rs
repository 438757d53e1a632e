use std::str::FromStr;

use num_enum::IntoPrimitive;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Vertex attribute locations bound by name before every link.
///
/// Any shader declaring these inputs gets the same location regardless of
/// declaration order, so vertex layouts can be written against fixed indices.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    IntoPrimitive,
)]
#[repr(u32)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeSlot {
    Position = 0,
    Normal = 1,
    Texcoord = 2,
}

impl AttributeSlot {
    pub fn location(self) -> u32 {
        self.into()
    }

    /// Name of the shader input bound to this slot.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_fixed_bindings() {
        let bindings: Vec<_> = AttributeSlot::iter()
            .map(|slot| (slot.location(), slot.name()))
            .collect();

        assert_eq!(
            bindings,
            vec![(0, "position"), (1, "normal"), (2, "texcoord")]
        );
        assert_eq!(AttributeSlot::COUNT, 3);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AttributeSlot::from_name("normal"), Some(AttributeSlot::Normal));
        assert_eq!(AttributeSlot::from_name("Normal"), None);
        assert_eq!(AttributeSlot::from_name("color"), None);
    }
}
