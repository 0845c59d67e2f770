//! Product family metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product line sharing a reference manual and memory-layout convention.
///
/// Every decoder rule maps to one of these, so a successfully decoded part
/// always has a full descriptor; there is no separate metadata table to
/// fall out of sync with the rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Gecko,
    Giant,
    GiantS1,
    Happy,
    Leopard,
    Pearl,
    Jade,
    Tiny,
    TinyS1,
    Wonder,
    Zero,
    Precision,
    Blue,
    Flex,
    Mighty,
}

impl Family {
    /// Stable identifier, also the per-family directory name in the
    /// emitted file list and the depends lookup.
    pub fn id(&self) -> &'static str {
        match self {
            Family::Gecko => "gecko",
            Family::Giant => "giant",
            Family::GiantS1 => "giant-s1",
            Family::Happy => "happy",
            Family::Leopard => "leopard",
            Family::Pearl => "pearl",
            Family::Jade => "jade",
            Family::Tiny => "tiny",
            Family::TinyS1 => "tiny-s1",
            Family::Wonder => "wonder",
            Family::Zero => "zero",
            Family::Precision => "precision",
            Family::Blue => "blue",
            Family::Flex => "flex",
            Family::Mighty => "mighty",
        }
    }

    /// Capitalized form used in the SHORT description.
    pub fn label(&self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Reference manual URL. Not every family has a published manual.
    pub fn manual(&self) -> &'static str {
        match self {
            Family::Gecko => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32G-RM.pdf"
            }
            Family::Giant => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32GG-RM.pdf"
            }
            Family::GiantS1 => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32GG12-RM.pdf"
            }
            Family::Happy => {
                "https://www.silabs.com/documents/public/reference-manuals/efm32hg-rm.pdf"
            }
            Family::Leopard => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32LG-RM.pdf"
            }
            Family::Pearl => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32PG1-ReferenceManual.pdf"
            }
            Family::Jade => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32JG1-ReferenceManual.pdf"
            }
            Family::Tiny => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32TG-RM.pdf"
            }
            Family::TinyS1 => {
                "https://www.silabs.com/documents/public/reference-manuals/efm32tg11-rm.pdf"
            }
            Family::Wonder => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32WG-RM.pdf"
            }
            Family::Zero => {
                "https://www.silabs.com/documents/public/reference-manuals/EFM32ZG-RM.pdf"
            }
            Family::Precision => "",
            Family::Blue | Family::Flex | Family::Mighty => {
                "https://www.silabs.com/documents/public/reference-manuals/efr32xg1-rm.pdf"
            }
        }
    }

    /// Flash boot-page size in bytes, as the build system expects it.
    pub fn page_size(&self) -> &'static str {
        match self {
            Family::Blue | Family::Flex | Family::Mighty => "2048",
            _ => "512",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_capitalizes_first_char_only() {
        assert_eq!(Family::Giant.label(), "Giant");
        assert_eq!(Family::GiantS1.label(), "Giant-s1");
    }

    #[test]
    fn test_radio_families_use_large_pages() {
        assert_eq!(Family::Giant.page_size(), "512");
        assert_eq!(Family::Mighty.page_size(), "2048");
    }
}
