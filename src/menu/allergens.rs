use std::fmt::Display;

use bitflags::bitflags;

bitflags! {
    /// The fourteen allergens of the EU legend, bit `n - 1` for code `n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AllergenFlags: u16 {
        const Gluten = 1;
        const Crustaceans = 1 << 1;
        const Eggs = 1 << 2;
        const Fish = 1 << 3;
        const Peanuts = 1 << 4;
        const Soy = 1 << 5;
        const Milk = 1 << 6;
        const TreeNuts = 1 << 7;
        const Celery = 1 << 8;
        const Mustard = 1 << 9;
        const Sesame = 1 << 10;
        const Sulphites = 1 << 11;
        const Lupin = 1 << 12;
        const Molluscs = 1 << 13;
    }
}

static ALLERGEN_NAMES: [(AllergenFlags, &str); 14] = [
    (AllergenFlags::Gluten, "Gluten"),
    (AllergenFlags::Crustaceans, "Crustaceans"),
    (AllergenFlags::Eggs, "Eggs"),
    (AllergenFlags::Fish, "Fish"),
    (AllergenFlags::Peanuts, "Peanuts"),
    (AllergenFlags::Soy, "Soy"),
    (AllergenFlags::Milk, "Milk"),
    (AllergenFlags::TreeNuts, "Tree Nuts"),
    (AllergenFlags::Celery, "Celery"),
    (AllergenFlags::Mustard, "Mustard"),
    (AllergenFlags::Sesame, "Sesame"),
    (AllergenFlags::Sulphites, "Sulphites"),
    (AllergenFlags::Lupin, "Lupin"),
    (AllergenFlags::Molluscs, "Molluscs"),
];

impl AllergenFlags {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=14 => Self::from_bits(1 << (code - 1)),
            _ => None,
        }
    }

    /// Parses a footnote like `1,2,7`. Codes outside the legend are skipped.
    pub fn from_codes(codes: &str) -> Self {
        codes
            .split(',')
            .filter_map(|code| {
                let flag = code.trim().parse::<u8>().ok().and_then(Self::from_code);
                if flag.is_none() {
                    log::debug!("Ignoring unknown allergen code {code:?}");
                }
                flag
            })
            .fold(Self::empty(), |acc, x| acc | x)
    }

    pub fn names(self) -> Vec<&'static str> {
        ALLERGEN_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl Display for AllergenFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

impl serde::Serialize for AllergenFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names().serialize(serializer)
    }
}
