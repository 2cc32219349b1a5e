//! Turns the OCR text of the weekly menu image into a day-keyed [`Menu`].
//!
//! The image is laid out as a header per day (`Ponedeljek, 2.6.`) followed by
//! the soup on one line and the main dish over one or more lines, each line
//! ending in the allergen codes of the legend. OCR also picks up the logo in
//! various spellings and the allergen legend itself; both are dropped.

use std::borrow::Cow;

use super::{AllergenFlags, DayEntry, DayLabel, Menu};
use crate::static_regex;

/// Ways the OCR engine has read the logo.
const LOGO_MISREADS: [&str; 4] = ["vanderveg", "vanderueg", "uanderueg", "uanderveg"];
const LEGEND_MARKER: &str = "ALERGENI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CleanLine<'a> {
    text: &'a str,
    allergens: AllergenFlags,
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Junk,
    Header(DayLabel),
    Dish(CleanLine<'a>),
    /// nothing but an allergen footnote
    Empty,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        static_regex!(DAY_HEADER <- r"^(\w+),\s*(\d{1,2})\.(\d{1,2})");
        if is_junk(line) {
            return Self::Junk;
        }
        if let Some(caps) = DAY_HEADER.captures(line) {
            let group = |i| caps.get(i).map_or("", |m| m.as_str());
            return Self::Header(DayLabel::new(group(1), group(2), group(3)));
        }
        let clean = strip_allergens(line);
        if clean.text.is_empty() {
            Self::Empty
        } else {
            Self::Dish(clean)
        }
    }
}

fn is_junk(line: &str) -> bool {
    let lower = line.to_lowercase();
    LOGO_MISREADS.iter().any(|logo| lower.contains(logo)) || line.starts_with(LEGEND_MARKER)
}

fn strip_allergens(line: &str) -> CleanLine<'_> {
    static_regex!(ALLERGEN_SUFFIX <- r"\s*(\d+(?:,\d+)*)\s*$");
    let Some(caps) = ALLERGEN_SUFFIX.captures(line) else {
        return CleanLine {
            text: line,
            allergens: AllergenFlags::empty(),
        };
    };
    let start = caps.get(0).map_or(line.len(), |m| m.start());
    let codes = caps.get(1).map_or("", |m| m.as_str());
    CleanLine {
        text: &line[..start],
        allergens: AllergenFlags::from_codes(codes),
    }
}

/// OCR tends to read `riž, korenje` as `riž ,korenje`.
fn repair_commas(text: &str) -> Cow<'_, str> {
    static_regex!(STRAY_COMMA <- r"\s+,\s*");
    match STRAY_COMMA.replace_all(text, ", ") {
        Cow::Owned(s) => Cow::Owned(s.trim_end().to_string()),
        borrowed @ Cow::Borrowed(_) => borrowed,
    }
}

/// The entry for one day from the lines collected under its header. Lines
/// seen before the first header belong to no day.
fn flush(label: Option<&DayLabel>, buffer: &[CleanLine<'_>]) -> Option<DayEntry> {
    label?;
    let (soup, rest) = buffer.split_first()?;
    let main_dish = rest.iter().map(|line| line.text).collect::<Vec<_>>().join(" ");
    let main_dish_allergens = rest
        .iter()
        .fold(AllergenFlags::empty(), |acc, line| acc | line.allergens);
    Some(
        DayEntry::new(soup.text, repair_commas(&main_dish))
            .with_allergens(soup.allergens, main_dish_allergens),
    )
}

fn insert(menu: &mut Menu, label: Option<&DayLabel>, entry: Option<DayEntry>) {
    if let (Some(label), Some(entry)) = (label, entry) {
        // a repeated header keeps its first position
        menu.insert(label.clone(), entry);
    }
}

pub fn normalize(raw: &str) -> Menu {
    let mut menu = Menu::new();
    let mut current: Option<DayLabel> = None;
    let mut buffer: Vec<CleanLine<'_>> = Vec::new();

    // every Unicode line boundary, not just `\n`: OCR output sometimes
    // separates lines with a lone `\r` or a form feed
    static_regex!(LINE_BREAK <- r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]");
    for line in LINE_BREAK.split(raw).map(str::trim).filter(|line| !line.is_empty()) {
        match Line::classify(line) {
            Line::Junk => log::debug!("Dropping junk line {line:?}"),
            Line::Header(label) => {
                insert(&mut menu, current.as_ref(), flush(current.as_ref(), &buffer));
                buffer.clear();
                current = Some(label);
            }
            Line::Dish(clean) => buffer.push(clean),
            Line::Empty => {}
        }
    }
    insert(&mut menu, current.as_ref(), flush(current.as_ref(), &buffer));
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn header(line: &str) -> Option<String> {
        match Line::classify(line) {
            Line::Header(label) => Some(label.to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_day_header() {
        assert_eq!(
            header("Ponedeljek, 2.6. nekaj").as_deref(),
            Some("Ponedeljek, 2. 6.")
        );
        assert_eq!(header("Četrtek,12.06.").as_deref(), Some("Četrtek, 12. 06."));
        assert_eq!(header("Ponedeljek 2.6."), None);
        assert_eq!(header("Ponedeljek, 2 6"), None);
        assert_eq!(header("Juha, 2.6 kosov"), Some("Juha, 2. 6.".to_string()));
        assert_eq!(header("Ob ponedeljkih, 2.6."), None);
    }

    #[test]
    fn test_junk_lines() {
        for line in [
            "VanderVeg",
            "VANDERUEG",
            "~uanderueg~",
            "www.uanderveg.si",
            "ALERGENI: 1 gluten, 2 raki",
        ] {
            assert_eq!(Line::classify(line), Line::Junk, "{line}");
        }
        // the legend marker only counts at the start of the line and in capitals
        assert!(matches!(Line::classify("Alergeni so označeni"), Line::Dish(_)));
        assert!(matches!(Line::classify("Brez ALERGENI"), Line::Dish(_)));
    }

    // the logo filter matches substrings; an exact-match filter would let
    // these through
    #[test]
    fn test_junk_filter_matches_substrings() {
        assert!(is_junk("Dobrodošli v VanderVeg bistroju"));
        assert!(is_junk("vanderveg.si 2025"));
    }

    #[test]
    fn test_strip_allergens() {
        let clean = strip_allergens("Goveja obara 1,2,7");
        assert_eq!(clean.text, "Goveja obara");
        assert_eq!(
            clean.allergens,
            AllergenFlags::Gluten | AllergenFlags::Crustaceans | AllergenFlags::Milk
        );
        assert_eq!(strip_allergens("Pečena zelenjava").text, "Pečena zelenjava");
        assert_eq!(strip_allergens("Rižota 3, 6").text, "Rižota 3,");
        assert_eq!(strip_allergens("Juha  9  ").text, "Juha");
        assert_eq!(strip_allergens("1,2,3").text, "");
    }

    #[test]
    fn test_repair_commas() {
        assert_eq!(repair_commas("Glavna B ,C"), "Glavna B, C");
        assert_eq!(repair_commas("riž , korenje"), "riž, korenje");
        assert_eq!(repair_commas("riž, korenje"), "riž, korenje");
        assert_eq!(repair_commas("solata ,"), "solata,");
    }

    #[test]
    fn test_flush() {
        let label = DayLabel::new("Torek", "3", "6");
        let soup = CleanLine {
            text: "Juha A",
            allergens: AllergenFlags::Celery,
        };
        let main = CleanLine {
            text: "Glavna B ,C",
            allergens: AllergenFlags::Soy,
        };
        assert_eq!(flush(Some(&label), &[]), None);
        assert_eq!(flush(None, &[soup, main]), None);
        let entry = flush(Some(&label), &[soup, main]).unwrap();
        assert_eq!(entry.as_pair(), ["Juha A", "Glavna B, C"]);
        assert_eq!(entry.soup_allergens(), AllergenFlags::Celery);
        assert_eq!(entry.main_dish_allergens(), AllergenFlags::Soy);
    }

    #[test]
    fn test_end_to_end_example() {
        let raw = "VanderVeg\nPonedeljek, 2.6.\nGoveja obara 1,2\nPisana zelenjava z rizom 3,6,9\nALERGENI: 1 gluten...\n";
        let menu = normalize(raw);
        assert_eq!(menu.len(), 1);
        assert_eq!(
            menu["Ponedeljek, 2. 6."].as_pair(),
            ["Goveja obara", "Pisana zelenjava z rizom"]
        );
    }

    #[test]
    fn test_empty_day_has_no_entry() {
        let menu = normalize("Ponedeljek, 2.6.\nTorek, 3.6.\nJuha\nRižota\n");
        assert!(menu.get("Ponedeljek, 2. 6.").is_none());
        assert_eq!(menu["Torek, 3. 6."].as_pair(), ["Juha", "Rižota"]);
    }

    #[test]
    fn test_single_line_day() {
        let menu = normalize("Sreda, 4.6.\nBučna juha 7\n");
        assert_eq!(menu["Sreda, 4. 6."].as_pair(), ["Bučna juha", ""]);
    }

    #[test]
    fn test_space_before_comma_is_repaired() {
        let menu = normalize("Četrtek, 5.6.\nJuha A\nGlavna B ,C\n");
        assert_eq!(menu["Četrtek, 5. 6."].as_pair(), ["Juha A", "Glavna B, C"]);
    }

    #[test]
    fn test_footnote_only_lines_are_dropped() {
        let menu = normalize("Petek, 6.6.\n1,7\nJuha 1\n  \n9\nTofu 6\n");
        assert_eq!(menu["Petek, 6. 6."].as_pair(), ["Juha", "Tofu"]);
    }

    #[test]
    fn test_lines_before_first_header_are_discarded() {
        let menu = normalize("Tedenski meni\nod 2. do 6. junija\nPonedeljek, 2.6.\nJuha\n");
        assert_eq!(menu.len(), 1);
        assert_eq!(menu["Ponedeljek, 2. 6."].as_pair(), ["Juha", ""]);
    }

    #[test]
    fn test_repeated_header_keeps_first_position() {
        let menu = normalize(
            "Ponedeljek, 2.6.\nJuha A\nTorek, 3.6.\nJuha B\nPonedeljek, 2.6.\nJuha C\nGlavna C\n",
        );
        let days: Vec<&str> = menu.keys().map(DayLabel::as_str).collect();
        assert_eq!(days, ["Ponedeljek, 2. 6.", "Torek, 3. 6."]);
        assert_eq!(menu["Ponedeljek, 2. 6."].as_pair(), ["Juha C", "Glavna C"]);
    }

    #[test]
    fn test_nothing_recognisable() {
        assert!(normalize("").is_empty());
        assert!(normalize("VanderVeg\nnekaj brez dneva\n").is_empty());
    }

    #[test]
    fn test_week_example() {
        let raw = fs::read_to_string("./src/menu/ocr_examples/week.txt").unwrap();
        let menu = normalize(&raw);
        let days: Vec<&str> = menu.keys().map(DayLabel::as_str).collect();
        assert_eq!(
            days,
            [
                "Ponedeljek, 2. 6.",
                "Torek, 3. 6.",
                "Sreda, 4. 6.",
                "Četrtek, 5. 6.",
                "Petek, 6. 6."
            ]
        );
        assert_eq!(
            menu["Torek, 3. 6."].as_pair(),
            [
                "Paradižnikova juha z baziliko",
                "Polnozrnati špageti z lečino bolonjsko omako, zelena solata"
            ]
        );
        assert_eq!(
            menu["Petek, 6. 6."].main_dish_allergens(),
            AllergenFlags::Gluten | AllergenFlags::Soy | AllergenFlags::Sesame
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = fs::read_to_string("./src/menu/ocr_examples/week.txt").unwrap();
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_other_line_breaks() {
        let menu = normalize("Ponedeljek, 2.6.\rJuha A 1\rGlavna B\r");
        assert_eq!(menu.len(), 1);
        assert_eq!(menu["Ponedeljek, 2. 6."].as_pair(), ["Juha A", "Glavna B"]);

        let menu = normalize("Torek, 3.6.\u{2028}Juha C 9\x0cGlavna D\r\nSreda, 4.6.\x0bJuha E");
        assert_eq!(menu.len(), 2);
        assert_eq!(menu["Torek, 3. 6."].as_pair(), ["Juha C", "Glavna D"]);
        assert_eq!(menu["Sreda, 4. 6."].as_pair(), ["Juha E", ""]);
    }
}
