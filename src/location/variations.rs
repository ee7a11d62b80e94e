//! Geocoder query variations for a hierarchical district name.
//!
//! Order is most specific → least specific:
//!   full address → without neighborhood → bare province
//!   → romanized province → romanized county → Korean county
//! The resolver stops at the first candidate that matches, so this order is
//! also the tie-break between competing matches.

use super::romanization::TransliterationTable;
use super::types::HierarchicalPlaceName;

const COUNTRY_CODE: &str = "KR";
const COUNTRY_NAME: &str = "South Korea";

/// Generate the ordered candidate list for a raw district string.
///
/// `"대전광역시-서구-가수원동"` →
/// `["가수원동, 서구, 대전광역시, KR", "서구, 대전광역시, KR", "대전광역시, KR",
///   "Daejeon, KR", "Daejeon, South Korea", "Seo-gu, Daejeon, South Korea",
///   "Seo-gu, South Korea", "서구, South Korea"]`
pub fn generate(raw: &str, table: &TransliterationTable) -> Vec<String> {
    generate_for(&HierarchicalPlaceName::parse(raw), table)
}

/// Same as [`generate`] for an already-parsed name. Duplicates are kept.
pub fn generate_for(name: &HierarchicalPlaceName, table: &TransliterationTable) -> Vec<String> {
    let parts = name.segments();
    let mut queries = Vec::new();

    let Some(province) = name.province() else {
        return queries;
    };

    queries.push(reversed_with_country(parts));

    if parts.len() >= 2 {
        queries.push(reversed_with_country(&parts[..parts.len() - 1]));
    }

    queries.push(format!("{}, {}", province, COUNTRY_CODE));

    let roman_province = table.province(province);
    if let Some(rp) = roman_province {
        queries.push(format!("{}, {}", rp, COUNTRY_CODE));
        queries.push(format!("{}, {}", rp, COUNTRY_NAME));
    }

    if let Some(county) = name.county() {
        if let Some(rc) = table.county(county) {
            if let Some(rp) = roman_province {
                queries.push(format!("{}, {}, {}", rc, rp, COUNTRY_NAME));
            }
            queries.push(format!("{}, {}", rc, COUNTRY_NAME));
        }
        queries.push(format!("{}, {}", county, COUNTRY_NAME));
    }

    queries
}

/// `[a, b, c]` → `"c, b, a, KR"`
fn reversed_with_country(parts: &[String]) -> String {
    parts
        .iter()
        .rev()
        .map(String::as_str)
        .chain(std::iter::once(COUNTRY_CODE))
        .collect::<Vec<_>>()
        .join(", ")
}
