use crate::core::{unrecognized, CodeKind, RescatterCategory};
use crate::domain::model::UNINITIALIZED_CODE;

const NOT_SET: &str = "[not set]";

/// Name of a rescattering code in the convention of `category`.
///
/// The uninitialized sentinel is reported as `"[not set]"` whatever the
/// category.
pub fn rescattering_name(code: i32, category: RescatterCategory) -> String {
    if code == UNINITIALIZED_CODE {
        return NOT_SET.to_string();
    }

    match category {
        RescatterCategory::GenieINukeFateHA => genie_inuke_fate_ha_rescattering_name(code),
    }
}

/// [`rescattering_name`] with [`RescatterCategory::LARSOFT_DEFAULT`].
pub fn rescattering_name_default(code: i32) -> String {
    rescattering_name(code, RescatterCategory::default())
}

/// GENIE hA model fate (`genie::INukeFateHA_t`).
pub fn genie_inuke_fate_ha_rescattering_name(code: i32) -> String {
    let name = match code {
        UNINITIALIZED_CODE => NOT_SET,
        0 => "undefined",
        1 => "no interaction",
        2 => "charge exchange",
        3 => "elastic",
        4 => "inelastic",
        5 => "absorption",
        6 => "knock-out",
        7 => "compound nucleus",
        8 => "pion production",
        9 => "inclusive pi+",
        10 => "inclusive pi-",
        11 => "inclusive pi0",
        12 => "double charge exchange",
        _ => return unrecognized(CodeKind::Rescattering, code, "unknown rescattering"),
    };
    name.to_string()
}
