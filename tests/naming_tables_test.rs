use truth_names::core::particle::known_particle_ids;
use truth_names::core::truth::{CCNC_CHARGED_CURRENT, CCNC_NEUTRAL_CURRENT};
use truth_names::{
    genie_inuke_fate_ha_rescattering_name, particle_name, particle_status_name,
    rescattering_name, rescattering_name_default, truth_ccnc_name, truth_interaction_type_name,
    truth_origin_code_name, truth_origin_name, truth_reaction_mode, Origin, RescatterCategory,
    UNINITIALIZED_CODE,
};

const EDGE_CODES: [i32; 9] = [
    i32::MIN,
    i32::MIN + 1,
    -1_000_000,
    -1,
    0,
    1,
    999_999_999,
    2_000_000_000,
    i32::MAX,
];

type Namer = fn(i32) -> String;

fn all_namers() -> Vec<(&'static str, Namer)> {
    let namers: [(&'static str, Namer); 8] = [
        ("particle", particle_name),
        ("status", particle_status_name),
        ("origin", truth_origin_code_name),
        ("ccnc", truth_ccnc_name),
        ("mode", truth_reaction_mode),
        ("interaction", truth_interaction_type_name),
        ("rescattering", rescattering_name_default),
        ("genie_fate", genie_inuke_fate_ha_rescattering_name),
    ];
    namers.to_vec()
}

#[test]
fn test_known_codes_table() {
    let cases: Vec<(String, &str)> = vec![
        (truth_ccnc_name(CCNC_CHARGED_CURRENT), "CC"),
        (truth_ccnc_name(CCNC_NEUTRAL_CURRENT), "NC"),
        (truth_origin_name(Origin::BeamNeutrino), "beam neutrino"),
        (truth_origin_name(Origin::Unknown), "unknown"),
        (truth_reaction_mode(3), "coherent"),
        (truth_interaction_type_name(1097), "charged current coherent pion production"),
        (particle_status_name(2), "intermediate"),
        (particle_name(-11), "e+"),
        (particle_name(1000180400), "40Ar"),
        (genie_inuke_fate_ha_rescattering_name(12), "double charge exchange"),
    ];

    for (actual, expected) in cases {
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_every_table_entry_has_a_specific_name() {
    for (id, name) in known_particle_ids() {
        assert_eq!(particle_name(id), name);
        assert!(!name.contains("unknown"), "id {} has a fallback-like name", id);
    }
}

#[test]
fn test_fallback_embeds_decimal_value() {
    assert!(particle_name(999999999).contains("999999999"));

    let unknown_codes = [
        ("status", 17),
        ("origin", -3),
        ("ccnc", 7),
        ("mode", 99),
        ("interaction", 5000),
        ("rescattering", 40),
        ("genie_fate", -2),
    ];
    for (label, code) in unknown_codes {
        let namer = all_namers()
            .into_iter()
            .find(|(name, _)| *name == label)
            .map(|(_, namer)| namer)
            .unwrap();
        let name = namer(code);
        assert!(
            name.contains(&code.to_string()),
            "{} fallback '{}' does not mention {}",
            label,
            name,
            code
        );
    }
}

#[test]
fn test_uninitialized_sentinel_for_every_category() {
    for category in [RescatterCategory::GenieINukeFateHA, RescatterCategory::LARSOFT_DEFAULT] {
        assert_eq!(rescattering_name(UNINITIALIZED_CODE, category), "[not set]");
    }
}

#[test]
fn test_rescattering_delegates_to_genie_table() {
    let codes = (-20..40).chain(EDGE_CODES);
    for code in codes {
        assert_eq!(
            rescattering_name(code, RescatterCategory::GenieINukeFateHA),
            genie_inuke_fate_ha_rescattering_name(code)
        );
    }
}

#[test]
fn test_total_and_deterministic() {
    for (label, namer) in all_namers() {
        for code in EDGE_CODES.into_iter().chain(-50..1200) {
            let first = namer(code);
            let second = namer(code);
            assert!(!first.is_empty(), "{} produced an empty name for {}", label, code);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_names_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            std::thread::spawn(move || {
                (0..100)
                    .map(|code| particle_name(code + offset) + &rescattering_name_default(code))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (offset, handle) in handles.into_iter().enumerate() {
        let names = handle.join().unwrap();
        assert_eq!(
            names[0],
            particle_name(offset as i32) + &rescattering_name_default(0)
        );
    }
}
