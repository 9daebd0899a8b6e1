use crate::core::{unrecognized, CodeKind, Origin};

/// Charged-current flag value in the truth record.
pub const CCNC_CHARGED_CURRENT: i32 = 0;
/// Neutral-current flag value in the truth record.
pub const CCNC_NEUTRAL_CURRENT: i32 = 1;

pub fn truth_origin_name(origin: Origin) -> String {
    match origin {
        Origin::Unknown => "unknown",
        Origin::BeamNeutrino => "beam neutrino",
        Origin::CosmicRay => "cosmic ray",
        Origin::SuperNovaNeutrino => "supernova neutrino",
        Origin::SingleParticle => "single particle",
    }
    .to_string()
}

/// Like [`truth_origin_name`], for a raw origin code read from a record.
pub fn truth_origin_code_name(code: i32) -> String {
    match Origin::from_code(code) {
        Some(origin) => truth_origin_name(origin),
        None => unrecognized(CodeKind::Origin, code, "unsupported origin"),
    }
}

pub fn truth_ccnc_name(ccnc: i32) -> String {
    match ccnc {
        CCNC_CHARGED_CURRENT => "CC".to_string(),
        CCNC_NEUTRAL_CURRENT => "NC".to_string(),
        _ => unrecognized(CodeKind::CcNc, ccnc, "unsupported CC/NC"),
    }
}

/// Coarse interaction mode (`simb::int_type_` values 0 to 13).
pub fn truth_reaction_mode(mode: i32) -> String {
    match reaction_mode_label(mode) {
        Some(label) => label.to_string(),
        None => unrecognized(CodeKind::ReactionMode, mode, "unknown mode"),
    }
}

fn reaction_mode_label(mode: i32) -> Option<&'static str> {
    let label = match mode {
        0 => "quasi-elastic",
        1 => "resonant",
        2 => "deep inelastic",
        3 => "coherent",
        4 => "coherent elastic",
        5 => "electron scattering",
        6 => "inverse muon decay annihilation",
        7 => "inverse beta decay",
        8 => "Glashow resonance",
        9 => "anomalous neutrino-photon interaction",
        10 => "meson exchange current",
        11 => "diffractive",
        12 => "electromagnetic",
        13 => "weak mixing",
        _ => return None,
    };
    Some(label)
}

/// Detailed interaction type.
///
/// Accepts the coarse modes, the `-100` "unknown" marker and the
/// NUANCE-style codes starting at the 1000 offset.
pub fn truth_interaction_type_name(interaction_type: i32) -> String {
    if let Some(label) = reaction_mode_label(interaction_type) {
        return label.to_string();
    }

    let label = match interaction_type {
        -100 => "unknown interaction",
        1000 => "(NUANCE offset)",
        1001 => "charged current quasi-elastic",
        1002 => "neutral current quasi-elastic",
        1003 => "resonant charged current, nu p -> l- p pi+",
        1004 => "resonant charged current, nu n -> l- p pi0",
        1005 => "resonant charged current, nu n -> l- n pi+",
        1006 => "resonant neutral current, nu p -> nu p pi0",
        1007 => "resonant neutral current, nu p -> nu p pi+",
        1008 => "resonant neutral current, nu n -> nu n pi0",
        1009 => "resonant neutral current, nu n -> nu p pi-",
        1010 => "resonant charged current, nubar p -> l+ n pi-",
        1011 => "resonant charged current, nubar p -> l+ p pi0",
        1012 => "resonant charged current, nubar n -> l+ n pi-",
        1013 => "resonant neutral current, nubar p -> nubar p pi0",
        1014 => "resonant neutral current, nubar p -> nubar n pi+",
        1015 => "resonant neutral current, nubar n -> nubar n pi0",
        1016 => "resonant neutral current, nubar n -> nubar p pi-",
        1017 => "resonant charged current, nu p -> l- Delta+ pi+",
        1021 => "resonant charged current, nu p -> l- Delta++ pi-",
        1028 => "resonant charged current, nubar p -> l+ Delta0 pi-",
        1032 => "resonant charged current, nubar p -> l+ Delta- pi+",
        1039 => "resonant charged current, nu p -> l- p rho+",
        1041 => "resonant charged current, nu n -> l- n rho+",
        1046 => "resonant charged current, nubar n -> l+ n rho-",
        1048 => "resonant charged current, nubar n -> l+ n rho0",
        1053 => "resonant charged current, nu p -> l- Sigma+ K+",
        1055 => "resonant charged current, nu n -> l- Sigma+ K0",
        1060 => "resonant charged current, nubar n -> l+ Sigma- K0",
        1062 => "resonant charged current, nubar p -> l+ Sigma0 K0",
        1067 => "resonant charged current, nu n -> l- p eta",
        1070 => "resonant charged current, nubar p -> l+ n eta",
        1073 => "resonant charged current, nu n -> l- K+ Lambda",
        1076 => "resonant charged current, nubar p -> l+ K0 Lambda",
        1079 => "resonant charged current, nu n -> l- p pi+ pi-",
        1080 => "resonant charged current, nu n -> l- p pi0 pi0",
        1085 => "resonant charged current, nubar p -> l+ n pi+ pi-",
        1086 => "resonant charged current, nubar p -> l+ n pi0 pi0",
        1090 => "resonant charged current, nubar p -> l+ p pi- pi0",
        1091 => "charged current deep inelastic",
        1092 => "neutral current deep inelastic",
        1093 => "(unused 1)",
        1094 => "(unused 2)",
        1095 => "charged current quasi-elastic hyperon production",
        1096 => "neutral current coherent pion production",
        1097 => "charged current coherent pion production",
        1098 => "neutrino-electron elastic scattering",
        1099 => "inverse muon decay",
        1100 => "meson exchange current, 2 particles-2 holes",
        _ => {
            return unrecognized(
                CodeKind::InteractionType,
                interaction_type,
                "unknown interaction type",
            )
        }
    };
    label.to_string()
}
