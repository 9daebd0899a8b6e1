use crate::core::{trace_unrecognized, unrecognized, CodeKind};

/// Elementary particles and common hadrons, keyed by PDG ID.
const PARTICLES: &[(i32, &str)] = &[
    (1, "d"),
    (-1, "anti-d"),
    (2, "u"),
    (-2, "anti-u"),
    (3, "s"),
    (-3, "anti-s"),
    (4, "c"),
    (-4, "anti-c"),
    (5, "b"),
    (-5, "anti-b"),
    (6, "t"),
    (-6, "anti-t"),
    (11, "e-"),
    (-11, "e+"),
    (12, "nu_e"),
    (-12, "anti-nu_e"),
    (13, "mu-"),
    (-13, "mu+"),
    (14, "nu_mu"),
    (-14, "anti-nu_mu"),
    (15, "tau-"),
    (-15, "tau+"),
    (16, "nu_tau"),
    (-16, "anti-nu_tau"),
    (21, "gluon"),
    (22, "gamma"),
    (23, "Z0"),
    (24, "W+"),
    (-24, "W-"),
    (25, "H0"),
    (111, "pi0"),
    (211, "pi+"),
    (-211, "pi-"),
    (113, "rho0"),
    (213, "rho+"),
    (-213, "rho-"),
    (221, "eta"),
    (223, "omega"),
    (331, "eta'"),
    (333, "phi"),
    (130, "K0_L"),
    (310, "K0_S"),
    (311, "K0"),
    (-311, "anti-K0"),
    (321, "K+"),
    (-321, "K-"),
    (411, "D+"),
    (-411, "D-"),
    (421, "D0"),
    (-421, "anti-D0"),
    (431, "D_s+"),
    (-431, "D_s-"),
    (443, "J/psi"),
    (2212, "p"),
    (-2212, "anti-p"),
    (2112, "n"),
    (-2112, "anti-n"),
    (2224, "Delta++"),
    (2214, "Delta+"),
    (2114, "Delta0"),
    (1114, "Delta-"),
    (3122, "Lambda"),
    (-3122, "anti-Lambda"),
    (3222, "Sigma+"),
    (-3222, "anti-Sigma+"),
    (3212, "Sigma0"),
    (-3212, "anti-Sigma0"),
    (3112, "Sigma-"),
    (-3112, "anti-Sigma-"),
    (3322, "Xi0"),
    (3312, "Xi-"),
    (3334, "Omega-"),
    (4122, "Lambda_c+"),
    // GENIE pseudo-particles
    (2000000001, "GENIE hadronic system"),
    (2000000002, "GENIE hadronic blob"),
    (2000000101, "GENIE bindino"),
];

const ELEMENTS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

const ION_BASE: i32 = 1_000_000_000;
const ION_LIMIT: i32 = 2_000_000_000;

/// IDs with an entry in the fixed particle table, ions excluded.
pub fn known_particle_ids() -> impl Iterator<Item = (i32, &'static str)> {
    PARTICLES.iter().copied()
}

/// Common name of the particle with the given PDG ID.
///
/// Nuclei in the `10LZZZAAAI` convention are written as mass number and
/// element symbol (`40Ar`), prefixed by one `Lambda-` per strange quark and
/// followed by `*` when the isomer level is non-zero. Anything else that is
/// not in the table comes back as `"<unknown: ID>"`.
pub fn particle_name(pdg_id: i32) -> String {
    if let Some((_, name)) = PARTICLES.iter().find(|(id, _)| *id == pdg_id) {
        return (*name).to_string();
    }

    if let Some(name) = ion_name(pdg_id) {
        return name;
    }

    trace_unrecognized(CodeKind::Particle, pdg_id);
    format!("<unknown: {}>", pdg_id)
}

fn ion_name(pdg_id: i32) -> Option<String> {
    // i32::MIN has no absolute value; it is not an ion anyway.
    let magnitude = pdg_id.checked_abs()?;
    if !(ION_BASE..ION_LIMIT).contains(&magnitude) {
        return None;
    }
    // 10LZZZAAAI: the digit after the leading 1 is always 0.
    if (magnitude / 100_000_000) % 10 != 0 {
        return None;
    }

    let isomer = magnitude % 10;
    let mass = (magnitude / 10) % 1000;
    let charge = (magnitude / 10_000) % 1000;
    let strange = (magnitude / 10_000_000) % 10;

    if charge == 0 || mass == 0 || mass < charge {
        return None;
    }

    let symbol = match ELEMENTS.get(charge as usize - 1) {
        Some(symbol) => (*symbol).to_string(),
        None => format!("Z{}", charge),
    };

    let mut name = String::new();
    if pdg_id < 0 {
        name.push_str("anti-");
    }
    for _ in 0..strange {
        name.push_str("Lambda-");
    }
    name.push_str(&format!("{}{}", mass, symbol));
    if isomer > 0 {
        name.push('*');
    }
    Some(name)
}

/// GENIE particle status code (`GHepStatus_t`) as a short label.
pub fn particle_status_name(code: i32) -> String {
    let name = match code {
        -1 => "undefined",
        0 => "initial state",
        1 => "stable final state",
        2 => "intermediate",
        3 => "decayed",
        10 => "correlated nucleon",
        11 => "nucleon target",
        12 => "pre-fragmentation hadronic state",
        13 => "pre-decay resonant state",
        14 => "hadron in the nucleus",
        15 => "final state nuclear remnant",
        16 => "nucleon cluster target",
        _ => return unrecognized(CodeKind::Status, code, "unknown status"),
    };
    name.to_string()
}
