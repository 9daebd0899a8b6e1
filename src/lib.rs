pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::NamingConfig;
pub use core::namer::CodeNamer;
pub use core::particle::{particle_name, particle_status_name};
pub use core::rescattering::{
    genie_inuke_fate_ha_rescattering_name, rescattering_name, rescattering_name_default,
};
pub use core::truth::{
    truth_ccnc_name, truth_interaction_type_name, truth_origin_code_name, truth_origin_name,
    truth_reaction_mode,
};
pub use domain::model::{
    CodeKind, NamedCode, Origin, OutputFormat, RescatterCategory, UNINITIALIZED_CODE,
};
pub use utils::error::{NamesError, Result};
