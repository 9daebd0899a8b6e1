use crate::core::particle::{particle_name, particle_status_name};
use crate::core::rescattering::rescattering_name;
use crate::core::truth::{
    truth_ccnc_name, truth_interaction_type_name, truth_origin_code_name, truth_reaction_mode,
};
use crate::core::{CodeKind, ConfigProvider, NamedCode, RescatterCategory};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

/// Routes raw codes to the right naming table, with the rescattering
/// category and output format fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct CodeNamer {
    category: RescatterCategory,
    format: OutputFormat,
}

impl CodeNamer {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        let namer = Self {
            category: config.default_rescatter_category(),
            format: config.output_format(),
        };
        tracing::debug!(
            "CodeNamer ready (rescattering category: {}, format: {:?})",
            namer.category,
            namer.format
        );
        namer
    }

    pub fn category(&self) -> RescatterCategory {
        self.category
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn name(&self, kind: CodeKind, code: i32) -> String {
        let name = match kind {
            CodeKind::Particle => particle_name(code),
            CodeKind::Status => particle_status_name(code),
            CodeKind::Origin => truth_origin_code_name(code),
            CodeKind::CcNc => truth_ccnc_name(code),
            CodeKind::ReactionMode => truth_reaction_mode(code),
            CodeKind::InteractionType => truth_interaction_type_name(code),
            CodeKind::Rescattering => rescattering_name(code, self.category),
        };
        tracing::debug!("{} {} -> {}", kind, code, name);
        name
    }

    pub fn describe(&self, kind: CodeKind, code: i32) -> NamedCode {
        NamedCode {
            kind,
            code,
            name: self.name(kind, code),
        }
    }

    pub fn describe_all(&self, kind: CodeKind, codes: &[i32]) -> Vec<NamedCode> {
        codes.iter().map(|&code| self.describe(kind, code)).collect()
    }

    /// Renders described codes in the configured format: one
    /// `kind code: name` line each, or a JSON array.
    pub fn render(&self, named: &[NamedCode]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(named
                .iter()
                .map(|entry| entry.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(named)?),
        }
    }
}

impl Default for CodeNamer {
    fn default() -> Self {
        Self {
            category: RescatterCategory::default(),
            format: OutputFormat::default(),
        }
    }
}
