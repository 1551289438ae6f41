//! TypeScript models generator.

use std::{collections::HashMap, path::Path};

use eyre::{Result, WrapErr};
use shapegen_codegen::{
    CodegenError,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use shapegen_core::GeneratedFile;
use shapegen_model::{CodegenConfig, Model, Shape, ShapeId};
use tracing::{debug, info, warn};

use crate::{
    DEFAULT_PLACEHOLDER, MemberOptions, RedactionBody, StructureGenerator, files::ModelsTs,
};

/// Default path of the models file, relative to the output directory.
pub const DEFAULT_OUTPUT: &str = "models/models_0.ts";

/// Default module the placeholder is imported from.
pub const DEFAULT_PLACEHOLDER_IMPORT: &str = "@aws-sdk/smithy-client";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Path of the models file, relative to the output directory.
    pub output: String,
    /// Leave out documentation comments.
    pub no_docs: bool,
    /// Identifier substituted for sensitive values.
    pub placeholder: String,
    /// Module the placeholder is imported from.
    pub placeholder_import: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            no_docs: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_import: DEFAULT_PLACEHOLDER_IMPORT.to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Settings from a model's `[codegen]` table, with defaults for the rest.
    pub fn from_config(config: &CodegenConfig) -> Self {
        let defaults = Self::default();
        Self {
            output: config.output.clone().unwrap_or(defaults.output),
            no_docs: config.no_docs,
            placeholder: config.placeholder.clone().unwrap_or(defaults.placeholder),
            placeholder_import: config
                .placeholder_import
                .clone()
                .unwrap_or(defaults.placeholder_import),
        }
    }

    /// Override the output path.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Override the documentation flag.
    pub fn with_no_docs(mut self, no_docs: bool) -> Self {
        self.no_docs = no_docs;
        self
    }
}

/// Counts describing a generated models file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub structures: usize,
    pub unions: usize,
    /// Redaction overrides across all structures.
    pub overrides: usize,
    /// Whether the placeholder import was emitted.
    pub placeholder_used: bool,
}

/// Output of a generation run, before anything is written.
#[derive(Debug, Clone)]
pub struct GeneratedModels {
    pub file: ModelsTs,
    pub summary: GenerationSummary,
}

/// Redaction plan for one structure.
#[derive(Debug, Clone)]
pub struct StructureRedaction {
    pub shape: ShapeId,
    pub body: RedactionBody,
}

/// TypeScript generator producing a single models file.
pub struct Generator<'a> {
    model: &'a Model,
    settings: GeneratorSettings,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let models = self.build()?;
        Ok(vec![PreviewFile {
            path: models.file.relative_path().to_string(),
            content: models.file.contents(),
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let models = self.build()?;
        let path = models.file.relative_path().to_string();

        models
            .file
            .write(output_dir)
            .wrap_err_with(|| format!("failed to write {}", path))?;

        let summary = &models.summary;
        info!(
            path = %path,
            structures = summary.structures,
            unions = summary.unions,
            overrides = summary.overrides,
            "generated models"
        );
        Ok(GenerateResult {
            written: vec![path],
        })
    }
}

impl<'a> Generator<'a> {
    /// Create a generator configured from the model's `[codegen]` table.
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            settings: GeneratorSettings::from_config(model.codegen()),
        }
    }

    /// Replace the settings.
    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate every structure and union into the models file.
    ///
    /// Fails when two shapes resolve to the same type name, since both
    /// declarations would land in one module.
    pub fn build(&self) -> Result<GeneratedModels> {
        let generator = StructureGenerator::new(self.model, &self.settings.placeholder);
        let mut file = ModelsTs::new(&self.settings.output);
        let mut summary = GenerationSummary::default();
        let mut declared: HashMap<String, &ShapeId> = HashMap::new();

        for shape in self.model.declared_shapes() {
            let options = self.member_options(shape);
            let Some(output) = generator
                .shape(shape, &options)
                .wrap_err_with(|| format!("failed to generate '{}'", shape.id))?
            else {
                continue;
            };

            if let Some(first) = declared.insert(output.name.clone(), &shape.id) {
                return Err(CodegenError::DuplicateTypeName {
                    name: output.name,
                    first: first.clone(),
                    second: shape.id.clone(),
                }
                .into());
            }

            match &output.redaction {
                Some(body) => {
                    summary.structures += 1;
                    summary.overrides += body.overrides().len();
                    summary.placeholder_used |= body.uses_placeholder();
                }
                None => summary.unions += 1,
            }
            file.declare(output.fragments);
        }

        if summary.placeholder_used {
            file.import(&self.settings.placeholder_import, &self.settings.placeholder);
        }

        debug!(
            structures = summary.structures,
            unions = summary.unions,
            "built models file"
        );
        Ok(GeneratedModels { file, summary })
    }

    /// Redaction plans for every structure, without rendering declarations.
    pub fn redactions(&self) -> Result<Vec<StructureRedaction>> {
        let synthesizer = crate::RedactionSynthesizer::new(self.model)
            .with_placeholder(&self.settings.placeholder);

        self.model
            .declared_shapes()
            .filter(|shape| shape.is_structure())
            .map(|shape| {
                let body = synthesizer
                    .synthesize(shape)
                    .wrap_err_with(|| format!("failed to analyze '{}'", shape.id))?;
                Ok(StructureRedaction {
                    shape: shape.id.clone(),
                    body,
                })
            })
            .collect()
    }

    fn member_options(&self, shape: &Shape) -> MemberOptions {
        let suppressed = self.model.codegen().suppressed(shape.id.as_str());

        for name in suppressed {
            if !shape.members().iter().any(|m| &m.name == name) {
                warn!(shape = %shape.id, member = %name, "suppressed member does not exist");
            }
        }
        if !suppressed.is_empty() {
            debug!(shape = %shape.id, count = suppressed.len(), "suppressing members");
        }

        MemberOptions::new()
            .skip(suppressed.iter().cloned())
            .no_docs(self.settings.no_docs)
    }
}

#[cfg(test)]
mod tests {
    use shapegen_model::{Member, Trait};

    use super::*;

    #[test]
    fn test_settings_from_config() {
        let config = CodegenConfig {
            output: Some("src/models.ts".into()),
            no_docs: true,
            placeholder: Some("REDACTED".into()),
            placeholder_import: None,
            suppress: Default::default(),
        };

        let settings = GeneratorSettings::from_config(&config);
        assert_eq!(settings.output, "src/models.ts");
        assert!(settings.no_docs);
        assert_eq!(settings.placeholder, "REDACTED");
        assert_eq!(settings.placeholder_import, DEFAULT_PLACEHOLDER_IMPORT);
    }

    #[test]
    fn test_settings_overrides() {
        let settings = GeneratorSettings::default()
            .with_output("out.ts")
            .with_no_docs(true);
        assert_eq!(settings.output, "out.ts");
        assert!(settings.no_docs);
    }

    #[test]
    fn test_summary_counts() {
        let model = Model::new()
            .with_shape(Shape::structure(
                "User",
                vec![
                    Member::new("name", "String"),
                    Member::new("password", "String").with_trait(Trait::Sensitive),
                ],
            ))
            .with_shape(Shape::union("Choice", vec![Member::new("user", "User")]))
            .with_shape(Shape::list("Users", "User"));

        let models = Generator::new(&model).build().unwrap();
        assert_eq!(
            models.summary,
            GenerationSummary {
                structures: 1,
                unions: 1,
                overrides: 1,
                placeholder_used: true,
            }
        );
        assert_eq!(models.file.len(), 2);
    }

    #[test]
    fn test_member_options_from_suppress() {
        let mut config = CodegenConfig::default();
        config
            .suppress
            .insert("User".to_string(), vec!["secret".to_string()]);
        let model = Model::new()
            .with_codegen(config)
            .with_shape(Shape::structure(
                "User",
                vec![Member::new("secret", "String")],
            ));
        let generator = Generator::new(&model);

        let options = generator.member_options(model.shape(&"User".into()).unwrap());
        assert!(options.skip.contains("secret"));
        assert!(!options.no_docs);
    }

    #[test]
    fn test_duplicate_type_names_rejected() {
        let model = Model::new()
            .with_shape(Shape::structure(
                "user_profile",
                vec![Member::new("a", "String").with_trait(Trait::Sensitive)],
            ))
            .with_shape(Shape::structure(
                "UserProfile",
                vec![Member::new("b", "String")],
            ));

        let err = Generator::new(&model).build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "shapes 'user_profile' and 'UserProfile' both resolve to the type name 'UserProfile'"
        );
    }

    #[test]
    fn test_union_and_structure_names_collide() {
        let model = Model::new()
            .with_shape(Shape::structure("A_B", vec![]))
            .with_shape(Shape::union("A-B", vec![Member::new("x", "String")]));

        let err = Generator::new(&model).build().unwrap_err();
        let err = err.downcast_ref::<CodegenError>().unwrap();
        assert!(matches!(
            err,
            CodegenError::DuplicateTypeName { name, .. } if name == "AB"
        ));
    }

    #[test]
    fn test_redactions() {
        let model = Model::new()
            .with_shape(Shape::structure("Empty", vec![]))
            .with_shape(Shape::structure(
                "User",
                vec![Member::new("password", "String").with_trait(Trait::Sensitive)],
            ));

        let redactions = Generator::new(&model).redactions().unwrap();
        assert_eq!(redactions.len(), 2);
        assert!(redactions[0].body.overrides().is_empty());
        assert_eq!(redactions[1].shape.as_str(), "User");
        assert_eq!(redactions[1].body.overrides()[0].name, "password");
    }
}
