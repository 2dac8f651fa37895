//! One generation run over a loaded API description.

use crate::builtins::BuiltinEmitter;
use crate::classes::ClassEmitter;
use crate::classify::ClassificationRegistry;
use crate::config::GeneratorConfig;
use crate::enums::{EnumIndex, EnumScope, EnumSynthesizer};
use crate::output::{DeclarationGroup, FILE_HEADER, GeneratedOutput, OutputPartitioner};
use crate::registry::ReferenceTypeRegistry;
use crate::writer::SwiftWriter;
use crate::GeneratorResult;
use gdswift_schema::{DocSource, ExtensionApi, GLOBAL_SCOPE};
use tracing::{debug, info};

/// Everything a run produces.
#[derive(Debug)]
pub struct Generation {
    /// Files ready to be written.
    pub output: GeneratedOutput,
    /// Every registered enum, for resolving enum-typed references.
    pub enums: EnumIndex,
    /// Constructible engine classes.
    pub reference_types: ReferenceTypeRegistry,
    /// Built-in classification the declarations were generated with.
    pub classification: ClassificationRegistry,
}

/// Drives the synthesizers over an [`ExtensionApi`].
pub struct Generator<'a> {
    api: &'a ExtensionApi,
    docs: &'a dyn DocSource,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(api: &'a ExtensionApi, docs: &'a dyn DocSource, config: GeneratorConfig) -> Self {
        Self { api, docs, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every declaration in memory.
    ///
    /// The run is all-or-nothing: callers write [`Generation::output`] only
    /// after this returns `Ok`.
    pub fn run(&self) -> GeneratorResult<Generation> {
        self.config.validate()?;
        let api = self.api;
        let version = api.version_name().unwrap_or_else(|| "unknown".to_string());
        info!(
            %version,
            global_enums = api.global_enums.len(),
            builtins = api.builtin_classes.len(),
            classes = api.classes.len(),
            build_configuration = %self.config.build_configuration,
            "starting generation"
        );

        let classification = ClassificationRegistry::build(
            &api.builtin_classes,
            &api.builtin_class_sizes,
            &self.config.build_configuration,
        );
        let mut enums = EnumIndex::new();
        let mut reference_types = ReferenceTypeRegistry::new();
        let mut partitioner = OutputPartitioner::new(self.config.output_mode);

        let mut core = SwiftWriter::with_header(FILE_HEADER);
        {
            let global_docs = self.docs.class_doc(GLOBAL_SCOPE);
            let constants = global_docs
                .as_ref()
                .map(|d| d.constants.as_slice())
                .unwrap_or_default();
            EnumSynthesizer::new(&mut enums).generate(
                &mut core,
                &EnumScope::global(constants),
                &api.global_enums,
            );
        }
        debug!(registered = enums.len(), "global enums emitted");

        let builtins = BuiltinEmitter::new(&classification);
        let mut emitted_builtins = 0usize;
        for builtin in &api.builtin_classes {
            if !BuiltinEmitter::is_emitted(&builtin.name) {
                continue;
            }
            let doc = self.docs.class_doc(&builtin.name);
            let mut w = SwiftWriter::new();
            builtins.emit(&mut w, builtin, doc.as_ref(), &mut EnumSynthesizer::new(&mut enums));
            partitioner.add(DeclarationGroup::Builtins, &builtin.name, w.as_str());
            emitted_builtins += 1;
        }
        debug!(emitted = emitted_builtins, "built-in types emitted");

        {
            let mut classes = ClassEmitter::new(&mut reference_types);
            for class in &api.classes {
                let doc = self.docs.class_doc(&class.name);
                let mut w = SwiftWriter::new();
                classes.emit(&mut w, class, doc.as_ref(), &mut EnumSynthesizer::new(&mut enums));
                partitioner.add(DeclarationGroup::Classes, &class.name, w.as_str());
            }
        }
        debug!(emitted = api.classes.len(), "classes emitted");

        reference_types.render(&mut core);
        let output = partitioner.finish(core);

        info!(
            files = output.len(),
            enums = enums.len(),
            reference_types = reference_types.len(),
            "generation complete"
        );

        Ok(Generation {
            output,
            enums,
            reference_types,
            classification,
        })
    }
}
