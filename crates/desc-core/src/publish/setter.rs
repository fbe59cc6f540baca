//! Core DescriptionSetter implementation

use desc_domain::{DescriptionTemplate, EnvVars};

use crate::extract::FactExtractor;
use crate::listener::BuildListener;
use crate::model::{BuildContext, Checkpoint, Publication};
use crate::publish::DescriptionSink;

/// Motor de publicación de descripciones por checkpoint.
///
/// Responsable de, en cada checkpoint: tomar el snapshot del entorno,
/// invocar al extractor de facts (solo si workspace y nodo existen ya),
/// mergear con precedencia de facts, expandir la plantilla y persistir el
/// resultado en el sink. Sin estado compartido entre builds: es reentrante,
/// y un mismo input produce siempre la misma descripción.
#[derive(Debug)]
pub struct DescriptionSetter<X, S>
    where X: FactExtractor,
          S: DescriptionSink
{
    template: DescriptionTemplate,
    extractor: X,
    sink: S,
}

impl<X, S> DescriptionSetter<X, S>
    where X: FactExtractor,
          S: DescriptionSink
{
    pub fn new(template: DescriptionTemplate, extractor: X, sink: S) -> Self {
        Self { template, extractor, sink }
    }

    pub fn template(&self) -> &DescriptionTemplate {
        &self.template
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Publica la descripción para `checkpoint`.
    ///
    /// Contexto ausente -> no-op con contribución vacía (el host puede
    /// invocar el hook antes de crear el build). Nunca retorna error: los
    /// fallos de extracción degradan a facts `""` y un fallo del sink se
    /// reduce a una línea de log.
    pub fn publish(&mut self, ctx: Option<&BuildContext>, checkpoint: Checkpoint, listener: &mut dyn BuildListener) -> Publication {
        let ctx = match ctx {
            Some(ctx) => ctx,
            None => return Publication::skipped(checkpoint),
        };

        let snapshot = ctx.env.clone();
        let facts = match (ctx.workspace.as_deref(), ctx.node.as_ref()) {
            (Some(workspace), Some(node)) => self.extractor.extract(workspace, node, &snapshot, listener),
            _ => EnvVars::new(),
        };

        // Los facts pisan sus cuatro claves; el resto del snapshot pasa intacto.
        let merged = snapshot.merged_with(&facts);
        let text = self.template.expand(&merged);

        if let Err(e) = self.sink.set_description(ctx.build_id, checkpoint, &text) {
            listener.log(&format!("description not persisted at {checkpoint}: {e}"));
            log::warn!("sink rejected description for build {}: {e}", ctx.build_id);
        }

        Publication { checkpoint,
                      description: Some(text),
                      contributed: facts }
    }

    /// Checkpoint pre-work (opcional, dependiente del backend del host):
    /// solo expande contra el entorno preexistente.
    pub fn pre_work(&mut self, ctx: Option<&BuildContext>, listener: &mut dyn BuildListener) -> Publication {
        self.publish(ctx, Checkpoint::PreWork, listener)
    }

    /// Checkpoint post-setup: además de publicar, registra la contribución
    /// como variables nuevas con alcance build (visible para los pasos
    /// posteriores). Es el único checkpoint que registra.
    pub fn set_up(&mut self, ctx: &mut BuildContext, listener: &mut dyn BuildListener) -> Publication {
        let publication = self.publish(Some(ctx), Checkpoint::PostSetup, listener);
        ctx.contribute(&publication.contributed);
        publication
    }

    /// Checkpoint teardown: repite extracción y expansión desde el estado
    /// actual (la revisión puede haber cambiado durante el build). La
    /// contribución se retorna pero no se re-registra.
    pub fn tear_down(&mut self, ctx: Option<&BuildContext>, listener: &mut dyn BuildListener) -> Publication {
        self.publish(ctx, Checkpoint::Teardown, listener)
    }

    /// Inicio de un build agregado: misma lógica, contra el contexto propio
    /// del agregado (independiente de los sub-builds).
    pub fn aggregate_start(&mut self, ctx: Option<&BuildContext>, listener: &mut dyn BuildListener) -> Publication {
        self.publish(ctx, Checkpoint::AggregateStart, listener)
    }

    /// Fin de un build agregado.
    pub fn aggregate_end(&mut self, ctx: Option<&BuildContext>, listener: &mut dyn BuildListener) -> Publication {
        self.publish(ctx, Checkpoint::AggregateEnd, listener)
    }
}
